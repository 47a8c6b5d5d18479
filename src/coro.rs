use crate::error::Error;
use crate::suspend::Step;

/// A coroutine suspended at a produced value, waiting for an input of type
/// `I`. Resuming it either "yields" another value of type `Y` or "returns" a
/// terminal result of type `R`.
///
/// Every method consumes the coroutine. The caller gets a coroutine back to
/// continue with *only* if it yielded a value: if the coroutine returned, or
/// raised an error, there is nothing left to resume, so it is impossible to
/// drive a coroutine after it has terminated.
///
/// Contrast this with `Iterator`, which lets you call `next()` as many
/// times as you want, even after it has returned `None`. Implementors of
/// `Iterator` are expected to return `None` every time after they have once
/// returned `None`, but there is no way to enforce this in the type system.
///
/// A `Coro` is always reached through a [`Start`](crate::Start), the
/// not-started state of a coroutine, whose `advance()` produces the first
/// value. A value can only be sent once a value has been produced.
///
/// `resume()` hands back `Self`: a suspended coroutine is a single state
/// machine type, however many times it is resumed. This is what lets relays
/// and reusable factories loop over coroutines whose lifetime is only known
/// at run time.
pub trait Coro<I, Y, R>: Sized {
    /// Sends `input` into the coroutine, returning the next produced value or
    /// the terminal result.
    fn resume(self, input: I) -> Step<Y, R, Self>;

    /// Injects a fault at the point where the coroutine is suspended.
    ///
    /// The coroutine may catch the fault and produce another value, catch it
    /// and return, or let it propagate as `Err`. The default implementation
    /// cleans up with `cancel()` and propagates `fault` unchanged.
    fn fault(self, fault: Error) -> Step<Y, R, Self> {
        self.cancel();
        Err(fault)
    }

    /// Asks the coroutine to clean up and terminate.
    ///
    /// The default implementation does nothing beyond dropping the coroutine.
    /// Combinators override this to cancel the coroutines they wrap.
    fn cancel(self) {}
}
