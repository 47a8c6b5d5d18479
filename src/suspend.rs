use crate::error::Error;

/// The state of a coroutine after a call to `advance()`, `resume()`, or
/// `fault()` has finished.
///
/// After such a call finishes, the coroutine is in one of two states:
///
///   * `Yield(y, n)`: The coroutine produced a value `y` and is ready to be
///     resumed with the next input value. The suspended coroutine is `n`,
///     which necessarily implements the `Coro` trait.
///   * `Return(r)`: The coroutine has finished with the terminal result `r`.
///     The coroutine cannot be resumed again, because the call has consumed it
///     without giving back a `Coro` value to resume.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suspend<Y, R, N> {
    Yield(Y, N),
    Return(R),
}

/// The outcome of driving a coroutine one step.
///
/// `Err` means the coroutine raised (or failed to handle) an error and is
/// terminated.
pub type Step<Y, R, N> = Result<Suspend<Y, R, N>, Error>;

use Suspend::*;

impl<Y, R, N> Suspend<Y, R, N> {
    /// Returns the yielded value and the next state of the coroutine, if the
    /// coroutine is in the `Yield` state, or `None` otherwise.
    ///
    /// Compare to `Result::ok()` or `ControlFlow::continue_value()`.
    pub fn into_yield(self) -> Option<(Y, N)> {
        match self {
            Yield(y, n) => Some((y, n)),
            Return(_) => None,
        }
    }

    /// Returns the return value of the coroutine, if the coroutine is in the
    /// `Return` state, or `None` otherwise.
    ///
    /// Compare to `Result::err()` or `ControlFlow::break_value()`.
    pub fn into_return(self) -> Option<R> {
        match self {
            Yield(_, _) => None,
            Return(r) => Some(r),
        }
    }

    /// Rewraps the suspended coroutine of a `Yield`, leaving the yielded value
    /// and any return value untouched.
    pub fn map_next<N2>(self, f: impl FnOnce(N) -> N2) -> Suspend<Y, R, N2> {
        match self {
            Yield(y, n) => Yield(y, f(n)),
            Return(r) => Return(r),
        }
    }
}
