use crate::coro::Coro;
use crate::error::Error;
use crate::map_return::MapReturn;
use crate::map_send::MapSend;
use crate::map_yield::MapYield;
use crate::metaprogramming::Is;
use crate::relay::Relay;
use crate::suspend::Step;

/// A coroutine that has not started yet.
///
/// The only thing to do with a fresh coroutine is to `advance()` it, which
/// runs it up to its first produced value (or straight to its terminal
/// result, if it produces nothing). Only then does it become a [`Coro`] that
/// accepts input. This makes it a type error to send a value into a
/// coroutine that has not started.
///
/// The combinators on this trait all wrap coroutines *before* they start, so
/// that no produced value can slip past the wrapper. Wrapping a coroutine that
/// has already produced a value can't be expressed.
///
/// Coroutines are built by implementing `Start` and `Coro` for a pair of
/// types, by using helpers like [`from_fn()`](crate::from_fn) and
/// [`oneyield()`](crate::oneyield), or by converting an iterator with
/// [`IntoCoro`](crate::IntoCoro).
pub trait Start<I, Y, R>: Sized {
    /// The coroutine once it has produced its first value.
    type Coro: Coro<I, Y, R>;

    /// Runs the coroutine up to its first produced value.
    fn advance(self) -> Step<Y, R, Self::Coro>;

    /// Fixes the yield type to a specific type.
    ///
    /// This is useful when the compiler is unable to infer the yield type of a
    /// coroutine, which can happen when using things like `just_return()`,
    /// which are generic over the yield type.
    ///
    /// This has no runtime overhead; the result of this function is the same
    /// as `self`, just reinterpreted as a particular `Start` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelay::{Start, just_return};
    ///
    /// let step = just_return(10).yields::<&str>().accepts::<()>().advance();
    /// assert_eq!(step.unwrap().into_return(), Some(10));
    /// ```
    fn yields<Y2>(self) -> impl Start<I, Y, R, Coro = Self::Coro>
    where
        Y2: Is<Type = Y>,
    {
        self
    }

    /// Fixes the return type to a specific type.
    ///
    /// Coroutines that never return, or that return whatever they are sent,
    /// are generic over their return type. When nothing downstream pins it
    /// down, use `returns::<R>()` to do it explicitly.
    fn returns<R2>(self) -> impl Start<I, Y, R, Coro = Self::Coro>
    where
        R2: Is<Type = R>,
    {
        self
    }

    /// Fixes the input type to a specific type.
    fn accepts<I2>(self) -> impl Start<I, Y, R, Coro = Self::Coro>
    where
        I2: Is<Type = I>,
    {
        self
    }

    /// Calls the provided closure on each value *produced* by this coroutine.
    /// The coroutine returned will produce the results of the closure. Inputs
    /// and the terminal result pass through unchanged.
    ///
    /// Compare to [`std::iter::Iterator::map()`](
    ///     https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.map
    /// ).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core::ops::ControlFlow::{Break, Continue};
    ///
    /// use corelay::{CoroAssertions, Start, StartAssertions, from_fn};
    ///
    /// let mut n = 0;
    /// from_fn(move |_: Option<()>| {
    ///     n += 1;
    ///     if n < 3 { Continue(n) } else { Break("done") }
    /// })
    /// .map_yield(|n: i32| n * 10)
    /// .assert_advances(10)
    /// .assert_yields((), 20)
    /// .assert_returns((), "done");
    /// ```
    fn map_yield<Y2, F>(self, mut f: F) -> impl Start<I, Y2, R>
    where
        F: FnMut(Y) -> Y2,
    {
        self.try_map_yield(move |y| Ok(f(y)))
    }

    /// Like `map_yield()`, but the closure may fail. An error from the
    /// closure propagates to the caller, and the wrapped coroutine is
    /// cancelled without being resumed.
    fn try_map_yield<Y2, F>(self, f: F) -> MapYield<Y, Self, F>
    where
        F: FnMut(Y) -> Result<Y2, Error>,
    {
        MapYield::new(self, f)
    }

    /// Calls the provided closure on each value *sent* to the returned
    /// coroutine, and passes its result on to this coroutine.
    ///
    /// Unlike `map_yield()` and `map_return()`, this combinator changes an
    /// *input* type rather than an output type, and therefore it's the
    /// closure's *output* type that needs to match this coroutine's input
    /// type.
    fn map_send<I2, F>(self, mut f: F) -> impl Start<I2, Y, R>
    where
        F: FnMut(I2) -> I,
    {
        self.try_map_send(move |i| Ok(f(i)))
    }

    /// Like `map_send()`, but the closure may fail, e.g. when parsing the
    /// sent value. An error from the closure propagates to the caller, and
    /// the wrapped coroutine is cancelled without being resumed.
    fn try_map_send<I2, F>(self, f: F) -> MapSend<Self, F>
    where
        F: FnMut(I2) -> Result<I, Error>,
    {
        MapSend::new(self, f)
    }

    /// Calls the provided closure on the *terminal result* of this coroutine.
    /// Produced and accepted values pass through unchanged.
    ///
    /// Because coroutines can only return once, the closure type is `FnOnce`.
    fn map_return<R2, F>(self, f: F) -> impl Start<I, Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.try_map_return(move |r| Ok(f(r)))
    }

    /// Like `map_return()`, but the closure may fail.
    fn try_map_return<R2, F>(self, f: F) -> MapReturn<R, Self, F>
    where
        F: FnOnce(R) -> Result<R2, Error>,
    {
        MapReturn::new(self, f)
    }

    /// Relays every produced/accepted exchange of this coroutine through a
    /// fresh coroutine created by `thru`.
    ///
    /// Each time this coroutine produces `y`, `thru(y)` is started and driven
    /// until it returns: everything it produces is surfaced to the caller, and
    /// everything the caller sends goes into it. Its terminal result is then
    /// sent into this coroutine. The relay coroutine can thus validate,
    /// retry, or transform each exchange, inserting interactions that this
    /// coroutine never sees.
    ///
    /// Use the [`relay!`](crate::relay!) macro to relay through several
    /// functions in turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use core::ops::ControlFlow::{Break, Continue};
    ///
    /// use corelay::{CoroAssertions, Start, StartAssertions, from_fn};
    ///
    /// // Asks for a number, then returns it doubled.
    /// let ask = from_fn(|sent: Option<i32>| match sent {
    ///     None => Continue("number?"),
    ///     Some(n) => Break(n * 2),
    /// });
    ///
    /// // Insists on a positive answer before passing it on.
    /// let insist = |question: &'static str| {
    ///     from_fn(move |sent: Option<i32>| match sent {
    ///         None => Continue(question),
    ///         Some(n) if n <= 0 => Continue("positive, please"),
    ///         Some(n) => Break(n),
    ///     })
    /// };
    ///
    /// ask.relay(insist)
    ///     .assert_advances("number?")
    ///     .assert_yields(-1, "positive, please")
    ///     .assert_returns(4, 8);
    /// ```
    fn relay<I2, Y2, F, T>(self, thru: F) -> Relay<I, Y, Self, F>
    where
        F: FnMut(Y) -> T,
        T: Start<I2, Y2, I>,
    {
        Relay::new(self, thru)
    }
}
