use core::ops::ControlFlow;

use ControlFlow::*;
use Suspend::*;

use crate::coro::Coro;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

#[derive(Clone, Debug)]
pub struct FromFn<F>(F);

impl<F> FromFn<F> {
    fn call<I, Y, R>(mut self, input: Option<I>) -> Step<Y, R, Self>
    where
        F: FnMut(Option<I>) -> ControlFlow<R, Y>,
    {
        match (self.0)(input) {
            Continue(y) => Ok(Yield(y, self)),
            Break(r) => Ok(Return(r)),
        }
    }
}

impl<I, Y, R, F> Start<I, Y, R> for FromFn<F>
where
    F: FnMut(Option<I>) -> ControlFlow<R, Y>,
{
    type Coro = Self;
    fn advance(self) -> Step<Y, R, Self> {
        self.call(None)
    }
}

impl<I, Y, R, F> Coro<I, Y, R> for FromFn<F>
where
    F: FnMut(Option<I>) -> ControlFlow<R, Y>,
{
    fn resume(self, input: I) -> Step<Y, R, Self> {
        self.call(Some(input))
    }
}

/// Creates a coroutine from a function that returns [`ControlFlow`].
///
/// The function is called with `None` when the coroutine is advanced for the
/// first time, and with `Some(input)` each time it is resumed.
/// - If it returns `ControlFlow::Continue(y)`, the coroutine produces `y`.
/// - If it returns `ControlFlow::Break(r)`, the coroutine returns `r`.
///
/// This is the most straightforward way to make a coroutine without
/// implementing `Start` and `Coro` for your own data types. Coroutines that
/// need to catch faults or clean up on cancellation should implement the
/// traits instead.
///
/// # Examples
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use corelay::{CoroAssertions, StartAssertions, from_fn};
///
/// // Produces the largest value seen so far, and returns triple that once
/// // it reaches 100.
/// let mut max = 4;
/// from_fn(move |sent: Option<i32>| {
///     max = max.max(sent.unwrap_or(max));
///     if max < 100 { Continue(max) } else { Break(max * 3) }
/// })
/// .assert_advances(4)
/// .assert_yields(7, 7)
/// .assert_yields(3, 7)
/// .assert_returns(103, 309);
/// ```
pub fn from_fn<I, Y, R, F>(f: F) -> FromFn<F>
where
    F: FnMut(Option<I>) -> ControlFlow<R, Y>,
{
    FromFn(f)
}
