use crate::coro::Coro;
use crate::suspend::Step;

/// A stand-in for the 'never' type `!`, which can be used as the suspended
/// state of a coroutine that never produces a value.
///
/// This type cannot be instantiated, so it is impossible to `Yield` from a
/// coroutine whose `Coro` type is `Void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}

impl<I, Y, R> Coro<I, Y, R> for Void {
    fn resume(self, _: I) -> Step<Y, R, Self> {
        match self {}
    }
}
