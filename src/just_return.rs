use Suspend::Return;

use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;
use crate::void::Void;

/// A coroutine that just returns a value.
///
/// See [`just_return()`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct JustReturn<T>(T);
impl<I, Y, T> Start<I, Y, T> for JustReturn<T> {
    type Coro = Void;
    fn advance(self) -> Step<Y, T, Self::Coro> {
        Ok(Return(self.0))
    }
}

/// Create a coroutine that returns a value as soon as it is advanced, without
/// producing anything.
///
/// A coroutine created with `just_return` is compatible with any function that
/// expects a coroutine with any input and yield types, as long as the return
/// type of the coroutine is the same as the value passed to `just_return`.
pub fn just_return<T>(t: T) -> JustReturn<T> {
    JustReturn(t)
}
