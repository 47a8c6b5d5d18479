use core::marker::PhantomData;

use Suspend::*;

use crate::coro::Coro;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

/// A coroutine that produces the result of a function once, then returns
/// whatever it is sent.
///
/// See [`oneyield()`].
#[derive(Debug, Clone)]
pub struct OneYield<F, A> {
    func: F,
    args: A,
}

/// The suspended state of a [`OneYield`], waiting for the value it will
/// return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sent<Y>(PhantomData<Y>);

impl<I, Y, F, A> Start<I, Y, I> for OneYield<F, A>
where
    F: FnOnce(A) -> Y,
{
    type Coro = Sent<Y>;
    fn advance(self) -> Step<Y, I, Self::Coro> {
        let Self { func, args } = self;
        Ok(Yield(func(args), Sent(PhantomData)))
    }
}

impl<I, Y> Coro<I, Y, I> for Sent<Y> {
    fn resume(self, input: I) -> Step<Y, I, Self> {
        Ok(Return(input))
    }
}

/// Turns a plain function into a function that returns single-step
/// coroutines.
///
/// Calling the result with some arguments gives a coroutine which, when
/// advanced, calls `func` with those arguments and produces its return value.
/// The value it is then sent becomes its terminal result. Exactly one
/// produce/accept exchange happens.
///
/// Functions of several arguments take them as a tuple.
///
/// `oneyield(|x| x)` is the relay function that changes nothing: it passes
/// each produced value on and hands each reply straight back.
///
/// # Examples
///
/// ```rust
/// use corelay::{Start, StartAssertions, oneyield, sendreturn};
///
/// let add = oneyield(|(a, b, c): (i32, i32, i32)| a + b + c);
/// let coro = add((1, 2, 3)).accepts::<i32>().assert_advances(6);
/// assert_eq!(sendreturn(coro, 9).unwrap(), 9);
/// ```
pub fn oneyield<A, Y, F>(func: F) -> impl Fn(A) -> OneYield<F, A> + Clone
where
    F: Fn(A) -> Y + Clone,
{
    move |args| OneYield {
        func: func.clone(),
        args,
    }
}
