use either::Either;
use crate::Coro;
use crate::Error;
use crate::Start;
use crate::Step;
use Either::Left;
use Either::Right;

/// Implement the `Start` trait for the `Either` type when both variants
/// themselves implement `Start` for the same input and output types.
///
/// This lets a relay function pick one of two coroutine types at run time.
impl<I, Y, R, A, B> Start<I, Y, R> for Either<A, B>
where
    A: Start<I, Y, R>,
    B: Start<I, Y, R>,
{
    type Coro = Either<A::Coro, B::Coro>;
    fn advance(self) -> Step<Y, R, Self::Coro> {
        match self {
            Left(a) => Ok(a.advance()?.map_next(Left)),
            Right(b) => Ok(b.advance()?.map_next(Right)),
        }
    }
}

impl<I, Y, R, A, B> Coro<I, Y, R> for Either<A, B>
where
    A: Coro<I, Y, R>,
    B: Coro<I, Y, R>,
{
    fn resume(self, input: I) -> Step<Y, R, Self> {
        match self {
            Left(a) => Ok(a.resume(input)?.map_next(Left)),
            Right(b) => Ok(b.resume(input)?.map_next(Right)),
        }
    }

    fn fault(self, fault: Error) -> Step<Y, R, Self> {
        match self {
            Left(a) => Ok(a.fault(fault)?.map_next(Left)),
            Right(b) => Ok(b.fault(fault)?.map_next(Right)),
        }
    }

    fn cancel(self) {
        match self {
            Left(a) => a.cancel(),
            Right(b) => b.cancel(),
        }
    }
}
