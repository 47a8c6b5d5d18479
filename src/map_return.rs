use core::marker::PhantomData;

use Suspend::*;

use crate::coro::Coro;
use crate::delegate::Delegate;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

/// A coroutine that delegates everything to the wrapped coroutine, then maps
/// its terminal result.
///
/// See [`Start::map_return()`] and [`Start::try_map_return()`].
pub struct MapReturn<R, K, F> {
    coro: Delegate<K>,
    f: F,
    _phantom: PhantomData<R>,
}

impl<R, K, F> MapReturn<R, K, F> {
    pub fn new(coro: K, f: F) -> Self {
        MapReturn {
            coro: Delegate::new(coro),
            f,
            _phantom: PhantomData,
        }
    }

    fn settle<Y, R2>(step: Step<Y, R, Delegate<K>>, f: F) -> Step<Y, R2, Self>
    where
        F: FnOnce(R) -> Result<R2, Error>,
    {
        match step? {
            Yield(y, coro) => Ok(Yield(
                y,
                MapReturn {
                    coro,
                    f,
                    _phantom: PhantomData,
                },
            )),
            Return(r) => f(r).map(Return),
        }
    }
}

impl<I, Y, K, F, R, R2> Start<I, Y, R2> for MapReturn<R, K, F>
where
    K: Start<I, Y, R>,
    F: FnOnce(R) -> Result<R2, Error>,
{
    type Coro = MapReturn<R, K::Coro, F>;
    fn advance(self) -> Step<Y, R2, Self::Coro> {
        let Self { coro, f, .. } = self;
        MapReturn::settle(coro.advance(), f)
    }
}

impl<I, Y, K, F, R, R2> Coro<I, Y, R2> for MapReturn<R, K, F>
where
    K: Coro<I, Y, R>,
    F: FnOnce(R) -> Result<R2, Error>,
{
    fn resume(self, input: I) -> Step<Y, R2, Self> {
        let Self { coro, f, .. } = self;
        Self::settle(coro.resume(input), f)
    }

    fn fault(self, fault: Error) -> Step<Y, R2, Self> {
        let Self { coro, f, .. } = self;
        Self::settle(coro.fault(fault), f)
    }

    fn cancel(self) {
        self.coro.cancel()
    }
}
