use core::marker::PhantomData;

use Suspend::*;

use crate::coro::Coro;
use crate::delegate::Delegate;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

/// A coroutine whose produced values pass through a mapper.
///
/// See [`Start::map_yield()`] and [`Start::try_map_yield()`].
pub struct MapYield<Y, K, F> {
    coro: Delegate<K>,
    f: F,
    _phantom: PhantomData<Y>,
}

impl<Y, K, F> MapYield<Y, K, F> {
    pub fn new(coro: K, f: F) -> Self {
        MapYield {
            coro: Delegate::new(coro),
            f,
            _phantom: PhantomData,
        }
    }

    fn settle<I, R, Y2>(
        step: Step<Y, R, Delegate<K>>,
        mut f: F,
    ) -> Step<Y2, R, Self>
    where
        K: Coro<I, Y, R>,
        F: FnMut(Y) -> Result<Y2, Error>,
    {
        match step? {
            Yield(y, coro) => match f(y) {
                Ok(y2) => Ok(Yield(
                    y2,
                    MapYield {
                        coro,
                        f,
                        _phantom: PhantomData,
                    },
                )),
                Err(e) => {
                    coro.cancel();
                    Err(e)
                }
            },
            Return(r) => Ok(Return(r)),
        }
    }
}

impl<I, Y, K, F, Y2, R> Start<I, Y2, R> for MapYield<Y, K, F>
where
    K: Start<I, Y, R>,
    F: FnMut(Y) -> Result<Y2, Error>,
{
    type Coro = MapYield<Y, K::Coro, F>;
    fn advance(self) -> Step<Y2, R, Self::Coro> {
        let Self { coro, f, .. } = self;
        MapYield::<Y, K::Coro, F>::settle::<I, R, Y2>(coro.advance(), f)
    }
}

impl<I, Y, K, F, Y2, R> Coro<I, Y2, R> for MapYield<Y, K, F>
where
    K: Coro<I, Y, R>,
    F: FnMut(Y) -> Result<Y2, Error>,
{
    fn resume(self, input: I) -> Step<Y2, R, Self> {
        let Self { coro, f, .. } = self;
        Self::settle::<I, R, Y2>(coro.resume(input), f)
    }

    fn fault(self, fault: Error) -> Step<Y2, R, Self> {
        let Self { coro, f, .. } = self;
        Self::settle::<I, R, Y2>(coro.fault(fault), f)
    }

    fn cancel(self) {
        self.coro.cancel()
    }
}
