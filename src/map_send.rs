use crate::coro::Coro;
use crate::delegate::Delegate;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;

/// A coroutine whose accepted values pass through a mapper before they reach
/// the wrapped coroutine.
///
/// See [`Start::map_send()`] and [`Start::try_map_send()`].
pub struct MapSend<K, F>(Delegate<K>, F);

impl<K, F> MapSend<K, F> {
    pub fn new(coro: K, f: F) -> Self {
        MapSend(Delegate::new(coro), f)
    }
}

impl<Y, R, I1, I2, K, F> Start<I1, Y, R> for MapSend<K, F>
where
    K: Start<I2, Y, R>,
    F: FnMut(I1) -> Result<I2, Error>,
{
    type Coro = MapSend<K::Coro, F>;
    fn advance(self) -> Step<Y, R, Self::Coro> {
        let Self(coro, f) = self;
        Ok(coro.advance()?.map_next(|next| MapSend(next, f)))
    }
}

impl<Y, R, I1, I2, K, F> Coro<I1, Y, R> for MapSend<K, F>
where
    K: Coro<I2, Y, R>,
    F: FnMut(I1) -> Result<I2, Error>,
{
    fn resume(self, input: I1) -> Step<Y, R, Self> {
        let Self(coro, mut f) = self;
        let input = match f(input) {
            Ok(input) => input,
            Err(e) => {
                coro.cancel();
                return Err(e);
            }
        };
        Ok(coro.resume(input)?.map_next(|next| MapSend(next, f)))
    }

    fn fault(self, fault: Error) -> Step<Y, R, Self> {
        let Self(coro, f) = self;
        Ok(coro.fault(fault)?.map_next(|next| MapSend(next, f)))
    }

    fn cancel(self) {
        self.0.cancel()
    }
}
