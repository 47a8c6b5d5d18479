use core::marker::PhantomData;

use tracing::trace;

use Suspend::*;

use crate::coro::Coro;
use crate::delegate::Delegate;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

/// A coroutine whose exchanges are relayed through fresh coroutines, before it
/// has started.
///
/// See [`Start::relay()`].
pub struct Relay<I, Y, K, F> {
    coro: Delegate<K>,
    thru: F,
    _phantom: PhantomData<(I, Y)>,
}

impl<I, Y, K, F> Relay<I, Y, K, F> {
    pub fn new(coro: K, thru: F) -> Self {
        Relay {
            coro: Delegate::new(coro),
            thru,
            _phantom: PhantomData,
        }
    }
}

/// A relayed coroutine suspended inside one of its relay coroutines.
///
/// Whenever the caller observes a relayed coroutine, the wrapped coroutine is
/// waiting for a reply and the relay coroutine `D` is waiting for input, so
/// both are always present.
pub struct Relaying<I, Y, K, D, F> {
    coro: Delegate<K>,
    relay: Delegate<D>,
    thru: F,
    _phantom: PhantomData<(I, Y)>,
}

impl<I, Y, K, D, F> Relaying<I, Y, K, D, F> {
    /// Runs the relay loop until a relay coroutine yields or the wrapped
    /// coroutine returns.
    ///
    /// `relayed` is the outcome of the last interaction with the current relay
    /// coroutine. Its terminal result is sent into the wrapped coroutine, and
    /// its error is injected into it, the same way an error would surface
    /// at the wrapped coroutine's suspension point if it had delegated to the
    /// relay coroutine itself.
    fn drive<I2, Y2, R, T>(
        mut coro: Delegate<K>,
        mut thru: F,
        mut relayed: Step<Y2, I, Delegate<D>>,
    ) -> Step<Y2, R, Self>
    where
        K: Coro<I, Y, R>,
        D: Coro<I2, Y2, I>,
        F: FnMut(Y) -> T,
        T: Start<I2, Y2, I, Coro = D>,
    {
        loop {
            let produced = match relayed {
                Ok(Yield(y, relay)) => {
                    return Ok(Yield(
                        y,
                        Relaying {
                            coro,
                            relay,
                            thru,
                            _phantom: PhantomData,
                        },
                    ));
                }
                Ok(Return(reply)) => {
                    trace!("relay returned, resuming relayed coroutine");
                    coro.resume(reply)?
                }
                Err(e) => {
                    trace!(%e, "relay failed, injecting into relayed coroutine");
                    coro.fault(e)?
                }
            };
            match produced {
                Yield(y, next) => {
                    coro = next;
                    relayed = Delegate::new(thru(y)).advance();
                }
                Return(r) => return Ok(Return(r)),
            }
        }
    }
}

impl<I, Y, I2, Y2, R, K, F, T> Start<I2, Y2, R> for Relay<I, Y, K, F>
where
    K: Start<I, Y, R>,
    F: FnMut(Y) -> T,
    T: Start<I2, Y2, I>,
{
    type Coro = Relaying<I, Y, K::Coro, T::Coro, F>;
    fn advance(self) -> Step<Y2, R, Self::Coro> {
        let Self { coro, mut thru, .. } = self;
        match coro.advance()? {
            Yield(y, coro) => {
                let relayed = Delegate::new(thru(y)).advance();
                Relaying::<I, Y, K::Coro, T::Coro, F>::drive::<I2, Y2, R, T>(
                    coro, thru, relayed,
                )
            }
            Return(r) => Ok(Return(r)),
        }
    }
}

impl<I, Y, I2, Y2, R, K, D, F, T> Coro<I2, Y2, R> for Relaying<I, Y, K, D, F>
where
    K: Coro<I, Y, R>,
    D: Coro<I2, Y2, I>,
    F: FnMut(Y) -> T,
    T: Start<I2, Y2, I, Coro = D>,
{
    fn resume(self, input: I2) -> Step<Y2, R, Self> {
        let Self {
            coro, relay, thru, ..
        } = self;
        Self::drive::<I2, Y2, R, T>(coro, thru, relay.resume(input))
    }

    fn fault(self, fault: Error) -> Step<Y2, R, Self> {
        let Self {
            coro, relay, thru, ..
        } = self;
        Self::drive::<I2, Y2, R, T>(coro, thru, relay.fault(fault))
    }

    fn cancel(self) {
        let Self { coro, relay, .. } = self;
        relay.cancel();
        coro.cancel();
    }
}

/// Relays a coroutine through several relay functions in turn.
///
/// `relay!(coro, f1, f2)` is `coro.relay(f1).relay(f2)`: `f1` sees the values
/// produced by `coro`, and `f2` sees the values produced by the relay
/// coroutines of `f1`.
///
/// # Examples
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use corelay::{CoroAssertions, Start, StartAssertions, from_fn, oneyield, relay};
///
/// let ask = from_fn(|sent: Option<i32>| match sent {
///     None => Continue(0),
///     Some(n) => Break(n),
/// });
/// relay!(ask, oneyield(|n: i32| n + 1), oneyield(|n: i32| n * 10))
///     .assert_advances(10)
///     .assert_returns(7, 7);
/// ```
#[macro_export]
macro_rules! relay {
    ($coro:expr $(,)?) => {
        $coro
    };
    ($coro:expr, $thru:expr $(, $rest:expr)* $(,)?) => {
        $crate::relay!($crate::Start::relay($coro, $thru) $(, $rest)*)
    };
}
