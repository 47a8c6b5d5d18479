use tracing::trace;

use Suspend::*;

use crate::coro::Coro;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

/// Delegates every interaction to an inner coroutine until it returns.
///
/// This is the building block for "run a sub-coroutine to completion, then
/// carry on with its result". Every combinator in this crate keeps the
/// coroutine it wraps inside a `Delegate`, so all of them agree on how
/// interactions are forwarded:
///
///   * `advance()` and `resume()` go straight to the inner coroutine. When the
///     inner coroutine returns, the delegate returns the same result and is
///     used up.
///   * `cancel()` cancels the inner coroutine, so it gets to clean up before
///     the caller carries on unwinding.
///   * `fault()` is forwarded to the inner coroutine. If the inner coroutine
///     can't receive faults at all, the original fault propagates to the
///     caller unchanged rather than as an `UnsupportedOperation`.
///
/// # Examples
///
/// ```rust
/// use corelay::{CoroAssertions, IntoCoro, Start, StartAssertions, delegate};
///
/// delegate([1, 2].into_coro())
///     .assert_advances(1)
///     .assert_yields((), 2)
///     .assert_returns((), ());
/// ```
#[derive(Debug, Clone)]
pub struct Delegate<K>(K);

impl<K> Delegate<K> {
    pub fn new(inner: K) -> Self {
        Delegate(inner)
    }

    /// Takes back the inner coroutine.
    pub fn into_inner(self) -> K {
        self.0
    }
}

/// Wraps a coroutine in a [`Delegate`].
pub fn delegate<K>(inner: K) -> Delegate<K> {
    Delegate::new(inner)
}

fn delegated<Y, R, K>(step: Step<Y, R, K>) -> Step<Y, R, Delegate<K>> {
    match step? {
        Yield(y, next) => Ok(Yield(y, Delegate(next))),
        Return(r) => {
            trace!("delegate returned");
            Ok(Return(r))
        }
    }
}

impl<I, Y, R, K> Start<I, Y, R> for Delegate<K>
where
    K: Start<I, Y, R>,
{
    type Coro = Delegate<K::Coro>;
    fn advance(self) -> Step<Y, R, Self::Coro> {
        trace!("delegate started");
        delegated(self.0.advance())
    }
}

impl<I, Y, R, K> Coro<I, Y, R> for Delegate<K>
where
    K: Coro<I, Y, R>,
{
    fn resume(self, input: I) -> Step<Y, R, Self> {
        delegated(self.0.resume(input))
    }

    fn fault(self, fault: Error) -> Step<Y, R, Self> {
        trace!(%fault, "forwarding fault to delegate");
        match self.0.fault(fault) {
            Err(Error::UnsupportedOperation { payload, .. }) => {
                trace!("delegate cannot receive faults, re-raising");
                Err(*payload)
            }
            step => delegated(step),
        }
    }

    fn cancel(self) {
        trace!("cancelling delegate");
        self.0.cancel()
    }
}
