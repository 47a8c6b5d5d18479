use tracing::trace;

use Suspend::*;

use crate::coro::Coro;
use crate::error::Error;
use crate::suspend::Suspend;

/// Sends a value into a coroutine that is expected to return as a direct
/// consequence, and gives back its terminal result.
///
/// If the coroutine produces another value instead, the caller's assumption
/// about when the coroutine finishes was wrong: the coroutine is cancelled
/// and the result is an [`Error::ProtocolViolation`]. Errors raised by the
/// coroutine itself propagate unchanged.
///
/// # Examples
///
/// ```rust
/// use core::ops::ControlFlow::{Break, Continue};
///
/// use corelay::{Error, Start, StartAssertions, from_fn, sendreturn};
///
/// let countdown = || {
///     let mut n = 3;
///     from_fn(move |sent: Option<i32>| {
///         n -= sent.unwrap_or(0);
///         if n > 0 { Continue(n) } else { Break("liftoff") }
///     })
/// };
///
/// let coro = countdown().assert_advances(3);
/// assert_eq!(sendreturn(coro, 3).unwrap(), "liftoff");
///
/// let coro = countdown().assert_advances(3);
/// assert!(matches!(sendreturn(coro, 1), Err(Error::ProtocolViolation(_))));
/// ```
pub fn sendreturn<I, Y, R, K>(coro: K, value: I) -> Result<R, Error>
where
    K: Coro<I, Y, R>,
{
    match coro.resume(value)? {
        Return(r) => Ok(r),
        Yield(_, coro) => {
            trace!("coroutine yielded where a return was expected");
            coro.cancel();
            Err(Error::ProtocolViolation(
                "coroutine did not return as expected",
            ))
        }
    }
}
