use core::fmt::Debug;

use Suspend::*;

use crate::coro::Coro;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;

fn expect_yield<Y, R, N>(step: Step<Y, R, N>, expected: Y) -> N
where
    Y: PartialEq + Debug,
    R: Debug,
{
    match step {
        Ok(Yield(actual, next)) => {
            assert_eq!(
                actual, expected,
                "expected Yield({expected:?}), got Yield({actual:?})"
            );
            next
        }
        Ok(Return(actual)) => {
            panic!("expected Yield({expected:?}), got Return({actual:?})")
        }
        Err(e) => panic!("expected Yield({expected:?}), got Err({e})"),
    }
}

fn expect_return<Y, R, N>(step: Step<Y, R, N>, expected: R)
where
    Y: Debug,
    R: PartialEq + Debug,
{
    match step {
        Ok(Yield(actual, _)) => {
            panic!("expected Return({expected:?}), got Yield({actual:?})")
        }
        Ok(Return(actual)) => {
            assert_eq!(
                actual, expected,
                "expected Return({expected:?}), got Return({actual:?})"
            );
        }
        Err(e) => panic!("expected Return({expected:?}), got Err({e})"),
    }
}

/// Extension trait providing assertion methods for testing coroutines that
/// have not started yet.
///
/// ```rust
/// use corelay::{CoroAssertions, IntoCoro, StartAssertions};
///
/// ["a", "b"]
///     .into_coro()
///     .assert_advances("a")
///     .assert_yields((), "b")
///     .assert_returns((), ());
/// ```
pub trait StartAssertions<I, Y, R>: Start<I, Y, R> {
    /// Advances the coroutine and asserts that it produces `expected`.
    /// Panics if it returns or fails instead.
    ///
    /// Returns the started coroutine, so it can be chained with
    /// [`CoroAssertions`].
    fn assert_advances(self, expected: Y) -> Self::Coro
    where
        Y: PartialEq + Debug,
        R: Debug,
    {
        expect_yield(self.advance(), expected)
    }

    /// Advances the coroutine and asserts that it returns `expected` without
    /// producing anything.
    ///
    /// ```rust
    /// use corelay::{Start, StartAssertions, just_return};
    ///
    /// just_return(99)
    ///     .yields::<i32>()
    ///     .accepts::<()>()
    ///     .assert_finishes(99);
    /// ```
    fn assert_finishes(self, expected: R)
    where
        Y: Debug,
        R: PartialEq + Debug,
    {
        expect_return(self.advance(), expected)
    }
}

impl<I, Y, R, T> StartAssertions<I, Y, R> for T where T: Start<I, Y, R> {}

/// Extension trait providing assertion methods for testing suspended
/// coroutines.
///
/// This trait is separate from [`Coro`] to keep the core trait focused on
/// essential operations. Import this trait in your tests to access assertion
/// methods.
pub trait CoroAssertions<I, Y, R>: Coro<I, Y, R> {
    /// Resumes the coroutine with `input` and asserts that it produces
    /// `expected`. Panics if the coroutine returns or fails instead, or if the
    /// produced value is not equal to the expected value.
    ///
    /// Since it returns the coroutine after the assertion, it can be chained
    /// with other assertions like so:
    ///
    /// ```rust
    /// use core::ops::ControlFlow::Continue;
    ///
    /// use corelay::{CoroAssertions, StartAssertions, from_fn};
    ///
    /// let mut length = 0;
    /// from_fn(move |s: Option<&str>| {
    ///     length += s.map_or(0, str::len);
    ///     Continue::<(), _>(length)
    /// })
    /// .assert_advances(0)
    /// .assert_yields("foo", 3)
    /// .assert_yields("bar", 6)
    /// .assert_yields("hello", 11);
    /// ```
    fn assert_yields(self, input: I, expected: Y) -> Self
    where
        Y: PartialEq + Debug,
        R: Debug,
    {
        expect_yield(self.resume(input), expected)
    }

    /// Resumes the coroutine with `input` and asserts that it returns
    /// `expected`. Panics if the coroutine produces a value or fails instead.
    ///
    /// This is useful at the end of a chain of `assert_yields()` calls.
    fn assert_returns(self, input: I, expected: R)
    where
        Y: Debug,
        R: PartialEq + Debug,
    {
        expect_return(self.resume(input), expected)
    }
}

/// Blanket implementation of [`CoroAssertions`] for all types implementing
/// [`Coro`].
impl<I, Y, R, T> CoroAssertions<I, Y, R> for T where T: Coro<I, Y, R> {}
