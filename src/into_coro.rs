use crate::coro::Coro;
use crate::error::Error;
use crate::start::Start;
use crate::suspend::Step;
use crate::suspend::Suspend;
use Suspend::{Return, Yield};

/// Implemented by types that can be converted into a coroutine.
///
/// Notably, all types that implement `IntoIterator` can be converted into a
/// coroutine that takes the unit type `()` as input, yields the elements of the
/// iterator, and returns `()` when the iterator is exhausted.
///
/// A plain iterator has nowhere to receive a fault: injecting one fails with
/// [`Error::UnsupportedOperation`]. Cancelling it just drops it.
pub trait IntoCoro<I, Y, R> {
    type IntoCoro: Start<I, Y, R>;
    fn into_coro(self) -> Self::IntoCoro;
}

impl<T, I: IntoIterator<Item = T>> IntoCoro<(), T, ()> for I {
    type IntoCoro = IteratorCoro<I::IntoIter>;
    fn into_coro(self) -> Self::IntoCoro {
        IteratorCoro(self.into_iter())
    }
}

#[derive(Debug, Clone)]
pub struct IteratorCoro<I>(I);

impl<I: Iterator> IteratorCoro<I> {
    fn step(mut self) -> Step<I::Item, (), Self> {
        match self.0.next() {
            Some(x) => Ok(Yield(x, self)),
            None => Ok(Return(())),
        }
    }
}

impl<T, I: Iterator<Item = T>> Start<(), T, ()> for IteratorCoro<I> {
    type Coro = Self;
    fn advance(self) -> Step<T, (), Self> {
        self.step()
    }
}

impl<T, I: Iterator<Item = T>> Coro<(), T, ()> for IteratorCoro<I> {
    fn resume(self, _: ()) -> Step<T, (), Self> {
        self.step()
    }

    fn fault(self, fault: Error) -> Step<T, (), Self> {
        Err(Error::UnsupportedOperation {
            operation: "fault",
            payload: Box::new(fault),
        })
    }
}
