//! The `corelay` crate provides composable combinators for two-way
//! coroutines: coroutines that produce values, accept a reply to each one, and
//! eventually return a terminal result.
//!
//! A coroutine here is a state machine driven over three channels:
//!
//!   * *advance* starts it, running it up to its first produced value,
//!   * *resume* sends a value in reply to the last produced value,
//!   * *fault* injects an error at the point where the coroutine is suspended,
//!
//! plus *cancel*, which asks it to clean up and stop. Each drive call gives a
//! [`Step`]: either another produced value along with the coroutine to drive
//! next, or the terminal result, or an error.
//!
//! The two halves of the protocol are separate traits:
//!
//! ```rust
//! # use corelay::{Error, Step};
//! pub trait Start<I, Y, R>: Sized {
//!     type Coro: Coro<I, Y, R>;
//!     fn advance(self) -> Step<Y, R, Self::Coro>;
//! }
//!
//! pub trait Coro<I, Y, R>: Sized {
//!     fn resume(self, input: I) -> Step<Y, R, Self>;
//!     fn fault(self, fault: Error) -> Step<Y, R, Self>;
//!     fn cancel(self);
//! }
//! ```
//!
//! Every method consumes the coroutine, and only a produced value hands it
//! back. A coroutine that has returned can't be resumed again, and a
//! coroutine that hasn't started can't be sent anything: both are type errors.
//!
//! `Step<Y, R, N>` is a `Result` around the [`Suspend`] enum:
//!
//! ```rust
//! pub enum Suspend<Y, R, N> {
//!     Yield(Y, N),
//!     Return(R),
//! }
//! ```
//!
//! The `Yield` and `Return` variants are imported into the crate's root
//! namespace, so they can be used without the `Suspend::` prefix.
//!
//! # Combinators
//!
//! All combinators wrap a coroutine before it starts, so none of its produced
//! values can slip past them:
//!
//!   * [`map_yield`](Start::map_yield) transforms each produced value,
//!   * [`map_send`](Start::map_send) transforms each value sent in,
//!   * [`map_return`](Start::map_return) transforms the terminal result,
//!   * [`relay`](Start::relay) routes every produced/accepted exchange through
//!     a fresh coroutine, which can validate, retry or rewrite it.
//!
//! Underneath, each combinator forwards to the coroutine it wraps through a
//! [`Delegate`], so faults and cancellation reach the innermost coroutine the
//! same way everywhere.
//!
//! The [`reusable!`] macro turns a function that builds a coroutine into a
//! value type that remembers its arguments, compares by them, and spawns a
//! fresh coroutine on demand.
//!
//! # Examples
//!
//! ## Validating every answer
//!
//! Here's a coroutine that keeps the largest number it has been sent, and a
//! relay that rejects odd numbers before they ever reach it:
//!
//! ```rust
//! use core::ops::ControlFlow::{Break, Continue};
//!
//! use corelay::{CoroAssertions, Start, StartAssertions, from_fn, sendreturn};
//!
//! let mut max = 4;
//! let mymax = from_fn(move |sent: Option<i32>| {
//!     max = max.max(sent.unwrap_or(max));
//!     if max < 100 { Continue(max) } else { Break(max * 3) }
//! });
//!
//! let even = |prompt: i32| {
//!     from_fn(move |sent: Option<i32>| match sent {
//!         None => Continue(prompt.to_string()),
//!         Some(n) if n % 2 != 0 => Continue("NOT EVEN".to_string()),
//!         Some(n) => Break(n),
//!     })
//! };
//!
//! let coro = mymax
//!     .relay(even)
//!     .assert_advances("4".to_string())
//!     .assert_yields(8, "8".to_string())
//!     .assert_yields(9, "NOT EVEN".to_string())
//!     .assert_yields(2, "8".to_string());
//! assert_eq!(sendreturn(coro, 102).unwrap(), 306);
//! ```
//!
//! ## Asking exactly once
//!
//! [`oneyield`] adapts a plain function into a coroutine that produces its
//! result once and returns whatever it is sent back:
//!
//! ```rust
//! use corelay::{Start, StartAssertions, oneyield, sendreturn};
//!
//! let add = oneyield(|(a, b, c): (i32, i32, i32)| a + b + c);
//! let coro = add((1, 2, 3)).accepts::<&str>().assert_advances(6);
//! assert_eq!(sendreturn(coro, "ok").unwrap(), "ok");
//! ```
//!
//! # FAQ
//!
//! ## Why are there two traits?
//!
//! A coroutine that has not started is in a different state from one that is
//! waiting for a reply, and the operations that make sense differ: only the
//! former can be wrapped by a combinator, and only the latter can be sent a
//! value. Giving each state its own trait turns both rules into type errors
//! instead of run-time checks.
//!
//! ## Why does `resume()` return `Self`?
//!
//! Relays run an unbounded number of relay coroutines, one after another, and
//! each must be stored somewhere between calls. With a fixed point the
//! combinator's suspended state is one concrete type no matter how many
//! exchanges have happened.
//!
//! ## What happens to a fault that a coroutine can't handle?
//!
//! It propagates to the caller unchanged. Combinators never swallow errors:
//! an error raised by a mapping function or a relay coroutine reaches the
//! driver as the same `Error` value, after the coroutines still suspended
//! underneath have been cancelled.

#[cfg(test)]
mod test;

mod coro;
mod coro_assertions;
mod delegate;
mod either;
mod error;
mod from_fn;
mod into_coro;
mod just_return;
mod map_return;
mod map_send;
mod map_yield;
mod metaprogramming;
mod oneyield;
mod relay;
mod reusable;
mod sendreturn;
mod start;
mod suspend;
mod void;

pub use coro::Coro;
pub use coro_assertions::CoroAssertions;
pub use coro_assertions::StartAssertions;
pub use delegate::Delegate;
pub use delegate::delegate;
pub use error::BoxError;
pub use error::Error;
pub use from_fn::FromFn;
pub use from_fn::from_fn;
pub use into_coro::IntoCoro;
pub use into_coro::IteratorCoro;
pub use just_return::JustReturn;
pub use just_return::just_return;
pub use map_return::MapReturn;
pub use map_send::MapSend;
pub use map_yield::MapYield;
pub use metaprogramming::Is;
pub use oneyield::OneYield;
pub use oneyield::Sent;
pub use oneyield::oneyield;
pub use relay::Relay;
pub use relay::Relaying;
pub use reusable::Parameter;
pub use reusable::Reusable;
pub use reusable::Signature;
pub use sendreturn::sendreturn;
pub use start::Start;
pub use suspend::Step;
pub use suspend::Suspend;
pub use suspend::Suspend::Return;
pub use suspend::Suspend::Yield;
pub use void::Void;
