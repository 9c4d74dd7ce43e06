//! Function decorators for Rust
//!
//! This crate wraps a callable in another callable that keeps its calling
//! convention and its identity while adding behavior around each call:
//!
//! - [`DoTwiceDecorator`](decorator::DoTwiceDecorator) calls the target twice and returns the second result
//! - [`TimerDecorator`](decorator::TimerDecorator) prints `Finished <name>() in <secs> secs`
//! - [`DebugDecorator`](decorator::DebugDecorator) prints the call signature and the returned value
//! - [`AnnounceDecorator`](decorator::AnnounceDecorator) prints a line before and after the call
//!
//! Failures of the target are returned unchanged, and every wrapper reports the
//! target's [`Metadata`].
//!
//! # Example
//!
//! ```
//! use micro_decorator::{Callable, Traced, callable, wrap};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let add = wrap(callable(add), Traced);
//! // prints:
//! // Calling add(2, 3)
//! // add() returned 5
//! assert_eq!(add.call((2, 3)), Ok(5));
//! assert_eq!(add.name(), "add");
//! ```
//!
//! When the behavior is only known at runtime, parse a [`Behavior`] and use
//! [`Behavior::wrap`], which returns one [`Wrapped`] type for all four.

mod behavior;
mod callable;
mod fn_trait;

pub mod args;
pub mod decorator;
pub mod sink;

pub use args::ArgumentError;
pub use args::Arguments;
pub use args::Named;
pub use behavior::{
    Announce, Behavior, BehaviorKind, RepeatTwice, Timed, Traced, UnknownBehavior, Wrapped, wrap, wrap_with,
};
pub use callable::{Callable, FnCallable, Metadata, TryFnCallable, callable, try_callable};
pub use fn_trait::FnTrait;
