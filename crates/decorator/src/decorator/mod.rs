//! Decorators turn one callable into another that does a little more.
//!
//! A [`Decorator`] consumes a callable and returns its wrapped counterpart. The
//! wrapped value is itself a [`Callable`](crate::Callable) with the same
//! arguments, output, error and metadata as the target, so decorators nest:
//!
//! ```
//! use micro_decorator::decorator::{DebugDecorator, DecoratorExt, DoTwiceDecorator, Decorator};
//! use micro_decorator::{callable, Callable};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! // debug output is printed once per outer call, `add` itself runs twice
//! let add = DoTwiceDecorator.and_then(DebugDecorator::new()).decorate(callable(add));
//! assert_eq!(add.call((2, 3)), Ok(5));
//! assert_eq!(add.name(), "add");
//! ```

mod announce;
mod combinator;
mod debug;
mod do_twice;
mod timer;

pub use announce::{AFTER_MESSAGE, AnnounceDecorator, AnnouncedCallable, BEFORE_MESSAGE};
pub use combinator::{DecoratorComposer, DecoratorFn, IdentityDecorator, decorator_fn};
pub use debug::{DebugCallable, DebugDecorator};
pub use do_twice::{DoTwiceCallable, DoTwiceDecorator};
pub use timer::{DEFAULT_PRECISION, TimedCallable, TimerDecorator};

/// Turns a value of type `In` into a decorated `Out`.
///
/// Implementations here take a callable and hand back a wrapper that forwards
/// to it, so `Out` is usually a [`Callable`](crate::Callable) with the same
/// calling convention as `In`. The decorator is borrowed, so one configured
/// value can decorate any number of targets.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// Chaining for decorators.
///
/// Implemented for every type; the [`Decorator`] bounds are checked once the
/// chain is applied to a target, which is what lets `In` be inferred there.
pub trait DecoratorExt: Sized {
    /// Chains `decorator` after `self`: `self` wraps the target first and
    /// `decorator` wraps the result, ending up outermost.
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    /// Chains `decorator` before `self`: `decorator` wraps the target first and
    /// `self` ends up outermost.
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<T> DecoratorExt for T {}

/// Applies a decorator from the target's side: `target.decorate_with(decorator)`.
pub trait DecorateExt: Sized {
    fn decorate_with<D>(self, decorator: D) -> D::Out
    where
        D: Decorator<Self>,
    {
        decorator.decorate(self)
    }
}

impl<T> DecorateExt for T {}
