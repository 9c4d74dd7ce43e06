//! Picking a decorator by behavior.
//!
//! [`wrap`] takes a target and a [`BehaviorKind`] such as [`RepeatTwice`] and
//! returns that behavior's wrapper. [`Behavior::wrap`] does the same for a
//! behavior known only at runtime (parsed from a name, say) and returns a
//! [`Wrapped`] callable.

use crate::args::Signature;
use crate::callable::{Callable, Metadata};
use crate::decorator::{
    AnnounceDecorator, AnnouncedCallable, DebugCallable, DebugDecorator, Decorator, DoTwiceCallable, DoTwiceDecorator,
    TimedCallable, TimerDecorator,
};
use crate::sink::{Sink, Stdout};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The cross-cutting behavior spliced around a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// call the target twice, return the second result
    RepeatTwice,
    /// print the elapsed time of each call
    Timed,
    /// print the call signature and the returned value
    Traced,
    /// print a line before and after each call
    Announce,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [Behavior::RepeatTwice, Behavior::Timed, Behavior::Traced, Behavior::Announce];

    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::RepeatTwice => "repeat-twice",
            Behavior::Timed => "timed",
            Behavior::Traced => "traced",
            Behavior::Announce => "announce",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown behavior `{0}`, expected one of: repeat-twice, timed, traced, announce")]
pub struct UnknownBehavior(String);

impl FromStr for Behavior {
    type Err = UnknownBehavior;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|behavior| behavior.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownBehavior(s.to_owned()))
    }
}

/// A target wrapped with one of the [`Behavior`]s picked at runtime.
///
/// Calling it requires what all four wrappers require together; use [`wrap`]
/// with a [`BehaviorKind`] when the behavior is known up front.
#[derive(Clone, Debug)]
pub enum Wrapped<C, S = Stdout> {
    RepeatTwice(DoTwiceCallable<C>),
    Timed(TimedCallable<C, S>),
    Traced(DebugCallable<C, S>),
    Announce(AnnouncedCallable<C, S>),
}

impl<C, S> Wrapped<C, S> {
    pub fn behavior(&self) -> Behavior {
        match self {
            Wrapped::RepeatTwice(_) => Behavior::RepeatTwice,
            Wrapped::Timed(_) => Behavior::Timed,
            Wrapped::Traced(_) => Behavior::Traced,
            Wrapped::Announce(_) => Behavior::Announce,
        }
    }

    /// Gives the target back.
    pub fn into_inner(self) -> C {
        match self {
            Wrapped::RepeatTwice(callable) => callable.into_inner(),
            Wrapped::Timed(callable) => callable.into_inner(),
            Wrapped::Traced(callable) => callable.into_inner(),
            Wrapped::Announce(callable) => callable.into_inner(),
        }
    }
}

/// A behavior chosen at compile time.
///
/// Each kind only asks of the target what its own wrapper needs: [`Traced`]
/// wants `Debug` arguments and output, [`RepeatTwice`] wants `Clone` arguments,
/// [`Timed`] and [`Announce`] want nothing.
pub trait BehaviorKind {
    const BEHAVIOR: Behavior;

    type Out<C, S>;

    fn wrap_with<C, S: Sink + Clone>(target: C, sink: S) -> Self::Out<C, S>;
}

/// Calls the target twice, see [`DoTwiceCallable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct RepeatTwice;

/// Reports elapsed time, see [`TimedCallable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct Timed;

/// Reports signature and result, see [`DebugCallable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct Traced;

/// Announces before and after, see [`AnnouncedCallable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct Announce;

impl BehaviorKind for RepeatTwice {
    const BEHAVIOR: Behavior = Behavior::RepeatTwice;

    type Out<C, S> = DoTwiceCallable<C>;

    fn wrap_with<C, S: Sink + Clone>(target: C, _sink: S) -> Self::Out<C, S> {
        DoTwiceDecorator.decorate(target)
    }
}

impl BehaviorKind for Timed {
    const BEHAVIOR: Behavior = Behavior::Timed;

    type Out<C, S> = TimedCallable<C, S>;

    fn wrap_with<C, S: Sink + Clone>(target: C, sink: S) -> Self::Out<C, S> {
        TimerDecorator::new().with_sink(sink).decorate(target)
    }
}

impl BehaviorKind for Traced {
    const BEHAVIOR: Behavior = Behavior::Traced;

    type Out<C, S> = DebugCallable<C, S>;

    fn wrap_with<C, S: Sink + Clone>(target: C, sink: S) -> Self::Out<C, S> {
        DebugDecorator::new().with_sink(sink).decorate(target)
    }
}

impl BehaviorKind for Announce {
    const BEHAVIOR: Behavior = Behavior::Announce;

    type Out<C, S> = AnnouncedCallable<C, S>;

    fn wrap_with<C, S: Sink + Clone>(target: C, sink: S) -> Self::Out<C, S> {
        AnnounceDecorator::new().with_sink(sink).decorate(target)
    }
}

/// Wraps `target` with `behavior`, printing to standard output.
pub fn wrap<C, B: BehaviorKind>(target: C, behavior: B) -> B::Out<C, Stdout> {
    wrap_with(target, behavior, Stdout)
}

/// Wraps `target` with `behavior`, sending printed lines to `sink`.
pub fn wrap_with<C, B, S>(target: C, _behavior: B, sink: S) -> B::Out<C, S>
where
    B: BehaviorKind,
    S: Sink + Clone,
{
    B::wrap_with(target, sink)
}

impl Behavior {
    /// Wraps `target` with the behavior picked at runtime, printing to standard output.
    pub fn wrap<C>(self, target: C) -> Wrapped<C> {
        self.wrap_with(target, Stdout)
    }

    /// Like [`Behavior::wrap`], sending printed lines to `sink`.
    pub fn wrap_with<C, S: Sink + Clone>(self, target: C, sink: S) -> Wrapped<C, S> {
        match self {
            Behavior::RepeatTwice => Wrapped::RepeatTwice(RepeatTwice::wrap_with(target, sink)),
            Behavior::Timed => Wrapped::Timed(Timed::wrap_with(target, sink)),
            Behavior::Traced => Wrapped::Traced(Traced::wrap_with(target, sink)),
            Behavior::Announce => Wrapped::Announce(Announce::wrap_with(target, sink)),
        }
    }
}

// the behavior is only known at runtime, so every wrapper's requirements apply
impl<C, S, Args> Callable<Args> for Wrapped<C, S>
where
    C: Callable<Args>,
    C::Output: fmt::Debug,
    S: Sink,
    Args: Clone + Signature,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        match self {
            Wrapped::RepeatTwice(callable) => callable.call(args),
            Wrapped::Timed(callable) => callable.call(args),
            Wrapped::Traced(callable) => callable.call(args),
            Wrapped::Announce(callable) => callable.call(args),
        }
    }

    fn metadata(&self) -> &Metadata {
        match self {
            Wrapped::RepeatTwice(callable) => Callable::<Args>::metadata(callable),
            Wrapped::Timed(callable) => Callable::<Args>::metadata(callable),
            Wrapped::Traced(callable) => Callable::<Args>::metadata(callable),
            Wrapped::Announce(callable) => Callable::<Args>::metadata(callable),
        }
    }
}
