//! Decorators built out of other decorators.

use crate::decorator::Decorator;
use std::fmt;

/// Hands the target back untouched.
///
/// Useful as the starting point of a chain assembled at runtime, and as the
/// empty slot of a [`DecoratorComposer::default`]: decorating with it adds no
/// output and no wrapper type.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}

/// Two decorators applied in a row: `inner` wraps the target, `outer` wraps what `inner` produced.
///
/// On each call the outer wrapper's pre-call work runs first and its post-call
/// work runs last.
#[derive(Clone, Copy, Debug)]
pub struct DecoratorComposer<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> DecoratorComposer<Inner, Outer> {
    pub fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    pub fn outer(&self) -> &Outer {
        &self.outer
    }
}

impl Default for DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    fn default() -> Self {
        Self::new(IdentityDecorator, IdentityDecorator)
    }
}

impl<In, Inner, Outer> Decorator<In> for DecoratorComposer<Inner, Outer>
where
    Inner: Decorator<In>,
    Outer: Decorator<Inner::Out>,
{
    type Out = Outer::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        self.outer.decorate(self.inner.decorate(raw))
    }
}

/// Any `Fn(target) -> wrapped` used as a [`Decorator`].
#[derive(Copy, Clone)]
pub struct DecoratorFn<F> {
    f: F,
}

pub fn decorator_fn<In, Out, F>(f: F) -> DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    DecoratorFn { f }
}

impl<In, Out, F> Decorator<In> for DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    type Out = Out;

    fn decorate(&self, raw: In) -> Self::Out {
        (self.f)(raw)
    }
}

impl<F> fmt::Debug for DecoratorFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorFn").finish_non_exhaustive()
    }
}
