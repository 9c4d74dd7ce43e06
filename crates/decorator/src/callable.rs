//! Callables: anything that can be invoked with a bundle of arguments.
//!
//! A [`Callable`] takes its arguments as one value (usually a tuple), produces an
//! output or a failure, and carries [`Metadata`] describing what it is. Plain
//! functions and closures become callables through [`callable`] and
//! [`try_callable`].

use crate::fn_trait::FnTrait;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// A unit of behavior invoked with `Args`, returning an output or a failure.
///
/// Wrappers produced by decorators implement this trait too, forwarding to the
/// callable they own. They must report the target's [`Metadata`], not their own.
pub trait Callable<Args> {
    type Output;
    type Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error>;

    fn metadata(&self) -> &Metadata;

    /// Shortcut for `self.metadata().name()`.
    fn name(&self) -> &str {
        self.metadata().name()
    }
}

impl<C, Args> Callable<Args> for &C
where
    C: Callable<Args> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        (**self).call(args)
    }

    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

impl<C, Args> Callable<Args> for Box<C>
where
    C: Callable<Args> + ?Sized,
{
    type Output = C::Output;
    type Error = C::Error;

    #[inline]
    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        (**self).call(args)
    }

    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

/// Descriptive identity of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
}

impl Metadata {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), doc: None }
    }

    /// Builds metadata from a type's path, e.g. `my_crate::greet::make_greeting` becomes `make_greeting`.
    pub fn of<F: ?Sized>() -> Self {
        Self::new(short_name(std::any::type_name::<F>()))
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn short_name(type_name: &str) -> &str {
    // generic parameters may contain paths themselves
    let path = type_name.split('<').next().unwrap_or(type_name);
    path.rsplit("::").next().unwrap_or(path)
}

/// a `FnTrait` holder whose every call succeeds
pub struct FnCallable<F, Args> {
    f: F,
    metadata: Metadata,
    _phantom: PhantomData<fn(Args)>,
}

impl<F, Args> FnCallable<F, Args>
where
    F: FnTrait<Args>,
{
    fn new(f: F) -> Self {
        Self { f, metadata: Metadata::of::<F>(), _phantom: PhantomData }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.name = name.into();
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.doc = Some(doc.into());
        self
    }
}

/// Turns an infallible function into a [`Callable`] named after the function.
pub fn callable<F, Args>(f: F) -> FnCallable<F, Args>
where
    F: FnTrait<Args>,
{
    FnCallable::new(f)
}

impl<F, Args> Callable<Args> for FnCallable<F, Args>
where
    F: FnTrait<Args>,
{
    type Output = F::Output;
    type Error = Infallible;

    #[inline]
    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        Ok(self.f.call(args))
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl<F, Args> fmt::Debug for FnCallable<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCallable").field("metadata", &self.metadata).finish_non_exhaustive()
    }
}

/// a `FnTrait` holder for functions returning `Result`, whose `Err` is the callable's failure
pub struct TryFnCallable<F, Args> {
    f: F,
    metadata: Metadata,
    _phantom: PhantomData<fn(Args)>,
}

impl<F, Args> TryFnCallable<F, Args>
where
    F: FnTrait<Args>,
{
    fn new(f: F) -> Self {
        Self { f, metadata: Metadata::of::<F>(), _phantom: PhantomData }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.name = name.into();
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.metadata.doc = Some(doc.into());
        self
    }
}

/// Turns a function returning `Result<T, E>` into a [`Callable`] failing with `E`.
pub fn try_callable<F, Args, T, E>(f: F) -> TryFnCallable<F, Args>
where
    F: FnTrait<Args, Output = Result<T, E>>,
{
    TryFnCallable::new(f)
}

impl<F, Args, T, E> Callable<Args> for TryFnCallable<F, Args>
where
    F: FnTrait<Args, Output = Result<T, E>>,
{
    type Output = T;
    type Error = E;

    #[inline]
    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        self.f.call(args)
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl<F, Args> fmt::Debug for TryFnCallable<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFnCallable").field("metadata", &self.metadata).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Callable, Metadata, callable, short_name, try_callable};

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
        input.parse()
    }

    #[test]
    fn test_fn_callable_forwards_args() {
        let add = callable(add);
        assert_eq!(add.call((2, 3)), Ok(5));
    }

    #[test]
    fn test_fn_callable_is_named_after_function() {
        assert_eq!(callable(add).name(), "add");
        assert_eq!(try_callable(parse).name(), "parse");
    }

    #[test]
    fn test_with_name_and_doc() {
        let greet = callable(|name: &str| format!("Hello {name}"))
            .with_name("greet")
            .with_doc("Say hello");

        assert_eq!(greet.name(), "greet");
        assert_eq!(greet.metadata().doc(), Some("Say hello"));
        assert_eq!(greet.call(("Ana",)), Ok("Hello Ana".to_string()));
    }

    #[test]
    fn test_try_callable_propagates_err() {
        let parse = try_callable(parse);
        assert_eq!(parse.call(("42",)), Ok(42));
        parse.call(("forty-two",)).expect_err("not a number");
    }

    #[test]
    fn test_reference_is_callable() {
        let add = callable(add);
        let by_ref = &add;
        assert_eq!(by_ref.call((1, 1)), Ok(2));
        assert_eq!(by_ref.name(), "add");
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("my_crate::greet::make_greeting"), "make_greeting");
        assert_eq!(short_name("my_crate::identity<alloc::string::String>"), "identity");
        assert_eq!(short_name("say_whee"), "say_whee");
    }

    #[test]
    fn test_metadata_display() {
        let metadata = Metadata::new("say_whee").with_doc("Print whee");
        assert_eq!(metadata.to_string(), "say_whee");
        assert_eq!(metadata.doc(), Some("Print whee"));
    }
}
