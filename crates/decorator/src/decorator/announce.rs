//! The smallest useful decorator: one line before the call, one line after.

use crate::callable::{Callable, Metadata};
use crate::decorator::Decorator;
use crate::sink::{Sink, Stdout};
use std::borrow::Cow;

pub const BEFORE_MESSAGE: &str = "Something is happening before the function is called.";
pub const AFTER_MESSAGE: &str = "Something is happening after the function is called.";

#[derive(Clone, Debug)]
pub struct AnnounceDecorator<S = Stdout> {
    sink: S,
    before: Cow<'static, str>,
    after: Cow<'static, str>,
}

impl AnnounceDecorator {
    pub fn new() -> Self {
        Self { sink: Stdout, before: Cow::Borrowed(BEFORE_MESSAGE), after: Cow::Borrowed(AFTER_MESSAGE) }
    }
}

impl Default for AnnounceDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> AnnounceDecorator<S> {
    pub fn with_sink<S2: Sink>(self, sink: S2) -> AnnounceDecorator<S2> {
        AnnounceDecorator { sink, before: self.before, after: self.after }
    }

    #[must_use]
    pub fn with_messages(mut self, before: impl Into<Cow<'static, str>>, after: impl Into<Cow<'static, str>>) -> Self {
        self.before = before.into();
        self.after = after.into();
        self
    }
}

impl<C, S: Sink + Clone> Decorator<C> for AnnounceDecorator<S> {
    type Out = AnnouncedCallable<C, S>;

    fn decorate(&self, raw: C) -> Self::Out {
        AnnouncedCallable {
            callable: raw,
            sink: self.sink.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

/// Announces each call; targets conventionally take no arguments.
#[derive(Clone, Debug)]
pub struct AnnouncedCallable<C, S = Stdout> {
    callable: C,
    sink: S,
    before: Cow<'static, str>,
    after: Cow<'static, str>,
}

impl<C> AnnouncedCallable<C> {
    pub fn new(callable: C) -> Self {
        AnnounceDecorator::new().decorate(callable)
    }
}

impl<C, S> AnnouncedCallable<C, S> {
    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C, S, Args> Callable<Args> for AnnouncedCallable<C, S>
where
    C: Callable<Args>,
    S: Sink,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        self.sink.emit(&self.before);
        let value = self.callable.call(args)?;
        self.sink.emit(&self.after);
        Ok(value)
    }

    fn metadata(&self) -> &Metadata {
        self.callable.metadata()
    }
}

#[cfg(test)]
mod tests {
    use crate::callable::{Callable, callable, try_callable};
    use crate::decorator::{AFTER_MESSAGE, AnnounceDecorator, AnnouncedCallable, BEFORE_MESSAGE, Decorator};
    use crate::sink::{MemorySink, Sink};

    #[test]
    fn test_announces_around_the_call() {
        let sink = MemorySink::new();
        let say_whee = {
            let sink = sink.clone();
            callable(move || sink.emit("Whee!")).with_name("say_whee")
        };
        let say_whee = AnnounceDecorator::new().with_sink(sink.clone()).decorate(say_whee);

        say_whee.call(()).unwrap();

        assert_eq!(sink.lines(), vec![BEFORE_MESSAGE, "Whee!", AFTER_MESSAGE]);
    }

    #[test]
    fn test_ignores_return_value() {
        let sink = MemorySink::new();
        let answer = AnnounceDecorator::new().with_sink(sink.clone()).decorate(callable(|| 42));

        assert_eq!(answer.call(()), Ok(42));
        assert_eq!(sink.lines(), vec![BEFORE_MESSAGE, AFTER_MESSAGE]);
    }

    #[test]
    fn test_custom_messages() {
        let sink = MemorySink::new();
        let noop = AnnounceDecorator::new()
            .with_messages("before", "after")
            .with_sink(sink.clone())
            .decorate(callable(|| ()));

        noop.call(()).unwrap();

        assert_eq!(sink.lines(), vec!["before", "after"]);
    }

    #[test]
    fn test_failure_skips_after_line() {
        let sink = MemorySink::new();
        let failing = AnnounceDecorator::new().with_sink(sink.clone()).decorate(try_callable(|| Err::<(), _>("boom")));

        assert_eq!(failing.call(()), Err("boom"));
        assert_eq!(sink.lines(), vec![BEFORE_MESSAGE]);
    }

    #[test]
    fn test_keeps_name() {
        fn say_whee() {}

        assert_eq!(AnnouncedCallable::new(callable(say_whee)).name(), "say_whee");
    }
}
