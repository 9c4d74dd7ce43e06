//! Prints the call signature and the returned value.
//!
//! ```text
//! Calling make_greeting("Ana", age=12)
//! make_greeting() returned "Whoa Ana! 12 already, you're growing up!"
//! ```

use crate::args::Signature;
use crate::callable::{Callable, Metadata};
use crate::decorator::Decorator;
use crate::sink::{Sink, Stdout};
use std::fmt;
use tracing::trace;

#[derive(Default, Clone, Copy, Debug)]
pub struct DebugDecorator<S = Stdout> {
    sink: S,
}

impl DebugDecorator {
    pub fn new() -> Self {
        Self { sink: Stdout }
    }
}

impl<S> DebugDecorator<S> {
    pub fn with_sink<S2: Sink>(self, sink: S2) -> DebugDecorator<S2> {
        DebugDecorator { sink }
    }
}

impl<C, S: Sink + Clone> Decorator<C> for DebugDecorator<S> {
    type Out = DebugCallable<C, S>;

    fn decorate(&self, raw: C) -> Self::Out {
        DebugCallable { callable: raw, sink: self.sink.clone() }
    }
}

#[derive(Clone, Debug)]
pub struct DebugCallable<C, S = Stdout> {
    callable: C,
    sink: S,
}

impl<C> DebugCallable<C> {
    pub fn new(callable: C) -> Self {
        Self { callable, sink: Stdout }
    }
}

impl<C, S> DebugCallable<C, S> {
    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C, S, Args> Callable<Args> for DebugCallable<C, S>
where
    C: Callable<Args>,
    C::Output: fmt::Debug,
    S: Sink,
    Args: Signature,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        let name = self.callable.name();
        let signature = args.signature();
        self.sink.emit(&format!("Calling {name}({signature})"));

        let value = self.callable.call(args).inspect_err(|_| trace!(callable = name, "call failed"))?;

        self.sink.emit(&format!("{name}() returned {value:?}"));
        Ok(value)
    }

    fn metadata(&self) -> &Metadata {
        self.callable.metadata()
    }
}
