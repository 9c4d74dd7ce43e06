//! Calls the wrapped callable twice and keeps the second result.
//!
//! The first result is dropped, but the first call still happens, so side
//! effects are observed twice. A failing first call ends the invocation.

use crate::callable::{Callable, Metadata};
use crate::decorator::Decorator;
use tracing::trace;

#[derive(Default, Clone, Copy, Debug)]
pub struct DoTwiceDecorator;

#[derive(Clone, Debug)]
pub struct DoTwiceCallable<C> {
    callable: C,
}

impl<C> DoTwiceCallable<C> {
    pub fn new(callable: C) -> Self {
        Self { callable }
    }

    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C> Decorator<C> for DoTwiceDecorator {
    type Out = DoTwiceCallable<C>;

    fn decorate(&self, raw: C) -> Self::Out {
        DoTwiceCallable::new(raw)
    }
}

impl<C, Args> Callable<Args> for DoTwiceCallable<C>
where
    C: Callable<Args>,
    Args: Clone,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        if let Err(e) = self.callable.call(args.clone()) {
            trace!(callable = self.callable.name(), "first call failed, skipping the second");
            return Err(e);
        }
        self.callable.call(args)
    }

    fn metadata(&self) -> &Metadata {
        self.callable.metadata()
    }
}
