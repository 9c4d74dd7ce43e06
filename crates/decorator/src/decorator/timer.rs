//! Measures how long the wrapped callable runs.
//!
//! After each successful call a line `Finished <name>() in <secs> secs` is
//! emitted, with the elapsed seconds rounded to [`DEFAULT_PRECISION`] decimals
//! unless configured otherwise.

use crate::callable::{Callable, Metadata};
use crate::decorator::Decorator;
use crate::sink::{Sink, Stdout};
use std::time::Instant;
use tracing::debug;

/// Decimals printed for the elapsed seconds.
pub const DEFAULT_PRECISION: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TimerDecorator<S = Stdout> {
    sink: S,
    precision: usize,
}

impl TimerDecorator {
    pub fn new() -> Self {
        Self { sink: Stdout, precision: DEFAULT_PRECISION }
    }
}

impl Default for TimerDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TimerDecorator<S> {
    pub fn with_sink<S2: Sink>(self, sink: S2) -> TimerDecorator<S2> {
        TimerDecorator { sink, precision: self.precision }
    }

    /// Decimals printed for the elapsed seconds, at least one: a precision of
    /// zero is raised to one so the line always carries a fraction.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }
}

impl<C, S: Sink + Clone> Decorator<C> for TimerDecorator<S> {
    type Out = TimedCallable<C, S>;

    fn decorate(&self, raw: C) -> Self::Out {
        TimedCallable { callable: raw, sink: self.sink.clone(), precision: self.precision }
    }
}

#[derive(Clone, Debug)]
pub struct TimedCallable<C, S = Stdout> {
    callable: C,
    sink: S,
    precision: usize,
}

impl<C> TimedCallable<C> {
    pub fn new(callable: C) -> Self {
        Self { callable, sink: Stdout, precision: DEFAULT_PRECISION }
    }
}

impl<C, S> TimedCallable<C, S> {
    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C, S, Args> Callable<Args> for TimedCallable<C, S>
where
    C: Callable<Args>,
    S: Sink,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, args: Args) -> Result<Self::Output, Self::Error> {
        let start_time = Instant::now();
        let value = self.callable.call(args)?;
        let run_time = start_time.elapsed();

        let name = self.callable.name();
        debug!(callable = name, elapsed_secs = run_time.as_secs_f64(), "timed call finished");
        self.sink.emit(&format!("Finished {name}() in {:.*} secs", self.precision, run_time.as_secs_f64()));
        Ok(value)
    }

    fn metadata(&self) -> &Metadata {
        self.callable.metadata()
    }
}
