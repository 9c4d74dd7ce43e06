//! Where the decorators' human-readable lines go.
//!
//! Lines are a side effect only: a sink cannot fail the call that produced them.

use std::io;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// A destination for one line of decorator output.
#[cfg_attr(test, mockall::automock)]
pub trait Sink {
    fn emit(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Default, Clone, Copy, Debug)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            warn!(cause = %e, "failed to write decorator output");
        }
    }
}

/// Drops every line.
#[derive(Default, Clone, Copy, Debug)]
pub struct Discard;

impl Sink for Discard {
    #[inline]
    fn emit(&self, _line: &str) {}
}

/// Keeps every line in memory, clones share the same buffer.
#[derive(Default, Clone, Debug)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Removes and returns the lines emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Sink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).push(line.to_owned());
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    #[inline]
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    #[inline]
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::{Discard, MemorySink, Sink};
    use std::sync::Arc;

    #[test]
    fn test_memory_sink_clones_share_lines() {
        let sink = MemorySink::new();
        let clone = sink.clone();

        sink.emit("first");
        clone.emit("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(clone.take(), vec!["first", "second"]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_forwarding_sinks() {
        let sink = MemorySink::new();
        (&sink).emit("by ref");
        Arc::new(sink.clone()).emit("by arc");
        Discard.emit("dropped");

        assert_eq!(sink.lines(), vec!["by ref", "by arc"]);
    }
}
