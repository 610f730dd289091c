// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message sinks for [`Logged`](super::Logged).

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Destination for log lines written by the `logged` combinator.
///
/// Must be callable from concurrent branches of a parallel fan-out, and
/// must not suspend.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Writes each message as one line on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", message);
    }
}

/// Forwards each message to `tracing` at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "syncopate::logged", "{}", message);
    }
}

/// Keeps every message in memory; clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn log(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
