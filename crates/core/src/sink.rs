// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log sinks and the shared, late-bound log context
//!
//! Handlers never capture a sink directly. They receive a [`LogContext`]
//! that reads the owning logger's current sink on every call, so swapping
//! the sink after construction redirects every bound handler.

use std::io::Write;
use std::sync::{Arc, RwLock};

type WriteFn = dyn Fn(&str) + Send + Sync;

/// Output function for log messages
#[derive(Clone)]
pub struct LogSink {
    kind: &'static str,
    write: Arc<WriteFn>,
}

impl LogSink {
    /// Wrap an arbitrary output function
    pub fn new<F>(write: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self::named("custom", write)
    }

    fn named<F>(kind: &'static str, write: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            kind,
            write: Arc::new(write),
        }
    }

    /// One line per message on standard error (the default sink)
    pub fn stderr() -> Self {
        Self::named("stderr", |message| {
            let _ = writeln!(std::io::stderr().lock(), "{}", message);
        })
    }

    /// One line per message on standard output
    pub fn stdout() -> Self {
        Self::named("stdout", |message| {
            let _ = writeln!(std::io::stdout().lock(), "{}", message);
        })
    }

    /// Emit each message as a `tracing` event under `starlog::events`
    pub fn tracing(level: tracing::Level) -> Self {
        Self::named("tracing", move |message| match level {
            tracing::Level::ERROR => tracing::error!(target: "starlog::events", "{}", message),
            tracing::Level::WARN => tracing::warn!(target: "starlog::events", "{}", message),
            tracing::Level::INFO => tracing::info!(target: "starlog::events", "{}", message),
            tracing::Level::DEBUG => tracing::debug!(target: "starlog::events", "{}", message),
            tracing::Level::TRACE => tracing::trace!(target: "starlog::events", "{}", message),
        })
    }

    pub fn write(&self, message: &str) {
        (self.write)(message)
    }

    /// Short name of the sink ("stderr", "stdout", "tracing", "custom")
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LogSink").field(&self.kind).finish()
    }
}

/// Shared slot holding a logger's current sink
///
/// Clones share the slot.
#[derive(Clone, Debug)]
pub struct LogContext {
    sink: Arc<RwLock<LogSink>>,
}

impl LogContext {
    pub fn new(sink: LogSink) -> Self {
        Self {
            sink: Arc::new(RwLock::new(sink)),
        }
    }

    /// Write a message through whatever sink is installed right now
    pub fn log(&self, message: &str) {
        // Release the lock before writing so a sink may swap itself out.
        let sink = self.sink();
        sink.write(message);
    }

    /// Current sink
    pub fn sink(&self) -> LogSink {
        self.sink.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replace the sink for every holder of this context
    pub fn set_sink(&self, sink: LogSink) {
        let mut slot = self.sink.write().unwrap_or_else(|e| e.into_inner());
        *slot = sink;
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(LogSink::default())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
