// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The logger: owns the registry and attaches/detaches it in bulk

use crate::config::{Defaults, StarlogConfig};
use crate::error::{RegistrationOp, StarlogError};
use crate::handler::Handler;
use crate::registry::{build_registry, EventRegistry};
use crate::sink::{LogContext, LogSink};
use crate::target::TargetList;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the registry's listeners are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Stopped,
    Started,
}

/// Event logger built once from a [`StarlogConfig`]
///
/// `start` removes every listener and adds it back, so calling it again
/// never duplicates registrations; `stop` removes them. A target error
/// aborts the pass immediately and leaves the rest of the registry as it
/// was, with no rollback.
pub struct Starlog {
    events: EventRegistry,
    context: LogContext,
    listener: Handler,
    targets: TargetList,
    started: AtomicBool,
}

impl Starlog {
    /// Build the registry from `config`
    ///
    /// Fails with [`StarlogError::Configuration`] when no event source is
    /// configured, or [`StarlogError::Collaborator`] when scanning fails.
    pub fn new(config: StarlogConfig) -> Result<Self, StarlogError> {
        let defaults = config.resolved_defaults();
        let context = LogContext::new(defaults.log);
        let events = build_registry(&config, &context)?;

        Ok(Self {
            events,
            context,
            listener: defaults.listener,
            targets: defaults.targets,
            started: AtomicBool::new(false),
        })
    }

    /// The canonical registry
    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// Attach every listener to its targets, removing old registrations first
    pub fn start(&self) -> Result<(), StarlogError> {
        let span = tracing::info_span!("starlog.start", events = self.events.len());
        let _guard = span.enter();

        self.stop()?;
        self.register_all(RegistrationOp::Add)?;
        self.started.store(true, Ordering::SeqCst);

        tracing::debug!("listeners attached");
        Ok(())
    }

    /// Detach every listener from its targets
    pub fn stop(&self) -> Result<(), StarlogError> {
        let span = tracing::info_span!("starlog.stop", events = self.events.len());
        let _guard = span.enter();

        self.register_all(RegistrationOp::Remove)?;
        self.started.store(false, Ordering::SeqCst);

        tracing::debug!("listeners detached");
        Ok(())
    }

    fn register_all(&self, op: RegistrationOp) -> Result<(), StarlogError> {
        for (event, entry) in self.events.iter() {
            for target in entry.targets() {
                let result = match op {
                    RegistrationOp::Add => target.add_event_listener(event, entry.listener()),
                    RegistrationOp::Remove => target.remove_event_listener(event, entry.listener()),
                };

                if let Err(source) = result {
                    let label = target.label();
                    tracing::error!(%op, event, %label, error = %source, "registration failed");
                    return Err(StarlogError::Registration {
                        op,
                        event: event.to_string(),
                        target: label,
                        source,
                    });
                }
                tracing::trace!(%op, event, label = %target.label(), "registration");
            }
        }
        Ok(())
    }

    pub fn state(&self) -> LifecycleState {
        if self.started.load(Ordering::SeqCst) {
            LifecycleState::Started
        } else {
            LifecycleState::Stopped
        }
    }

    /// Write through the current sink
    pub fn log(&self, message: &str) {
        self.context.log(message)
    }

    /// Replace the sink; already-bound handlers pick it up on their next event
    pub fn set_log(&self, sink: LogSink) {
        self.context.set_sink(sink)
    }

    pub fn log_sink(&self) -> LogSink {
        self.context.sink()
    }

    /// Shared log context every bound handler writes through
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Default handler this instance resolved
    pub fn listener(&self) -> &Handler {
        &self.listener
    }

    /// Default targets this instance resolved
    pub fn targets(&self) -> &TargetList {
        &self.targets
    }

    /// Defaults to seed another config with; `log` is the current sink
    pub fn defaults(&self) -> Defaults {
        Defaults {
            log: self.context.sink(),
            listener: self.listener.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl std::fmt::Debug for Starlog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Starlog")
            .field("events", &self.events.names())
            .field("state", &self.state())
            .field("sink", &self.context.sink())
            .finish()
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
