// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event target with call recording for testing

use crate::error::{RegistrationOp, TargetError};
use crate::event::Event;
use crate::handler::Listener;
use crate::target::{EventEmitter, EventTarget};
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded call to a target registration method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetCall {
    Add { event: String },
    Remove { event: String },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<TargetCall>,
    // Configurable failure modes
    failures: Vec<(RegistrationOp, String)>,
}

/// Event target that records every add/remove and can be told to fail
///
/// Registration semantics match [`EventEmitter`], which it wraps.
#[derive(Clone)]
pub struct FakeTarget {
    emitter: Arc<EventEmitter>,
    state: Arc<Mutex<FakeState>>,
}

impl FakeTarget {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            emitter: Arc::new(EventEmitter::new(label)),
            state: Arc::new(Mutex::new(FakeState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TargetCall> {
        self.state().calls.clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn add_calls(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c, TargetCall::Add { .. }))
            .count()
    }

    pub fn remove_calls(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c, TargetCall::Remove { .. }))
            .count()
    }

    /// Make `add_event_listener` fail for an event type
    pub fn fail_add(&self, event: &str) {
        self.state()
            .failures
            .push((RegistrationOp::Add, event.to_string()));
    }

    /// Make `remove_event_listener` fail for an event type
    pub fn fail_remove(&self, event: &str) {
        self.state()
            .failures
            .push((RegistrationOp::Remove, event.to_string()));
    }

    pub fn dispatch(&self, event: &Event) -> usize {
        self.emitter.dispatch(event)
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.emitter.listener_count(event_type)
    }

    pub fn total_listeners(&self) -> usize {
        self.emitter.total_listeners()
    }

    fn record(&self, op: RegistrationOp, event_type: &str) -> Result<(), TargetError> {
        let mut state = self.state();
        state.calls.push(match op {
            RegistrationOp::Add => TargetCall::Add {
                event: event_type.to_string(),
            },
            RegistrationOp::Remove => TargetCall::Remove {
                event: event_type.to_string(),
            },
        });

        if state
            .failures
            .iter()
            .any(|(failing, event)| *failing == op && event == event_type)
        {
            return Err(TargetError::new(format!(
                "injected {} failure for '{}'",
                op, event_type
            )));
        }
        Ok(())
    }
}

impl EventTarget for FakeTarget {
    fn add_event_listener(&self, event_type: &str, listener: &Listener) -> Result<(), TargetError> {
        self.record(RegistrationOp::Add, event_type)?;
        self.emitter.add_event_listener(event_type, listener)
    }

    fn remove_event_listener(
        &self,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), TargetError> {
        self.record(RegistrationOp::Remove, event_type)?;
        self.emitter.remove_event_listener(event_type, listener)
    }

    fn label(&self) -> String {
        self.emitter.label()
    }
}
