// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event targets: objects listeners are attached to and detached from

use crate::error::TargetError;
use crate::event::Event;
use crate::handler::Listener;
use std::sync::{Arc, RwLock};

/// Anything that can register and unregister listeners by event type
///
/// Implementations must treat removal of a listener that is not registered
/// as a no-op, and adding a listener already registered for that type as a
/// no-op. The lifecycle relies on both to stay idempotent.
pub trait EventTarget: Send + Sync {
    fn add_event_listener(&self, event_type: &str, listener: &Listener) -> Result<(), TargetError>;

    fn remove_event_listener(
        &self,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), TargetError>;

    /// Human-readable name used in logs and errors
    fn label(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Shared handle to a target; the registry never owns the target itself
pub type TargetRef = Arc<dyn EventTarget>;

/// Targets for one event, always a list
///
/// A single target converts into a one-element list.
#[derive(Clone, Default)]
pub struct TargetList(Vec<TargetRef>);

impl TargetList {
    pub fn new(targets: Vec<TargetRef>) -> Self {
        Self(targets)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn single(target: TargetRef) -> Self {
        Self(vec![target])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetRef> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TargetRef] {
        &self.0
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|t| t.label()).collect()
    }
}

impl From<TargetRef> for TargetList {
    fn from(target: TargetRef) -> Self {
        Self::single(target)
    }
}

impl From<Vec<TargetRef>> for TargetList {
    fn from(targets: Vec<TargetRef>) -> Self {
        Self(targets)
    }
}

impl FromIterator<TargetRef> for TargetList {
    fn from_iter<I: IntoIterator<Item = TargetRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a TargetRef;
    type IntoIter = std::slice::Iter<'a, TargetRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lists are equal when they hold the same targets, by identity, in order
impl PartialEq for TargetList {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl std::fmt::Debug for TargetList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}

/// In-process event target with DOM-style registration semantics
pub struct EventEmitter {
    label: String,
    listeners: RwLock<Vec<(String, Listener)>>,
}

impl EventEmitter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Deliver an event to every listener registered for its type
    ///
    /// Returns how many listeners were invoked. Listeners run in
    /// registration order, outside the registration lock.
    pub fn dispatch(&self, event: &Event) -> usize {
        let matching: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(event_type, _)| *event_type == event.event_type)
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &matching {
            listener.handle(event);
        }
        matching.len()
    }

    /// Listeners currently registered for an event type
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(registered, _)| registered == event_type)
            .count()
    }

    /// Listeners currently registered across all event types
    pub fn total_listeners(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl EventTarget for EventEmitter {
    fn add_event_listener(&self, event_type: &str, listener: &Listener) -> Result<(), TargetError> {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let present = listeners
            .iter()
            .any(|(registered, l)| registered == event_type && l.same_as(listener));
        if !present {
            listeners.push((event_type.to_string(), listener.clone()));
        }
        Ok(())
    }

    fn remove_event_listener(
        &self,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), TargetError> {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.retain(|(registered, l)| !(registered == event_type && l.same_as(listener)));
        Ok(())
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("label", &self.label)
            .field("listeners", &self.total_listeners())
            .finish()
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
