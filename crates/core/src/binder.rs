// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener binding: picks the effective handler and targets for one event

use crate::config::LoggerSpec;
use crate::handler::{Handler, Listener};
use crate::sink::LogContext;
use crate::target::{TargetList, TargetRef};
use std::collections::HashMap;

/// One registry entry: a bound listener and the targets it attaches to
#[derive(Clone, Debug)]
pub struct EventEntry {
    listener: Listener,
    targets: TargetList,
}

impl EventEntry {
    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    pub fn targets(&self) -> &[TargetRef] {
        self.targets.as_slice()
    }

    /// Targets as a list, for comparison against configured targets
    pub fn target_list(&self) -> &TargetList {
        &self.targets
    }
}

/// Per-event overrides and the instance defaults they fall back to
pub struct Overrides<'a> {
    pub listener_dictionary: &'a HashMap<String, Handler>,
    pub targets_dictionary: &'a HashMap<String, TargetList>,
    pub default_listener: &'a Handler,
    pub default_targets: &'a TargetList,
}

/// Resolve the entry for `event`
///
/// Handler: explicit entry, then `listener_dictionary`, then the default.
/// Targets: explicit entry, then `targets_dictionary`, then the default.
/// An explicit empty target list counts as set. The chosen handler is bound
/// to `context`, so it logs through whatever sink the context holds when
/// an event fires.
pub fn resolve(
    event: &str,
    explicit: Option<&LoggerSpec>,
    overrides: &Overrides<'_>,
    context: &LogContext,
) -> EventEntry {
    let handler = explicit
        .and_then(|spec| spec.listener.as_ref())
        .or_else(|| overrides.listener_dictionary.get(event))
        .unwrap_or(overrides.default_listener);

    let targets = explicit
        .and_then(|spec| spec.targets.as_ref())
        .or_else(|| overrides.targets_dictionary.get(event))
        .unwrap_or(overrides.default_targets);

    EventEntry {
        listener: handler.bind(context),
        targets: targets.clone(),
    }
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod tests;
