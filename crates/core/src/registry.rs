// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry construction: resolve a config into the canonical event dictionary

use crate::binder::{resolve, EventEntry, Overrides};
use crate::config::{LoggerSpec, StarlogConfig};
use crate::error::StarlogError;
use crate::matcher::{scan, CodeMatcher};
use crate::sink::LogContext;
use std::collections::{HashMap, HashSet};

/// Which part of the config supplied the event names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Loggers,
    Events,
    Pattern,
}

/// Ordered mapping from event name to entry, read-only once built
#[derive(Clone, Debug, Default)]
pub struct EventRegistry {
    entries: Vec<(String, EventEntry)>,
    index: HashMap<String, usize>,
}

impl EventRegistry {
    fn new(entries: Vec<(String, EventEntry)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(at, (name, _))| (name.clone(), at))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, event: &str) -> Option<&EventEntry> {
        self.index
            .get(event)
            .and_then(|&at| self.entries.get(at))
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.get(event).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

fn dedupe(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Pick the event names from the first configured source
fn event_names(config: &StarlogConfig) -> Result<(EventSource, Vec<String>), StarlogError> {
    if let Some(loggers) = &config.loggers {
        let names = loggers.iter().map(|(name, _)| name.clone());
        return Ok((EventSource::Loggers, dedupe(names)));
    }

    if let Some(events) = &config.events {
        return Ok((EventSource::Events, dedupe(events.iter().cloned())));
    }

    if let (Some(pattern), Some(select)) = (&config.pattern, &config.select) {
        let names = match &config.matcher {
            Some(matcher) => scan(matcher.as_ref(), select, pattern, &config.match_options)?,
            None => scan(&CodeMatcher, select, pattern, &config.match_options)?,
        };
        return Ok((EventSource::Pattern, names));
    }

    Err(StarlogError::Configuration)
}

/// Build the registry for a config, binding every handler to `context`
pub fn build_registry(
    config: &StarlogConfig,
    context: &LogContext,
) -> Result<EventRegistry, StarlogError> {
    let (source, names) = event_names(config)?;
    let defaults = config.resolved_defaults();
    let overrides = Overrides {
        listener_dictionary: &config.listener_dictionary,
        targets_dictionary: &config.targets_dictionary,
        default_listener: &defaults.listener,
        default_targets: &defaults.targets,
    };

    // Explicit specs by event name; the first spec for a name wins
    let mut explicit: HashMap<&str, &LoggerSpec> = HashMap::new();
    for (event, spec) in config.loggers.iter().flatten() {
        explicit.entry(event.as_str()).or_insert(spec);
    }

    let entries: Vec<(String, EventEntry)> = names
        .into_iter()
        .map(|name| {
            let entry = resolve(&name, explicit.get(name.as_str()).copied(), &overrides, context);
            (name, entry)
        })
        .collect();

    tracing::debug!(?source, events = entries.len(), "built event registry");
    Ok(EventRegistry::new(entries))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
