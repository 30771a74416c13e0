// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration
//!
//! `StarlogConfig` is consumed by [`Starlog::new`](crate::Starlog::new) and
//! never retained. Exactly one event source is used, in this order:
//! `loggers`, then `events`, then `pattern` with `select`.

pub mod file;

use crate::handler::Handler;
use crate::matcher::{MatchOptions, PatternMatcher, ScanSubject};
use crate::sink::LogSink;
use crate::target::TargetList;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

pub use file::{load_config_file, parse_config, ConfigFile, LoadError};

/// Partial event entry: anything left unset falls back to the dictionaries, then defaults
#[derive(Clone, Debug, Default)]
pub struct LoggerSpec {
    pub listener: Option<Handler>,
    pub targets: Option<TargetList>,
}

impl LoggerSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: Handler) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn with_targets(mut self, targets: impl Into<TargetList>) -> Self {
        self.targets = Some(targets.into());
        self
    }
}

/// Instance-level defaults
///
/// These replace shared, process-wide defaults: a logger exposes the
/// defaults it resolved, and a caller may pass them into the next config.
#[derive(Clone, Debug, Default)]
pub struct Defaults {
    pub log: LogSink,
    pub listener: Handler,
    pub targets: TargetList,
}

/// Construction input for a logger
#[derive(Default)]
pub struct StarlogConfig {
    /// Explicit entries, in iteration order
    pub loggers: Option<Vec<(String, LoggerSpec)>>,
    pub events: Option<Vec<String>>,
    pub pattern: Option<Regex>,
    pub select: Option<Vec<Arc<dyn ScanSubject>>>,
    /// Pattern matcher collaborator; `CodeMatcher` when unset
    pub matcher: Option<Arc<dyn PatternMatcher>>,
    pub match_options: MatchOptions,
    /// Base defaults, overridden key by key by `log`, `listener`, `targets`
    pub defaults: Defaults,
    pub log: Option<LogSink>,
    pub listener: Option<Handler>,
    pub targets: Option<TargetList>,
    pub listener_dictionary: HashMap<String, Handler>,
    pub targets_dictionary: HashMap<String, TargetList>,
}

impl StarlogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit entry, replacing any earlier entry for the same event
    pub fn with_logger(mut self, event: impl Into<String>, spec: LoggerSpec) -> Self {
        let event = event.into();
        let loggers = self.loggers.get_or_insert_with(Vec::new);
        match loggers.iter_mut().find(|(name, _)| *name == event) {
            Some((_, existing)) => *existing = spec,
            None => loggers.push((event, spec)),
        }
        self
    }

    /// Use explicit entries as the event source, even if there are none
    pub fn with_loggers<I, S>(mut self, loggers: I) -> Self
    where
        I: IntoIterator<Item = (S, LoggerSpec)>,
        S: Into<String>,
    {
        self.loggers.get_or_insert_with(Vec::new);
        for (event, spec) in loggers {
            self = self.with_logger(event, spec);
        }
        self
    }

    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Discover event names by scanning `select` for `pattern`
    pub fn with_pattern<I>(mut self, pattern: Regex, select: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ScanSubject>>,
    {
        self.pattern = Some(pattern);
        self.select = Some(select.into_iter().collect());
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn PatternMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_match_options(mut self, options: MatchOptions) -> Self {
        self.match_options = options;
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_log(mut self, log: LogSink) -> Self {
        self.log = Some(log);
        self
    }

    pub fn with_listener(mut self, listener: Handler) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn with_targets(mut self, targets: impl Into<TargetList>) -> Self {
        self.targets = Some(targets.into());
        self
    }

    /// Override the handler for one event
    pub fn with_listener_for(mut self, event: impl Into<String>, listener: Handler) -> Self {
        self.listener_dictionary.insert(event.into(), listener);
        self
    }

    /// Override the targets for one event
    pub fn with_targets_for(
        mut self,
        event: impl Into<String>,
        targets: impl Into<TargetList>,
    ) -> Self {
        self.targets_dictionary.insert(event.into(), targets.into());
        self
    }

    /// Defaults after applying the per-key overrides
    pub fn resolved_defaults(&self) -> Defaults {
        Defaults {
            log: self.log.clone().unwrap_or_else(|| self.defaults.log.clone()),
            listener: self
                .listener
                .clone()
                .unwrap_or_else(|| self.defaults.listener.clone()),
            targets: self
                .targets
                .clone()
                .unwrap_or_else(|| self.defaults.targets.clone()),
        }
    }
}

impl std::fmt::Debug for StarlogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarlogConfig")
            .field("loggers", &self.loggers)
            .field("events", &self.events)
            .field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
            .field("select", &self.select.as_ref().map(|s| s.len()))
            .field("match_options", &self.match_options)
            .field("defaults", &self.defaults)
            .field("log", &self.log)
            .field("listener", &self.listener)
            .field("targets", &self.targets)
            .field("listener_dictionary", &self.listener_dictionary)
            .field("targets_dictionary", &self.targets_dictionary)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
