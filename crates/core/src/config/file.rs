// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML config files for loggers.
//!
//! Handlers and sinks are named (built-ins only) and targets are named and
//! resolved by the caller, so a file can describe everything a
//! [`StarlogConfig`] holds.
//!
//! # Example
//!
//! ```ignore
//! let file = parse_config(r#"
//! events = ["click"]
//! targets = ["document"]
//! "#)?;
//! let config = file.into_config(Path::new("."), |name| emitters.get(name))?;
//! ```

use super::{LoggerSpec, StarlogConfig};
use crate::handler::Handler;
use crate::matcher::{CatalogOptions, Greylist, MatchOptions, NamePattern, ScanSubject, SourceFile};
use crate::sink::LogSink;
use crate::target::{TargetList, TargetRef};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading the config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("unknown listener '{0}' (expected type, detail, or json)")]
    UnknownListener(String),

    #[error("unknown sink '{0}' (expected stderr, stdout, tracing, or tracing:<level>)")]
    UnknownSink(String),
}

/// One name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Names {
    One(String),
    Many(Vec<String>),
}

impl Names {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Names::One(name) => vec![name.clone()],
            Names::Many(names) => names.clone(),
        }
    }
}

/// A `[loggers.<event>]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerEntry {
    pub listener: Option<String>,
    pub targets: Option<Names>,
}

/// The `[pattern]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSection {
    pub regex: String,
    /// Files to scan, relative to the config file
    pub select: Names,
    pub capture_group: Option<usize>,
    #[serde(default)]
    pub allow: Vec<NamePattern>,
    #[serde(default)]
    pub deny: Vec<NamePattern>,
    #[serde(default)]
    pub members_allow: Vec<NamePattern>,
    #[serde(default)]
    pub members_deny: Vec<NamePattern>,
    #[serde(default)]
    pub own: bool,
}

impl PatternSection {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            capture_group: self.capture_group,
            greylist: Greylist {
                white: self.allow.clone(),
                black: self.deny.clone(),
            },
            catalog: CatalogOptions {
                own: self.own,
                greylist: Greylist {
                    white: self.members_allow.clone(),
                    black: self.members_deny.clone(),
                },
            },
        }
    }
}

/// Raw contents of a logger config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Explicit entries in document order
    #[serde(default, deserialize_with = "ordered_loggers")]
    pub loggers: Option<Vec<(String, LoggerEntry)>>,
    pub events: Option<Vec<String>>,
    pub pattern: Option<PatternSection>,
    pub targets: Option<Names>,
    pub listener: Option<String>,
    pub sink: Option<String>,
    #[serde(default)]
    pub listener_dictionary: BTreeMap<String, String>,
    #[serde(default)]
    pub targets_dictionary: BTreeMap<String, Names>,
}

fn ordered_loggers<'de, D>(deserializer: D) -> Result<Option<Vec<(String, LoggerEntry)>>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<toml::Table> = Option::deserialize(deserializer)?;
    table
        .map(|table| {
            table
                .into_iter()
                .map(|(event, value)| {
                    value
                        .try_into::<LoggerEntry>()
                        .map(|entry| (event.clone(), entry))
                        .map_err(|e| serde::de::Error::custom(format!("loggers.{}: {}", event, e)))
                })
                .collect()
        })
        .transpose()
}

/// Parse a config from TOML string content
pub fn parse_config(content: &str) -> Result<ConfigFile, LoadError> {
    let config: ConfigFile = toml::from_str(content)?;
    Ok(config)
}

/// Parse a config from a TOML file
pub fn load_config_file(path: &Path) -> Result<ConfigFile, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

fn builtin_listener(name: &str) -> Result<Handler, LoadError> {
    Handler::builtin(name).ok_or_else(|| LoadError::UnknownListener(name.to_string()))
}

/// `stderr`, `stdout`, `tracing` (at info), or `tracing:<level>`
fn sink_named(name: &str) -> Result<LogSink, LoadError> {
    match name.split_once(':') {
        Some(("tracing", level)) => level
            .parse::<tracing::Level>()
            .map(LogSink::tracing)
            .map_err(|_| LoadError::UnknownSink(name.to_string())),
        Some(_) => Err(LoadError::UnknownSink(name.to_string())),
        None => match name {
            "stderr" => Ok(LogSink::stderr()),
            "stdout" => Ok(LogSink::stdout()),
            "tracing" => Ok(LogSink::tracing(tracing::Level::INFO)),
            other => Err(LoadError::UnknownSink(other.to_string())),
        },
    }
}

fn resolve_all<R>(names: &Names, resolve: &mut R) -> TargetList
where
    R: FnMut(&str) -> TargetRef,
{
    names.to_vec().iter().map(|name| resolve(name)).collect()
}

impl ConfigFile {
    /// Every target name the file refers to, once each, in first-seen order
    pub fn target_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut push = |list: &Names| {
            for name in list.to_vec() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        };

        if let Some(targets) = &self.targets {
            push(targets);
        }
        for (_, entry) in self.loggers.iter().flatten() {
            if let Some(targets) = &entry.targets {
                push(targets);
            }
        }
        for targets in self.targets_dictionary.values() {
            push(targets);
        }
        names
    }

    /// Build a logger config, resolving target names through `resolve`
    ///
    /// Pattern `select` paths are taken relative to `base_dir`.
    pub fn into_config<R>(self, base_dir: &Path, mut resolve: R) -> Result<StarlogConfig, LoadError>
    where
        R: FnMut(&str) -> TargetRef,
    {
        let mut config = StarlogConfig::new();

        if let Some(loggers) = self.loggers {
            let mut specs = Vec::with_capacity(loggers.len());
            for (event, entry) in loggers {
                let mut spec = LoggerSpec::new();
                if let Some(name) = &entry.listener {
                    spec.listener = Some(builtin_listener(name)?);
                }
                if let Some(targets) = &entry.targets {
                    spec.targets = Some(resolve_all(targets, &mut resolve));
                }
                specs.push((event, spec));
            }
            config = config.with_loggers(specs);
        }

        if let Some(events) = self.events {
            config = config.with_events(events);
        }

        if let Some(pattern) = self.pattern {
            let regex = Regex::new(&pattern.regex)?;
            let select: Vec<Arc<dyn ScanSubject>> = pattern
                .select
                .to_vec()
                .into_iter()
                .map(|path| Arc::new(SourceFile::new(base_dir.join(path))) as Arc<dyn ScanSubject>)
                .collect();
            config = config
                .with_match_options(pattern.match_options())
                .with_pattern(regex, select);
        }

        if let Some(targets) = &self.targets {
            config = config.with_targets(resolve_all(targets, &mut resolve));
        }
        if let Some(name) = &self.listener {
            config = config.with_listener(builtin_listener(name)?);
        }
        if let Some(name) = &self.sink {
            config = config.with_log(sink_named(name)?);
        }
        for (event, name) in &self.listener_dictionary {
            config = config.with_listener_for(event.as_str(), builtin_listener(name)?);
        }
        for (event, targets) in &self.targets_dictionary {
            config = config.with_targets_for(event.as_str(), resolve_all(targets, &mut resolve));
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
