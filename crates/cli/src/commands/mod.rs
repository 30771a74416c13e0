// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod replay;
pub mod scan;

use anyhow::{Context, Result};
use starlog_core::config::{load_config_file, ConfigFile};
use starlog_core::target::{EventEmitter, EventTarget, TargetRef};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Load a config file, returning it with the directory its relative paths resolve against
pub fn load(path: &Path) -> Result<(ConfigFile, PathBuf)> {
    let file = load_config_file(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((file, base_dir))
}

/// In-process emitters standing in for named targets
#[derive(Default)]
pub struct Emitters(Vec<Arc<EventEmitter>>);

impl Emitters {
    /// One emitter per target name the file mentions, in first-seen order
    pub fn for_config(file: &ConfigFile) -> Self {
        let mut emitters = Self::default();
        for name in file.target_names() {
            emitters.resolve(&name);
        }
        emitters
    }

    pub fn get(&self, name: &str) -> Option<&Arc<EventEmitter>> {
        self.0.iter().find(|emitter| emitter.label() == name)
    }

    /// Look up an emitter by name, creating it on first use
    pub fn resolve(&mut self, name: &str) -> TargetRef {
        if let Some(emitter) = self.get(name) {
            return Arc::clone(emitter) as TargetRef;
        }
        let emitter = Arc::new(EventEmitter::new(name));
        self.0.push(Arc::clone(&emitter));
        emitter
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<EventEmitter>> {
        self.0.iter()
    }
}
