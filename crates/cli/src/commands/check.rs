// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check command: build the registry from a config file and print it

use super::{load, Emitters};
use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use starlog_core::Starlog;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the config file
    pub config: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct EntryInfo {
    event: String,
    listener: String,
    targets: Vec<String>,
}

impl fmt::Display for EntryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets = if self.targets.is_empty() {
            "-".to_string()
        } else {
            self.targets.join(", ")
        };
        write!(f, "{:<24} {:<8} {}", self.event, self.listener, targets)
    }
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let (file, base_dir) = load(&args.config)?;
    let mut emitters = Emitters::for_config(&file);
    let config = file.into_config(&base_dir, |name| emitters.resolve(name))?;
    let logger = Starlog::new(config)?;

    let entries: Vec<EntryInfo> = logger
        .events()
        .iter()
        .map(|(event, entry)| EntryInfo {
            event: event.to_string(),
            listener: entry.listener().handler().name().to_string(),
            targets: entry.target_list().labels(),
        })
        .collect();

    if entries.is_empty() {
        tracing::warn!(config = %args.config.display(), "no events registered");
    }
    print_list(&entries, args.format);
    Ok(())
}
