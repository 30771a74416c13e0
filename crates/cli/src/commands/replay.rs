// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay command: start a logger over in-process targets and dispatch events

use super::{load, Emitters};
use anyhow::{anyhow, Result};
use clap::Args;
use starlog_core::target::EventEmitter;
use starlog_core::{Event, EventTarget, Starlog};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to the config file
    pub config: PathBuf,

    /// Event types to dispatch, in order
    #[arg(required = true)]
    pub events: Vec<String>,

    /// Dispatch only to this target (repeatable; default: every target)
    #[arg(long = "target")]
    pub targets: Vec<String>,

    /// Call start twice before dispatching
    #[arg(long)]
    pub twice: bool,
}

pub fn handle(args: ReplayArgs) -> Result<()> {
    let (file, base_dir) = load(&args.config)?;
    let mut emitters = Emitters::for_config(&file);
    let config = file.into_config(&base_dir, |name| emitters.resolve(name))?;
    let logger = Starlog::new(config)?;

    let selected: Vec<Arc<EventEmitter>> = if args.targets.is_empty() {
        emitters.iter().cloned().collect()
    } else {
        args.targets
            .iter()
            .map(|name| {
                emitters
                    .get(name)
                    .cloned()
                    .ok_or_else(|| anyhow!("unknown target '{}'", name))
            })
            .collect::<Result<_>>()?
    };

    logger.start()?;
    if args.twice {
        logger.start()?;
    }

    for event_type in &args.events {
        let event = Event::new(event_type.as_str());
        for emitter in &selected {
            let delivered = emitter.dispatch(&event);
            tracing::debug!(event = %event_type, label = %emitter.label(), delivered, "dispatched");
        }
    }

    logger.stop()?;
    Ok(())
}
