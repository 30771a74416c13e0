// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! starlog - event listener logging CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, replay, scan};

#[derive(Parser)]
#[command(
    name = "starlog",
    version,
    about = "Starlog - discover, check, and replay logged events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan source files for event names
    Scan(scan::ScanArgs),
    /// Build the event registry from a config file and print it
    Check(check::CheckArgs),
    /// Start a logger from a config file and dispatch events through it
    Replay(replay::ReplayArgs),
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("STARLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Commands::Scan(args) => scan::handle(args),
        Commands::Check(args) => check::handle(args),
        Commands::Replay(args) => replay::handle(args),
    }
}
