// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command: discover event names in source files

use crate::output::{print_list, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;
use starlog_core::matcher::{
    scan, CodeMatcher, Greylist, MatchOptions, NamePattern, ScanSubject, SourceFile,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ScanArgs {
    /// Source files to scan
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Regex matched against each file's contents
    #[arg(long, short)]
    pub pattern: String,

    /// Capture group to extract (defaults to 1 if the pattern has groups)
    #[arg(long)]
    pub capture_group: Option<usize>,

    /// Only keep names matching this pattern (`*` is a wildcard)
    #[arg(long)]
    pub allow: Vec<String>,

    /// Drop names matching this pattern
    #[arg(long)]
    pub deny: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn handle(args: ScanArgs) -> Result<()> {
    let pattern = Regex::new(&args.pattern)
        .with_context(|| format!("invalid pattern '{}'", args.pattern))?;

    let subjects: Vec<Arc<dyn ScanSubject>> = args
        .files
        .into_iter()
        .map(|path| Arc::new(SourceFile::new(path)) as Arc<dyn ScanSubject>)
        .collect();

    let options = MatchOptions {
        capture_group: args.capture_group,
        greylist: Greylist {
            white: args.allow.iter().map(|p| NamePattern::new(p)).collect(),
            black: args.deny.iter().map(|p| NamePattern::new(p)).collect(),
        },
        ..Default::default()
    };

    let names = scan(&CodeMatcher, &subjects, &pattern, &options)?;
    print_list(&names, args.format);
    Ok(())
}
