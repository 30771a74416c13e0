// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-name discovery by scanning subjects for a pattern
//!
//! This module provides:
//! - `PatternMatcher` - The collaborator contract, also implemented by closures
//! - `CodeMatcher` - Default matcher: catalogs members and runs a regex over them
//! - `ScanSubject` - Subjects to scan (`SourceObject`, `SourceFile`, raw `String`)
//! - `scan` - Dedupe matches across subjects in first-seen order

mod code;
mod pattern;
mod subject;

pub use code::CodeMatcher;
pub use pattern::{Greylist, NamePattern};
pub use subject::{Member, ScanSubject, SourceFile, SourceObject};

use crate::error::{MatchError, StarlogError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// Options forwarded verbatim to the matcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Capture group to return for each match
    ///
    /// When unset, group 1 is returned if the pattern has groups, otherwise
    /// the whole match.
    pub capture_group: Option<usize>,
    /// Filter over the extracted strings
    pub greylist: Greylist,
    /// Which members of a subject get searched
    pub catalog: CatalogOptions,
}

/// Member selection for the catalog step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Only search members the subject defines itself
    pub own: bool,
    /// Filter over member names
    pub greylist: Greylist,
}

/// Extracts candidate event names from a subject
pub trait PatternMatcher: Send + Sync {
    fn match_subject(
        &self,
        subject: &dyn ScanSubject,
        pattern: &Regex,
        options: &MatchOptions,
    ) -> Result<Vec<String>, MatchError>;
}

impl<F> PatternMatcher for F
where
    F: Fn(&dyn ScanSubject, &Regex, &MatchOptions) -> Result<Vec<String>, MatchError>
        + Send
        + Sync,
{
    fn match_subject(
        &self,
        subject: &dyn ScanSubject,
        pattern: &Regex,
        options: &MatchOptions,
    ) -> Result<Vec<String>, MatchError> {
        self(subject, pattern, options)
    }
}

/// Run the matcher over every subject, keeping each name once at its first occurrence
pub fn scan(
    matcher: &dyn PatternMatcher,
    subjects: &[Arc<dyn ScanSubject>],
    pattern: &Regex,
    options: &MatchOptions,
) -> Result<Vec<String>, StarlogError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for subject in subjects {
        let matches = matcher
            .match_subject(subject.as_ref(), pattern, options)
            .map_err(|source| StarlogError::Collaborator {
                subject: subject.name(),
                source,
            })?;

        for name in matches {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
