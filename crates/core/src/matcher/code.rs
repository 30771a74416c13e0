// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default pattern matcher over catalogued member sources

use super::{MatchOptions, PatternMatcher, ScanSubject};
use crate::error::MatchError;
use regex::Regex;

/// Searches every catalogued member of a subject with a regex
///
/// Matches are returned in member order, then source order, duplicates
/// included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeMatcher;

impl CodeMatcher {
    fn group_for(pattern: &Regex, options: &MatchOptions) -> Result<usize, MatchError> {
        let available = pattern.captures_len() - 1;
        match options.capture_group {
            Some(group) if group > available => {
                Err(MatchError::CaptureGroupOutOfRange { group, available })
            }
            Some(group) => Ok(group),
            None if available > 0 => Ok(1),
            None => Ok(0),
        }
    }
}

impl PatternMatcher for CodeMatcher {
    fn match_subject(
        &self,
        subject: &dyn ScanSubject,
        pattern: &Regex,
        options: &MatchOptions,
    ) -> Result<Vec<String>, MatchError> {
        let group = Self::group_for(pattern, options)?;
        let mut found = Vec::new();

        for member in subject.members()? {
            if options.catalog.own && !member.own {
                continue;
            }
            if !options.catalog.greylist.allows(&member.name) {
                continue;
            }

            for caps in pattern.captures_iter(&member.source) {
                // Optional groups that did not participate yield nothing
                let Some(m) = caps.get(group) else {
                    continue;
                };
                if options.greylist.allows(m.as_str()) {
                    found.push(m.as_str().to_string());
                }
            }
        }

        tracing::trace!(
            subject = %subject.name(),
            pattern = pattern.as_str(),
            matches = found.len(),
            "scanned subject"
        );
        Ok(found)
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
