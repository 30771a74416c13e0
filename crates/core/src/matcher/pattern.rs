// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name patterns and allow/deny lists for filtering matches and members

use serde::{Deserialize, Serialize};

/// Pattern for matching names
/// Supports:
///   - Exact: "fin-click"
///   - Wildcard: "fin-*" matches "fin-click", "fin-canvas-resized"
///   - Infix: "fin-*-changed" matches "fin-column-changed"
///   - Global: "*" matches everything
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamePattern(String);

impl NamePattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Check if this pattern matches a name
    pub fn matches(&self, name: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        let mut parts = self.0.split('*');
        let first = parts.next().unwrap_or_default();
        let Some(mut rest) = name.strip_prefix(first) else {
            return false;
        };

        let middle: Vec<&str> = parts.collect();
        let Some((last, middle)) = middle.split_last() else {
            // No wildcard at all: exact match
            return rest.is_empty();
        };

        for part in middle {
            match rest.find(part) {
                Some(at) => rest = &rest[at + part.len()..],
                None => return false,
            }
        }
        rest.ends_with(last)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NamePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// Allow/deny filter over names
///
/// An empty `white` list allows everything; `black` always wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greylist {
    #[serde(default)]
    pub white: Vec<NamePattern>,
    #[serde(default)]
    pub black: Vec<NamePattern>,
}

impl Greylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(mut self, pattern: &str) -> Self {
        self.white.push(NamePattern::new(pattern));
        self
    }

    pub fn deny(mut self, pattern: &str) -> Self {
        self.black.push(NamePattern::new(pattern));
        self
    }

    /// Check whether a name passes the filter
    pub fn allows(&self, name: &str) -> bool {
        let listed = self.white.is_empty() || self.white.iter().any(|p| p.matches(name));
        listed && !self.black.iter().any(|p| p.matches(name))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
