// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subjects scanned for event names

use crate::error::MatchError;
use std::path::{Path, PathBuf};

/// One scannable member of a subject (a method, getter, or setter body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub source: String,
    /// Defined by the subject itself rather than inherited
    pub own: bool,
}

impl Member {
    pub fn own(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            own: true,
        }
    }

    pub fn inherited(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            own: false,
        }
    }
}

/// Something whose members can be catalogued and searched
pub trait ScanSubject: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> String;

    fn members(&self) -> Result<Vec<Member>, MatchError>;
}

/// Subject described explicitly as a list of members
#[derive(Debug, Clone, Default)]
pub struct SourceObject {
    name: String,
    members: Vec<Member>,
}

impl SourceObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Add an own member
    pub fn method(self, name: &str, source: &str) -> Self {
        self.member(Member::own(name, source))
    }

    /// Add an inherited member
    pub fn inherited(self, name: &str, source: &str) -> Self {
        self.member(Member::inherited(name, source))
    }
}

impl ScanSubject for SourceObject {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn members(&self) -> Result<Vec<Member>, MatchError> {
        Ok(self.members.clone())
    }
}

/// A source file scanned as a single own member named after the file stem
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScanSubject for SourceFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn members(&self) -> Result<Vec<Member>, MatchError> {
        let source = std::fs::read_to_string(&self.path).map_err(|e| {
            MatchError::Subject(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let name = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("source");
        Ok(vec![Member::own(name, source)])
    }
}

/// Raw source text scanned as a single own member
impl ScanSubject for String {
    fn name(&self) -> String {
        "<source>".to_string()
    }

    fn members(&self) -> Result<Vec<Member>, MatchError> {
        Ok(vec![Member::own("source", self.clone())])
    }
}
