// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registry construction and the listener lifecycle

use thiserror::Error;

/// Errors surfaced by [`Starlog`](crate::Starlog) construction and lifecycle calls
#[derive(Debug, Error)]
pub enum StarlogError {
    /// None of the event sources was configured
    #[error("expected `loggers`, `events`, or `pattern` and `select` to be defined")]
    Configuration,

    /// The pattern matcher failed while scanning a subject
    #[error("pattern matcher failed on {subject}: {source}")]
    Collaborator {
        subject: String,
        #[source]
        source: MatchError,
    },

    /// A target rejected an add or remove call
    #[error("failed to {op} listener for '{event}' on {target}: {source}")]
    Registration {
        op: RegistrationOp,
        event: String,
        target: String,
        #[source]
        source: TargetError,
    },
}

/// Which registration method a target was asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOp {
    Add,
    Remove,
}

impl std::fmt::Display for RegistrationOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationOp::Add => write!(f, "add"),
            RegistrationOp::Remove => write!(f, "remove"),
        }
    }
}

/// Errors a pattern matcher may report for a single subject
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("capture group {group} out of range (pattern has {available})")]
    CaptureGroupOutOfRange { group: usize, available: usize },
    #[error("subject unavailable: {0}")]
    Subject(String),
}

/// Error returned by an [`EventTarget`](crate::EventTarget) registration method
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TargetError(pub String);

impl TargetError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
