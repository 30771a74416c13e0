// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events handed to listeners by targets

use serde::{Deserialize, Serialize};

/// A named occurrence delivered by a target to its listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The event type listeners are registered under
    #[serde(rename = "type")]
    pub event_type: String,
    /// Arbitrary payload, `null` when the event carries none
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            detail: serde_json::Value::Null,
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = detail;
        self
    }
}
