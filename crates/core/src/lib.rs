// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! starlog-core: event-listener registry and logging lifecycle
//!
//! This crate provides:
//! - Registry construction from explicit loggers, an event list, or a regex scan
//! - Cascading handler/target defaults per event
//! - A start/stop lifecycle that attaches listeners to event targets in bulk
//! - A late-bound log sink shared by every bound handler

pub mod binder;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod logger;
pub mod matcher;
pub mod registry;
pub mod sink;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use binder::EventEntry;
pub use config::{Defaults, LoggerSpec, StarlogConfig};
pub use error::{MatchError, RegistrationOp, StarlogError, TargetError};
pub use event::Event;
pub use handler::{Handler, Listener};
pub use logger::{LifecycleState, Starlog};
pub use matcher::{
    CatalogOptions, CodeMatcher, Greylist, MatchOptions, Member, NamePattern, PatternMatcher,
    ScanSubject, SourceFile, SourceObject,
};
pub use registry::{build_registry, EventRegistry, EventSource};
pub use sink::{LogContext, LogSink};
pub use target::{EventEmitter, EventTarget, TargetList, TargetRef};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTarget, TargetCall};
