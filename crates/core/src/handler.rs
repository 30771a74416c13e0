// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handlers and the listeners they become once bound to a logger

use crate::event::Event;
use crate::sink::LogContext;
use std::sync::Arc;

type HandlerFn = dyn Fn(&LogContext, &Event) + Send + Sync;

/// An unbound event handler
///
/// The handler body receives the owning logger's [`LogContext`] explicitly
/// and should write through it rather than through a captured sink.
#[derive(Clone)]
pub struct Handler {
    name: String,
    call: Arc<HandlerFn>,
}

impl Handler {
    pub fn new<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&LogContext, &Event) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            call: Arc::new(call),
        }
    }

    /// Logs the event type (the default handler)
    pub fn log_type() -> Self {
        Self::new("type", |log, event| log.log(&event.event_type))
    }

    /// Logs the event type followed by its detail, when present
    pub fn log_detail() -> Self {
        Self::new("detail", |log, event| {
            if event.detail.is_null() {
                log.log(&event.event_type);
            } else {
                log.log(&format!("{} {}", event.event_type, event.detail));
            }
        })
    }

    /// Logs the whole event as a JSON object, or just its type if it cannot be serialized
    pub fn log_json() -> Self {
        Self::new("json", |log, event| match serde_json::to_string(event) {
            Ok(json) => log.log(&json),
            Err(error) => {
                tracing::warn!(event = %event.event_type, %error, "failed to serialize event");
                log.log(&event.event_type)
            }
        })
    }

    /// Look up a built-in handler by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "type" => Some(Self::log_type()),
            "detail" => Some(Self::log_detail()),
            "json" => Some(Self::log_json()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, log: &LogContext, event: &Event) {
        (self.call)(log, event)
    }

    /// Bind this handler to a logger's context, producing a fresh listener
    pub fn bind(&self, context: &LogContext) -> Listener {
        Listener {
            inner: Arc::new(Bound {
                handler: self.clone(),
                context: context.clone(),
            }),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::log_type()
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handler").field(&self.name).finish()
    }
}

struct Bound {
    handler: Handler,
    context: LogContext,
}

/// A handler bound to a logger's context, as registered on targets
///
/// Two listeners are equal only when they are clones of the same binding,
/// which is what targets use to recognize a listener on removal.
#[derive(Clone)]
pub struct Listener {
    inner: Arc<Bound>,
}

impl Listener {
    /// Invoke the bound handler for a delivered event
    pub fn handle(&self, event: &Event) {
        self.inner.handler.call(&self.inner.context, event)
    }

    pub fn handler(&self) -> &Handler {
        &self.inner.handler
    }

    pub fn same_as(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Listener {}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("handler", &self.inner.handler.name)
            .field("at", &Arc::as_ptr(&self.inner))
            .finish()
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
