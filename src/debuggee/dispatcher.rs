// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Ordered event fan-out for one connection

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

use super::EventHandler;

/// A named event as it comes off the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl RawEvent {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Per-event-name subscriber lists
///
/// Handlers for one event run in subscription order, and each event is
/// fully fanned out before the next one is looked at.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: RwLock<HashMap<String, Vec<EventHandler>>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the subscriber list for `event`
    pub fn subscribe(&self, event: &str, handler: EventHandler) {
        self.subscribers
            .write()
            .entry(event.to_string())
            .or_default()
            .push(handler);
    }

    /// Deliver one event; returns the number of handlers invoked
    pub fn dispatch(&self, event: &str, payload: &Value) -> usize {
        // Snapshot so handlers may subscribe without deadlocking.
        let handlers = match self.subscribers.read().get(event) {
            Some(handlers) => handlers.clone(),
            None => return 0,
        };

        tracing::trace!(event, handlers = handlers.len(), "Dispatching event");
        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }

    /// Number of handlers subscribed to `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.read().get(event).map_or(0, Vec::len)
    }

    /// Pump events from a transport channel until it closes
    ///
    /// Intended to be spawned once per connection.
    pub async fn run(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<RawEvent>) {
        while let Some(event) = events.recv().await {
            self.dispatch(&event.method, &event.params);
        }
        tracing::debug!("Event channel closed, dispatcher stopping");
    }
}
