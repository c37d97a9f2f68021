// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-process debuggee that records commands and replays events
//!
//! Useful for tests and for driving interception from captured traffic
//! without a live runtime.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::{Debuggee, EventDispatcher, EventHandler};
use crate::error::{Error, Result};

/// A command as received by [`RecordingDebuggee`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommand {
    pub method: String,
    pub params: Value,
}

/// Recording debuggee connection
#[derive(Default)]
pub struct RecordingDebuggee {
    /// Every command sent, in order (including ones that failed)
    commands: Mutex<Vec<RecordedCommand>>,
    /// Canned results by method
    responses: Mutex<HashMap<String, Value>>,
    /// Methods to reject, with (code, message)
    failures: Mutex<HashMap<String, (i64, String)>>,
    /// Event fan-out
    dispatcher: EventDispatcher,
    /// Whether the connection has been closed
    closed: AtomicBool,
}

impl RecordingDebuggee {
    /// Create a new recording debuggee
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `result` for every future `method` command
    pub fn respond_with(&self, method: impl Into<String>, result: Value) {
        self.responses.lock().insert(method.into(), result);
    }

    /// Reject every future `method` command with a protocol error
    pub fn fail_method(&self, method: impl Into<String>, code: i64, message: impl Into<String>) {
        self.failures.lock().insert(method.into(), (code, message.into()));
    }

    /// Make every future command fail with [`Error::ConnectionClosed`]
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Deliver an event to subscribers; returns the number of handlers invoked
    pub fn emit(&self, event: &str, payload: Value) -> usize {
        self.dispatcher.dispatch(event, &payload)
    }

    /// Commands received so far
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.lock().clone()
    }

    /// Method names of the commands received so far
    pub fn methods(&self) -> Vec<String> {
        self.commands.lock().iter().map(|c| c.method.clone()).collect()
    }

    /// Number of handlers subscribed to `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.dispatcher.subscriber_count(event)
    }
}

#[async_trait]
impl Debuggee for RecordingDebuggee {
    async fn send_command(&self, method: &str, params: Value) -> Result<Value> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::ConnectionClosed);
        }

        self.commands.lock().push(RecordedCommand {
            method: method.to_string(),
            params,
        });

        if let Some((code, message)) = self.failures.lock().get(method) {
            return Err(Error::protocol(method, *code, message.clone()));
        }

        Ok(self
            .responses
            .lock()
            .get(method)
            .cloned()
            .unwrap_or_else(|| json!({})))
    }

    fn on(&self, event: &str, handler: EventHandler) {
        self.dispatcher.subscribe(event, handler);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_records_commands() {
        let dbg = RecordingDebuggee::new();
        dbg.respond_with("Browser.getVersion", json!({ "product": "Chrome/120" }));

        let result = dbg
            .send_command("Browser.getVersion", json!({}))
            .await
            .unwrap();

        assert_eq!(result["product"], "Chrome/120");
        assert_eq!(dbg.methods(), vec!["Browser.getVersion"]);
    }

    #[tokio::test]
    async fn test_failed_command_is_still_recorded() {
        let dbg = RecordingDebuggee::new();
        dbg.fail_method("Fetch.enable", -32000, "Fetch domain not available");

        let err = dbg.send_command("Fetch.enable", json!({})).await.unwrap_err();

        assert!(err.is_protocol());
        assert_eq!(dbg.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_closed_connection() {
        let dbg = RecordingDebuggee::new();
        dbg.close();

        let err = dbg.send_command("Fetch.enable", json!({})).await.unwrap_err();

        assert!(err.is_connection());
        assert!(dbg.commands().is_empty());
    }

    #[test]
    fn test_emit_reaches_subscribers() {
        let dbg = RecordingDebuggee::new();
        let hits = Arc::new(Mutex::new(0));
        {
            let hits = hits.clone();
            dbg.on("Fetch.requestPaused", Arc::new(move |_: &Value| *hits.lock() += 1));
        }

        assert_eq!(dbg.emit("Fetch.requestPaused", json!({})), 1);
        assert_eq!(dbg.emit("Network.requestIntercepted", json!({})), 0);
        assert_eq!(*hits.lock(), 1);
    }
}
