// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Debuggee connection contract
//!
//! The transport (framing, command correlation, reconnection) lives outside
//! this crate. Interception only needs to send commands and subscribe to
//! named events, so that is all [`Debuggee`] asks for.

mod dispatcher;
mod recording;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorContext, Result};

pub use dispatcher::{EventDispatcher, RawEvent};
pub use recording::{RecordedCommand, RecordingDebuggee};

/// Handler invoked for every occurrence of a named event
pub type EventHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Live control channel to a browser-like runtime
#[async_trait]
pub trait Debuggee: Send + Sync {
    /// Send a command and wait for the debuggee's acknowledgment
    ///
    /// Fails on connection-level or protocol-level errors.
    async fn send_command(&self, method: &str, params: Value) -> Result<Value>;

    /// Subscribe `handler` to every future occurrence of `event`
    ///
    /// There is no automatic unsubscribe.
    fn on(&self, event: &str, handler: EventHandler);
}

/// Serialize `params` and send them as `method`
pub(crate) async fn send<P: Serialize>(
    debuggee: &dyn Debuggee,
    method: &str,
    params: &P,
) -> Result<Value> {
    let params = serde_json::to_value(params)?;
    tracing::debug!(method, %params, "Sending command");

    debuggee
        .send_command(method, params)
        .await
        .with_method(method)
        .map_err(|e| {
            tracing::warn!(method, error = %e, "Command failed");
            e
        })
}
