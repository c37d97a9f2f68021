// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Legacy `Network` domain interception

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::backend::{self, Backend};
use super::{InterceptionStrategy, Listener, Phase};
use crate::debuggee::{self, Debuggee};
use crate::error::Result;
use crate::exchange::RequestIntercepted;
use crate::protocol::{
    both_phases, InterceptionStage, SetCacheDisabledParams, SetRequestInterceptionParams,
    NETWORK_REQUEST_INTERCEPTED, NETWORK_SET_CACHE_DISABLED, NETWORK_SET_REQUEST_INTERCEPTION,
};

struct NetworkBackend;

impl Backend for NetworkBackend {
    const EVENT: &'static str = NETWORK_REQUEST_INTERCEPTED;
    type Exchange = RequestIntercepted;

    fn wrap(debuggee: Arc<dyn Debuggee>, payload: Value) -> RequestIntercepted {
        RequestIntercepted::new(debuggee, payload)
    }
}

/// Interception through `Network.setRequestInterception`
///
/// Pauses at `Request` and `HeadersReceived`. Caching is disabled first so
/// every response actually goes over the wire.
pub struct NetworkInterception {
    debuggee: Arc<dyn Debuggee>,
}

impl NetworkInterception {
    pub fn new(debuggee: Arc<dyn Debuggee>) -> Self {
        Self { debuggee }
    }
}

#[async_trait]
impl InterceptionStrategy for NetworkInterception {
    async fn capture(&self, pattern: &str) -> Result<()> {
        tracing::debug!(pattern, "Enabling network interception");

        debuggee::send(
            &*self.debuggee,
            NETWORK_SET_CACHE_DISABLED,
            &SetCacheDisabledParams {
                cache_disabled: true,
            },
        )
        .await?;

        let params = SetRequestInterceptionParams {
            patterns: both_phases(
                pattern,
                InterceptionStage::Request,
                InterceptionStage::HeadersReceived,
            ),
        };
        debuggee::send(&*self.debuggee, NETWORK_SET_REQUEST_INTERCEPTION, &params).await?;

        Ok(())
    }

    async fn on_request(&self, listener: Listener) -> Result<()> {
        backend::subscribe::<NetworkBackend>(&self.debuggee, Phase::Request, listener);
        Ok(())
    }

    async fn on_response(&self, listener: Listener) -> Result<()> {
        backend::subscribe::<NetworkBackend>(&self.debuggee, Phase::Response, listener);
        Ok(())
    }
}
