// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Intercepted exchanges
//!
//! One exchange wraps one raw interception event together with the
//! connection it came from, so a listener can later resume or abort the
//! paused request. Each backend has its own exchange type because the
//! continuation commands differ.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::debuggee::{self, Debuggee};
use crate::error::{Error, Result};
use crate::interception::{Phase, RESPONSE_STATUS_FIELD};
use crate::protocol::{
    ContinueInterceptedRequestParams, ContinueRequestParams, FailRequestParams,
    RequestInterceptedEvent, RequestPausedEvent, FETCH_CONTINUE_REQUEST, FETCH_FAIL_REQUEST,
    FETCH_REQUEST_PAUSED, NETWORK_CONTINUE_INTERCEPTED_REQUEST, NETWORK_REQUEST_INTERCEPTED,
};

/// A paused request or response handed to a listener
#[async_trait]
pub trait Intercepted: Send + Sync {
    /// Raw event payload
    fn payload(&self) -> &Value;

    /// Backend identifier used by continuation commands
    fn id(&self) -> Option<&str>;

    /// Continue the paused request unmodified
    async fn resume(&self) -> Result<()>;

    /// Fail the paused request with a network error reason (e.g. `"Aborted"`)
    async fn abort(&self, reason: &str) -> Result<()>;

    /// Which phase this exchange was classified as
    fn phase(&self) -> Phase {
        Phase::classify(self.payload())
    }

    /// Request URL
    fn url(&self) -> Option<&str> {
        self.payload().pointer("/request/url").and_then(Value::as_str)
    }

    /// Request method
    fn method(&self) -> Option<&str> {
        self.payload()
            .pointer("/request/method")
            .and_then(Value::as_str)
    }

    /// Numeric response status code
    ///
    /// Only integer statuses are reported. A non-numeric status such as
    /// `"200"` still classifies as [`Phase::Response`] but yields `None` here.
    fn status(&self) -> Option<u16> {
        self.payload()
            .get(RESPONSE_STATUS_FIELD)
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}

/// Exchange from the legacy `Network.requestIntercepted` event
pub struct RequestIntercepted {
    debuggee: Arc<dyn Debuggee>,
    payload: Value,
}

impl RequestIntercepted {
    pub(crate) fn new(debuggee: Arc<dyn Debuggee>, payload: Value) -> Self {
        Self { debuggee, payload }
    }

    /// Typed view of the payload
    pub fn event(&self) -> Result<RequestInterceptedEvent> {
        serde_json::from_value(self.payload.clone())
            .map_err(|e| Error::invalid_event(NETWORK_REQUEST_INTERCEPTED, e.to_string()))
    }

    fn require_id(&self) -> Result<String> {
        self.id().map(String::from).ok_or_else(|| {
            Error::invalid_event(NETWORK_REQUEST_INTERCEPTED, "missing interceptionId")
        })
    }
}

#[async_trait]
impl Intercepted for RequestIntercepted {
    fn payload(&self) -> &Value {
        &self.payload
    }

    fn id(&self) -> Option<&str> {
        self.payload.get("interceptionId").and_then(Value::as_str)
    }

    async fn resume(&self) -> Result<()> {
        let params = ContinueInterceptedRequestParams {
            interception_id: self.require_id()?,
            error_reason: None,
        };
        debuggee::send(&*self.debuggee, NETWORK_CONTINUE_INTERCEPTED_REQUEST, &params).await?;
        Ok(())
    }

    async fn abort(&self, reason: &str) -> Result<()> {
        let params = ContinueInterceptedRequestParams {
            interception_id: self.require_id()?,
            error_reason: Some(reason.to_string()),
        };
        debuggee::send(&*self.debuggee, NETWORK_CONTINUE_INTERCEPTED_REQUEST, &params).await?;
        Ok(())
    }
}

impl fmt::Debug for RequestIntercepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestIntercepted")
            .field("payload", &self.payload)
            .finish()
    }
}

/// Exchange from the `Fetch.requestPaused` event
pub struct FetchIntercepted {
    debuggee: Arc<dyn Debuggee>,
    payload: Value,
}

impl FetchIntercepted {
    pub(crate) fn new(debuggee: Arc<dyn Debuggee>, payload: Value) -> Self {
        Self { debuggee, payload }
    }

    /// Typed view of the payload
    pub fn event(&self) -> Result<RequestPausedEvent> {
        serde_json::from_value(self.payload.clone())
            .map_err(|e| Error::invalid_event(FETCH_REQUEST_PAUSED, e.to_string()))
    }

    fn require_id(&self) -> Result<String> {
        self.id()
            .map(String::from)
            .ok_or_else(|| Error::invalid_event(FETCH_REQUEST_PAUSED, "missing requestId"))
    }
}

#[async_trait]
impl Intercepted for FetchIntercepted {
    fn payload(&self) -> &Value {
        &self.payload
    }

    fn id(&self) -> Option<&str> {
        self.payload.get("requestId").and_then(Value::as_str)
    }

    async fn resume(&self) -> Result<()> {
        let params = ContinueRequestParams {
            request_id: self.require_id()?,
        };
        debuggee::send(&*self.debuggee, FETCH_CONTINUE_REQUEST, &params).await?;
        Ok(())
    }

    async fn abort(&self, reason: &str) -> Result<()> {
        let params = FailRequestParams {
            request_id: self.require_id()?,
            error_reason: reason.to_string(),
        };
        debuggee::send(&*self.debuggee, FETCH_FAIL_REQUEST, &params).await?;
        Ok(())
    }
}

impl fmt::Debug for FetchIntercepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchIntercepted")
            .field("payload", &self.payload)
            .finish()
    }
}
