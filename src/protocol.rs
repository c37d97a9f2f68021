// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DevTools protocol messages used by the interception backends
//!
//! Command parameters serialize to the exact wire shape the debuggee
//! expects. Event views are optional typed readers over raw payloads; the
//! interception core itself only looks at `responseStatusCode`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `Network.setCacheDisabled`
pub const NETWORK_SET_CACHE_DISABLED: &str = "Network.setCacheDisabled";
/// `Network.setRequestInterception`
pub const NETWORK_SET_REQUEST_INTERCEPTION: &str = "Network.setRequestInterception";
/// `Network.continueInterceptedRequest`
pub const NETWORK_CONTINUE_INTERCEPTED_REQUEST: &str = "Network.continueInterceptedRequest";
/// `Network.requestIntercepted` event
pub const NETWORK_REQUEST_INTERCEPTED: &str = "Network.requestIntercepted";

/// `Fetch.enable`
pub const FETCH_ENABLE: &str = "Fetch.enable";
/// `Fetch.continueRequest`
pub const FETCH_CONTINUE_REQUEST: &str = "Fetch.continueRequest";
/// `Fetch.failRequest`
pub const FETCH_FAIL_REQUEST: &str = "Fetch.failRequest";
/// `Fetch.requestPaused` event
pub const FETCH_REQUEST_PAUSED: &str = "Fetch.requestPaused";

/// Point in a request's lifecycle at which the backend pauses traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterceptionStage {
    /// Before the request is sent
    Request,
    /// After response headers arrive (legacy network domain)
    HeadersReceived,
    /// After the response arrives (fetch domain)
    Response,
}

/// One capture rule entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPattern {
    /// URL glob, passed through unmodified
    pub url_pattern: String,
    /// Stage to pause at
    pub interception_stage: InterceptionStage,
}

impl RequestPattern {
    pub fn new(url_pattern: impl Into<String>, stage: InterceptionStage) -> Self {
        Self {
            url_pattern: url_pattern.into(),
            interception_stage: stage,
        }
    }
}

/// Builds the two-entry pattern list covering both phases of `pattern`
pub(crate) fn both_phases(
    pattern: &str,
    request: InterceptionStage,
    response: InterceptionStage,
) -> Vec<RequestPattern> {
    vec![
        RequestPattern::new(pattern, request),
        RequestPattern::new(pattern, response),
    ]
}

/// Parameters for `Network.setCacheDisabled`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCacheDisabledParams {
    pub cache_disabled: bool,
}

/// Parameters for `Network.setRequestInterception`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRequestInterceptionParams {
    pub patterns: Vec<RequestPattern>,
}

/// Parameters for `Fetch.enable`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchEnableParams {
    pub patterns: Vec<RequestPattern>,
}

/// Parameters for `Network.continueInterceptedRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueInterceptedRequestParams {
    pub interception_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

/// Parameters for `Fetch.continueRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequestParams {
    pub request_id: String,
}

/// Parameters for `Fetch.failRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailRequestParams {
    pub request_id: String,
    pub error_reason: String,
}

/// Request as reported inside interception events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub post_data: Option<String>,
}

/// Header entry (fetch domain reports response headers as a list)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

/// Typed view of a `Network.requestIntercepted` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInterceptedEvent {
    pub interception_id: String,
    pub request: RequestData,
    #[serde(default)]
    pub frame_id: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub is_navigation_request: Option<bool>,
    #[serde(default)]
    pub response_status_code: Option<u16>,
    #[serde(default)]
    pub response_headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub response_error_reason: Option<String>,
}

/// Typed view of a `Fetch.requestPaused` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPausedEvent {
    pub request_id: String,
    pub request: RequestData,
    #[serde(default)]
    pub frame_id: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub response_status_code: Option<u16>,
    #[serde(default)]
    pub response_headers: Option<Vec<HeaderEntry>>,
    #[serde(default)]
    pub response_error_reason: Option<String>,
}
