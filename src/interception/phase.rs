// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response phase classification

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field whose presence marks a response-phase event
pub const RESPONSE_STATUS_FIELD: &str = "responseStatusCode";

/// Lifecycle phase of a raw interception event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Paused before the request is sent
    Request,
    /// Paused after the response (or its headers) arrived
    Response,
}

impl Phase {
    /// Classify a raw payload
    ///
    /// Response iff `responseStatusCode` is present and non-empty. A missing,
    /// `null`, zero or empty status means request phase, as does a payload
    /// that is not an object at all.
    pub fn classify(payload: &Value) -> Self {
        match payload.get(RESPONSE_STATUS_FIELD) {
            Some(status) if is_set(status) => Phase::Response,
            _ => Phase::Request,
        }
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_present_is_response() {
        assert_eq!(Phase::classify(&json!({ "responseStatusCode": 200 })), Phase::Response);
        assert_eq!(Phase::classify(&json!({ "responseStatusCode": 302 })), Phase::Response);
    }

    #[test]
    fn test_missing_status_is_request() {
        assert_eq!(Phase::classify(&json!({ "requestId": "1" })), Phase::Request);
        assert_eq!(Phase::classify(&json!({})), Phase::Request);
    }

    #[test]
    fn test_empty_status_defaults_to_request() {
        assert_eq!(Phase::classify(&json!({ "responseStatusCode": null })), Phase::Request);
        assert_eq!(Phase::classify(&json!({ "responseStatusCode": 0 })), Phase::Request);
        assert_eq!(Phase::classify(&json!({ "responseStatusCode": "" })), Phase::Request);
    }

    #[test]
    fn test_non_object_payload_is_request() {
        assert_eq!(Phase::classify(&json!(null)), Phase::Request);
        assert_eq!(Phase::classify(&json!([200])), Phase::Request);
    }
}
