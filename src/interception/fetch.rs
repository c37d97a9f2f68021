// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `Fetch` domain interception

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::backend::{self, Backend};
use super::{InterceptionStrategy, Listener, Phase};
use crate::debuggee::{self, Debuggee};
use crate::error::Result;
use crate::exchange::FetchIntercepted;
use crate::protocol::{
    both_phases, FetchEnableParams, InterceptionStage, FETCH_ENABLE, FETCH_REQUEST_PAUSED,
};

struct FetchBackend;

impl Backend for FetchBackend {
    const EVENT: &'static str = FETCH_REQUEST_PAUSED;
    type Exchange = FetchIntercepted;

    fn wrap(debuggee: Arc<dyn Debuggee>, payload: Value) -> FetchIntercepted {
        FetchIntercepted::new(debuggee, payload)
    }
}

/// Interception through `Fetch.enable`, pausing at `Request` and `Response`
pub struct FetchInterception {
    debuggee: Arc<dyn Debuggee>,
}

impl FetchInterception {
    pub fn new(debuggee: Arc<dyn Debuggee>) -> Self {
        Self { debuggee }
    }
}

#[async_trait]
impl InterceptionStrategy for FetchInterception {
    async fn capture(&self, pattern: &str) -> Result<()> {
        tracing::debug!(pattern, "Enabling fetch interception");

        let params = FetchEnableParams {
            patterns: both_phases(pattern, InterceptionStage::Request, InterceptionStage::Response),
        };
        debuggee::send(&*self.debuggee, FETCH_ENABLE, &params).await?;

        Ok(())
    }

    async fn on_request(&self, listener: Listener) -> Result<()> {
        backend::subscribe::<FetchBackend>(&self.debuggee, Phase::Request, listener);
        Ok(())
    }

    async fn on_response(&self, listener: Listener) -> Result<()> {
        backend::subscribe::<FetchBackend>(&self.debuggee, Phase::Response, listener);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::debuggee::RecordingDebuggee;
    use crate::exchange::Intercepted;

    #[tokio::test]
    async fn test_capture_commands() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());

        strategy.capture("*://example.com/*").await.unwrap();

        let commands = dbg.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].method, "Fetch.enable");
        assert_eq!(
            commands[0].params,
            json!({
                "patterns": [
                    { "urlPattern": "*://example.com/*", "interceptionStage": "Request" },
                    { "urlPattern": "*://example.com/*", "interceptionStage": "Response" },
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_capture_passes_pattern_verbatim() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());

        strategy.capture(" weird pattern?* ").await.unwrap();

        let params = &dbg.commands()[0].params;
        assert_eq!(params["patterns"][0]["urlPattern"], " weird pattern?* ");
        assert_eq!(params["patterns"][1]["urlPattern"], " weird pattern?* ");
    }

    #[tokio::test]
    async fn test_capture_failure_propagates() {
        let dbg = Arc::new(RecordingDebuggee::new());
        dbg.close();
        let strategy = FetchInterception::new(dbg);

        let err = strategy.capture("*").await.unwrap_err();

        assert!(err.is_connection());
    }

    #[tokio::test]
    async fn test_request_event_wraps_payload() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(Mutex::new(0));

        {
            let requests = requests.clone();
            strategy
                .on_request(Arc::new(move |exchange: Box<dyn Intercepted>| {
                    requests.lock().push(exchange.payload().clone());
                }))
                .await
                .unwrap();
        }
        {
            let responses = responses.clone();
            strategy
                .on_response(Arc::new(move |_: Box<dyn Intercepted>| *responses.lock() += 1))
                .await
                .unwrap();
        }

        let payload = json!({
            "requestId": "interception-job-1.0",
            "request": { "url": "https://example.com/", "method": "GET", "headers": {} },
        });
        dbg.emit("Fetch.requestPaused", payload.clone());

        assert_eq!(*requests.lock(), vec![payload]);
        assert_eq!(*responses.lock(), 0);
    }

    #[tokio::test]
    async fn test_response_event() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());
        let statuses = Arc::new(Mutex::new(Vec::new()));
        let requests = Arc::new(Mutex::new(0));

        {
            let statuses = statuses.clone();
            strategy
                .on_response(Arc::new(move |exchange: Box<dyn Intercepted>| {
                    statuses.lock().push(exchange.status());
                }))
                .await
                .unwrap();
        }
        {
            let requests = requests.clone();
            strategy
                .on_request(Arc::new(move |_: Box<dyn Intercepted>| *requests.lock() += 1))
                .await
                .unwrap();
        }

        dbg.emit(
            "Fetch.requestPaused",
            json!({ "requestId": "r-9", "responseStatusCode": 500 }),
        );

        assert_eq!(*statuses.lock(), vec![Some(500)]);
        assert_eq!(*requests.lock(), 0);
    }

    #[tokio::test]
    async fn test_both_phases_share_one_event() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());

        strategy
            .on_request(Arc::new(|_: Box<dyn Intercepted>| {}))
            .await
            .unwrap();
        strategy
            .on_response(Arc::new(|_: Box<dyn Intercepted>| {}))
            .await
            .unwrap();

        assert_eq!(dbg.subscriber_count("Fetch.requestPaused"), 2);
        assert_eq!(dbg.subscriber_count("Network.requestIntercepted"), 0);
    }

    #[tokio::test]
    async fn test_ignores_network_events() {
        let dbg = Arc::new(RecordingDebuggee::new());
        let strategy = FetchInterception::new(dbg.clone());
        let hits = Arc::new(Mutex::new(0));

        {
            let hits = hits.clone();
            strategy
                .on_response(Arc::new(move |_: Box<dyn Intercepted>| *hits.lock() += 1))
                .await
                .unwrap();
        }
        dbg.emit(
            "Network.requestIntercepted",
            json!({ "interceptionId": "id-1", "responseStatusCode": 200 }),
        );

        assert_eq!(*hits.lock(), 0);
    }
}
