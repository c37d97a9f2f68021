// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Interscope - Network Interception over DevTools Connections
//!
//! Register a URL capture pattern on a live debuggee connection and get
//! request/response callbacks, regardless of whether the runtime exposes
//! the legacy `Network` interception API or the `Fetch` domain.
//!
//! ## Features
//!
//! - One `capture` / `on_request` / `on_response` contract for both backends
//! - Phase classification by `responseStatusCode` presence
//! - Backend-specific exchanges with `resume` / `abort`
//! - Ordered per-connection event dispatch
//! - In-process recording debuggee for tests and replay
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interscope::{Debuggee, Intercepted, Interception};
//!
//! async fn run(debuggee: Arc<dyn Debuggee>) -> interscope::Result<()> {
//!     let interception = Interception::build(debuggee);
//!
//!     interception
//!         .on_response(|res: Box<dyn Intercepted>| {
//!             println!("{:?} -> {:?}", res.url(), res.status());
//!         })
//!         .await?;
//!     interception.capture("*://example.com/*").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod debuggee;
pub mod error;
pub mod exchange;
pub mod interception;
pub mod protocol;

// Re-exports for convenience

// Interception
pub use interception::{
    FetchInterception, Interception, InterceptionStrategy, Listener, NetworkInterception, Phase,
    StrategyKind,
};

// Exchanges
pub use exchange::{FetchIntercepted, Intercepted, RequestIntercepted};

// Debuggee connection
pub use debuggee::{
    Debuggee, EventDispatcher, EventHandler, RawEvent, RecordedCommand, RecordingDebuggee,
};

// Configuration
pub use config::InterceptionConfig;

// Protocol
pub use protocol::{InterceptionStage, RequestPattern};

// Errors
pub use error::{Error, ErrorContext, Result};

/// Interscope version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
