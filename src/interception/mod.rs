// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network interception over a debuggee connection
//!
//! Two incompatible backends expose the same request/response lifecycle:
//! the legacy `Network` domain and the `Fetch` domain. Each is an
//! [`InterceptionStrategy`]; [`Interception`] wraps whichever one was chosen
//! at construction and offers callers a single contract.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interscope::{Interception, Intercepted, RecordingDebuggee};
//!
//! # async fn demo() -> interscope::Result<()> {
//! let debuggee = Arc::new(RecordingDebuggee::new());
//! let interception = Interception::build(debuggee);
//!
//! interception.capture("*://example.com/*").await?;
//! interception
//!     .on_request(|req: Box<dyn Intercepted>| {
//!         println!("request {:?}", req.url());
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod fetch;
mod network;
mod phase;
mod selector;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::InterceptionConfig;
use crate::debuggee::Debuggee;
use crate::error::Result;
use crate::exchange::Intercepted;

pub use fetch::FetchInterception;
pub use network::NetworkInterception;
pub use phase::{Phase, RESPONSE_STATUS_FIELD};
pub use selector::{StrategyConstructor, StrategyKind};

/// Listener invoked with one exchange per matching raw event
pub type Listener = Arc<dyn Fn(Box<dyn Intercepted>) + Send + Sync>;

/// One backend's way of capturing traffic
#[async_trait]
pub trait InterceptionStrategy: Send + Sync {
    /// Configure the backend to pause both phases of traffic matching `pattern`
    ///
    /// Call exactly once per session; re-enabling is not guaranteed to be
    /// idempotent. Failures propagate as-is and nothing already sent is
    /// rolled back.
    async fn capture(&self, pattern: &str) -> Result<()>;

    /// Register a listener for request-phase events
    async fn on_request(&self, listener: Listener) -> Result<()>;

    /// Register a listener for response-phase events
    async fn on_response(&self, listener: Listener) -> Result<()>;
}

/// Interception session bound to one debuggee connection
///
/// Listeners are additive and run in registration order. Registering before
/// or after [`capture`](Interception::capture) makes no difference, but
/// nothing is delivered until capture has activated the backend.
pub struct Interception {
    strategy: Box<dyn InterceptionStrategy>,
}

impl Interception {
    /// Bind to `debuggee` using the default strategy (fetch domain)
    pub fn build(debuggee: Arc<dyn Debuggee>) -> Self {
        Self::with_strategy(debuggee, StrategyKind::default())
    }

    /// Bind to `debuggee` using the given strategy
    pub fn with_strategy(debuggee: Arc<dyn Debuggee>, kind: StrategyKind) -> Self {
        Self {
            strategy: kind.construct(debuggee),
        }
    }

    /// Bind to `debuggee` using the strategy named in `config`
    pub fn from_config(debuggee: Arc<dyn Debuggee>, config: &InterceptionConfig) -> Self {
        Self::with_strategy(debuggee, config.strategy)
    }

    /// Wrap a custom strategy
    pub fn from_strategy<S: InterceptionStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Start capturing traffic matching `pattern`
    pub async fn capture(&self, pattern: &str) -> Result<()> {
        self.strategy.capture(pattern).await
    }

    /// Register a request-phase listener
    pub async fn on_request<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(Box<dyn Intercepted>) + Send + Sync + 'static,
    {
        self.strategy.on_request(Arc::new(listener)).await
    }

    /// Register a response-phase listener
    pub async fn on_response<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(Box<dyn Intercepted>) + Send + Sync + 'static,
    {
        self.strategy.on_response(Arc::new(listener)).await
    }
}
