// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Strategy selection

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{FetchInterception, InterceptionStrategy, NetworkInterception};
use crate::debuggee::Debuggee;
use crate::error::Error;

/// Builds a strategy bound to a connection
pub type StrategyConstructor = fn(Arc<dyn Debuggee>) -> Box<dyn InterceptionStrategy>;

/// Which backend an [`Interception`](super::Interception) uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// `Fetch` domain
    #[default]
    Fetch,
    /// Legacy `Network` domain
    Network,
}

impl StrategyKind {
    /// Registered constructor for this kind
    pub fn constructor(self) -> StrategyConstructor {
        match self {
            StrategyKind::Fetch => fetch,
            StrategyKind::Network => network,
        }
    }

    /// Construct the strategy for `debuggee`
    pub fn construct(self, debuggee: Arc<dyn Debuggee>) -> Box<dyn InterceptionStrategy> {
        tracing::debug!(strategy = %self, "Selecting interception strategy");
        (self.constructor())(debuggee)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Fetch => "fetch",
            StrategyKind::Network => "network",
        }
    }
}

fn fetch(debuggee: Arc<dyn Debuggee>) -> Box<dyn InterceptionStrategy> {
    Box::new(FetchInterception::new(debuggee))
}

fn network(debuggee: Arc<dyn Debuggee>) -> Box<dyn InterceptionStrategy> {
    Box::new(NetworkInterception::new(debuggee))
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fetch" => Ok(StrategyKind::Fetch),
            "network" => Ok(StrategyKind::Network),
            other => Err(Error::config(format!(
                "unknown interception strategy '{}' (expected 'fetch' or 'network')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fetch() {
        assert_eq!(StrategyKind::default(), StrategyKind::Fetch);
    }

    #[test]
    fn test_parse() {
        assert_eq!("fetch".parse::<StrategyKind>().unwrap(), StrategyKind::Fetch);
        assert_eq!(" Network ".parse::<StrategyKind>().unwrap(), StrategyKind::Network);

        let err = "webrequest".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [StrategyKind::Fetch, StrategyKind::Network] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}
