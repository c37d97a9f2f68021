// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interception configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interception::StrategyKind;

/// Interception configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptionConfig {
    /// Backend used for capture
    pub strategy: StrategyKind,
}

impl InterceptionConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strategy
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }
}
