// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for interscope
//!
//! Every failure surfaces through the async call that triggered it.
//! Nothing here is retried or swallowed.

use thiserror::Error;

/// Result type alias for interscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for interscope
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (socket down, write failed)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The debuggee connection has been closed
    #[error("Debuggee connection has been closed")]
    ConnectionClosed,

    /// The debuggee rejected a command
    #[error("Command {method} failed ({code}): {message}")]
    Protocol {
        method: String,
        code: i64,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A raw event payload could not be read as the expected shape
    #[error("Invalid {event} payload: {reason}")]
    InvalidEvent { event: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Error::Connection(msg.into())
    }

    /// Create a protocol error for a rejected command
    pub fn protocol(method: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Error::Protocol {
            method: method.into(),
            code,
            message: message.into(),
        }
    }

    /// Create an invalid event error
    pub fn invalid_event(event: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidEvent {
            event: event.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a connection-level failure
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::ConnectionClosed)
    }

    /// Check if the debuggee rejected a command
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol { .. })
    }

    /// Get the command method if available
    pub fn method(&self) -> Option<&str> {
        match self {
            Error::Protocol { method, .. } => Some(method),
            _ => None,
        }
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Attribute a bare connection failure to the command that hit it
    fn with_method(self, method: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_method(self, method: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Connection(msg) => Error::Connection(format!("{}: {}", method, msg)),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error() {
        let err = Error::protocol("Fetch.enable", -32602, "Invalid parameters");

        assert!(err.is_protocol());
        assert!(!err.is_connection());
        assert_eq!(err.method(), Some("Fetch.enable"));
        assert_eq!(
            err.to_string(),
            "Command Fetch.enable failed (-32602): Invalid parameters"
        );
    }

    #[test]
    fn test_connection_error_with_method() {
        let res: Result<()> = Err(Error::connection("socket closed"));
        let err = res.with_method("Network.setCacheDisabled").unwrap_err();

        assert!(err.is_connection());
        assert_eq!(
            err.to_string(),
            "Connection error: Network.setCacheDisabled: socket closed"
        );
    }

    #[test]
    fn test_with_method_keeps_protocol_errors() {
        let res: Result<()> = Err(Error::protocol("Fetch.enable", 1, "nope"));
        let err = res.with_method("Other.method").unwrap_err();

        assert_eq!(err.method(), Some("Fetch.enable"));
    }

    #[test]
    fn test_with_method_keeps_connection_closed() {
        let res: Result<()> = Err(Error::ConnectionClosed);
        let err = res.with_method("Fetch.enable").unwrap_err();

        assert!(err.is_connection());
        assert!(matches!(err, Error::ConnectionClosed));
    }
}
