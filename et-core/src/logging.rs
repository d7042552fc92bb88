//! Logging conventions
//!
//! All crates log through `tracing` with structured fields.
//!
//! # Log Levels
//!
//! | Level | Usage | Examples |
//! |-------|-------|----------|
//! | ERROR | Host-side failures the chaincode cannot recover from | Ledger file unreadable |
//! | WARN  | Failed invocations | Arity mismatch, record not found |
//! | INFO  | Records written | User created, order updated |
//! | DEBUG | Handler entry, lifecycle resolution | "starting RegisterOrder" |
//! | TRACE | Raw store access | Every `put_state` |
//!
//! # Structured Fields
//!
//! Field names used across the workspace:
//! - `function`: invoked chaincode function
//! - `operation`: one of [`operations`]
//! - `kind`: record kind
//! - `key`: ledger key
//! - `arg_count`: number of invocation arguments
//! - `error`: error message
//! - `size`: payload size in bytes
//!
//! ```ignore
//! use tracing::info;
//!
//! info!(
//!     operation = operations::UPDATE,
//!     kind = %RecordKind::Order,
//!     key = %key,
//!     "record persisted"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Log level enumeration matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation names
pub mod operations {
    /// First persistence of a record
    pub const CREATE: &str = "create";
    /// Overwrite of an existing record
    pub const UPDATE: &str = "update";
    /// Raw passthrough write
    pub const WRITE: &str = "write";
    /// Record read
    pub const READ: &str = "read";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::from_str("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("verbose"), None);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Trace).unwrap();
        assert_eq!(json, "\"trace\"");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
