//! Error types for ET Core

use thiserror::Error;

/// Errors raised by a [`crate::ledger::StateStore`] implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
