//! Chaincode error types
//!
//! Every error aborts the current invocation and is reported verbatim in the
//! response message. Nothing is retried and sub-writes already made are not
//! undone.

use et_core::{CanonError, DomainError, EnergyBidStatus, LedgerError, RecordKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaincodeError {
    #[error("Incorrect number of arguments for {function}. Expecting {expected}, got {actual}")]
    Arity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to parse {field}: {reason}")]
    Parse { field: &'static str, reason: String },

    #[error("Invalid {field}: {source}")]
    UnknownDomainValue {
        field: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("Argument {index} {reason}")]
    InvalidArgument { index: usize, reason: String },

    #[error("Invalid BidStatus {status} for new Order {order_id}: expected BidCreated or BidAccepted")]
    InvalidInitialState {
        order_id: i64,
        status: EnergyBidStatus,
    },

    #[error("Referenced {kind} with ID {id} not found")]
    ReferenceNotFound { kind: RecordKind, id: String },

    #[error("{kind} with ID {id} not found")]
    NotFound { kind: RecordKind, id: String },

    #[error("Malformed record at {key}: {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: CanonError,
    },

    #[error("Persistence error: {0}")]
    Persistence(#[from] LedgerError),

    #[error("Encoding error: {0}")]
    Encoding(#[source] CanonError),

    #[error("Received unknown invoke function name - '{0}'")]
    UnknownFunction(String),
}

impl ChaincodeError {
    /// Create a parse error
    pub fn parse(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            field,
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Stable error code for logs and host tooling
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arity { .. } => "ARITY_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::UnknownDomainValue { .. } => "UNKNOWN_DOMAIN_VALUE",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::InvalidInitialState { .. } => "INVALID_INITIAL_STATE",
            Self::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Encoding(_) => "ENCODING_ERROR",
            Self::UnknownFunction(_) => "UNKNOWN_FUNCTION",
        }
    }
}

/// Result type alias for chaincode operations
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;
