//! CLI Error Types

use et_chaincode::ChaincodeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Ledger file holds a value that is not valid hex
    #[error("Invalid hex value at {key}: {source}")]
    HexError {
        key: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Chaincode invocation failed
    #[error("{0}")]
    InvocationFailed(#[from] ChaincodeError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigError { .. } => 1,
            CliError::InvalidArgument { .. } => 2,
            CliError::IoError(_) => 5,
            CliError::JsonError(_) => 6,
            CliError::HexError { .. } => 7,
            CliError::InvocationFailed(e) => match e {
                ChaincodeError::NotFound { .. } | ChaincodeError::ReferenceNotFound { .. } => 21,
                ChaincodeError::Persistence(_) => 31,
                _ => 10,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use et_core::RecordKind;

    #[test]
    fn test_config_error() {
        let err = CliError::config("ledger path is a directory");
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("ledger path is a directory"));
    }

    #[test]
    fn test_invocation_exit_codes() {
        let err: CliError = ChaincodeError::not_found(RecordKind::Order, "42").into();
        assert_eq!(err.exit_code(), 21);
        assert_eq!(err.to_string(), "Order with ID 42 not found");

        let err: CliError = ChaincodeError::UnknownFunction("Nope".to_string()).into();
        assert_eq!(err.exit_code(), 10);
    }
}
