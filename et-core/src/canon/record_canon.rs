//! Record encode/decode

use thiserror::Error;

use crate::keys::RecordKind;
use crate::types::Record;

/// Error type for record encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// Record could not be written in canonical form
    #[error("cannot encode {kind} record: {reason}")]
    Encode { kind: RecordKind, reason: String },

    /// Stored bytes are not a valid record of this kind
    #[error("malformed {kind} record: {reason}")]
    Decode { kind: RecordKind, reason: String },
}

/// Encode a record in canonical form.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, CanonError> {
    serde_json::to_vec(record).map_err(|e| CanonError::Encode {
        kind: R::KIND,
        reason: e.to_string(),
    })
}

/// Decode a record previously written by [`encode`].
///
/// Missing fields, mistyped values and unknown enum codes are rejected.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, CanonError> {
    serde_json::from_slice(bytes).map_err(|e| CanonError::Decode {
        kind: R::KIND,
        reason: e.to_string(),
    })
}
