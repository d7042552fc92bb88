//! Canonical record encoding
//!
//! Records are stored as compact JSON whose field order is the declaration
//! order of the record struct. Enum fields are stored as integer codes and
//! floats in the number syntax of Go's `encoding/json`, so the bytes match
//! what other implementations of this chaincode write for the same record.

pub mod float;
mod record_canon;

pub use record_canon::*;
