//! ET Core - Energy Trading Record Store
//!
//! This crate provides the core types and interfaces for the energy trading
//! chaincode. The chaincode records trading objects in an external ledger:
//! - Users and their platform contracts
//! - Orders and bid matches
//! - Payments and their payment details
//!
//! The ledger itself (ordering, endorsement, MVCC) belongs to the host
//! platform. This crate only sees it through the [`ledger::StateStore`]
//! get/put boundary.
//!
//! # Layout
//!
//! - `types` - domain tables and record structs
//! - `canon` - deterministic record encoding
//! - `keys` - per-kind ledger key derivation
//! - `ledger` - the state store boundary and an in-memory store
//! - `logging` - log field and operation naming conventions

pub mod canon;
pub mod error;
pub mod keys;
pub mod ledger;
pub mod logging;
pub mod types;

pub use canon::{decode, encode, CanonError};
pub use error::*;
pub use keys::{derive_key, split_key, RecordKind};
pub use ledger::{MemoryStateStore, StateStore};
pub use types::*;
