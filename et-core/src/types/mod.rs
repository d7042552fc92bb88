//! Record and domain types for the energy trading ledger

mod domain;
mod payment;
mod trading;
mod user;

pub use domain::*;
pub use payment::*;
pub use trading::*;
pub use user::*;

use crate::keys::{derive_key, RecordKind};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value persisted under its own ledger key.
///
/// Field declaration order is the stored field order; see [`crate::canon`].
pub trait Record: Serialize + DeserializeOwned {
    /// Key namespace for this record type
    const KIND: RecordKind;

    /// Identity used to derive the ledger key
    fn record_id(&self) -> String;

    /// Ledger key of this record
    fn key(&self) -> String {
        derive_key(Self::KIND, self.record_id())
    }
}
