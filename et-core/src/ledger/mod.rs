//! Ledger boundary
//!
//! The world state is owned by the host platform. The chaincode reads and
//! writes it one key at a time through [`StateStore`]; there are no
//! multi-key transactions at this layer. Writes made during an invocation
//! belong to the host's in-flight transaction and are not rolled back here
//! if a later write fails.

mod memory;

pub use memory::MemoryStateStore;

use crate::error::LedgerResult;

/// Key/value access to the world state for one invocation
pub trait StateStore {
    /// Read the value at `key`, `None` if absent
    fn get_state(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Write `value` at `key`, replacing any previous value
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> LedgerResult<()>;
}
