//! Typed record access over a [`StateStore`]

use et_core::{decode, derive_key, encode, Record, RecordKind, StateStore};
use tracing::trace;

use crate::error::{ChaincodeError, ChaincodeResult};

/// Outcome of resolving a record key before a write
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<R> {
    /// Nothing stored under the key; the write creates the record
    Absent,
    /// A decodable record is stored; the write updates it
    Present(R),
}

impl<R> Lifecycle<R> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Record repository bound to one invocation's state store
pub struct RecordRepo<'s> {
    stub: &'s mut dyn StateStore,
}

impl<'s> RecordRepo<'s> {
    pub fn new(stub: &'s mut dyn StateStore) -> Self {
        Self { stub }
    }

    /// Read and decode the record stored under `key`, if any.
    ///
    /// Bytes that do not decode as `R` are reported as
    /// [`ChaincodeError::MalformedRecord`], never treated as absent.
    pub fn resolve<R: Record>(&self, key: &str) -> ChaincodeResult<Lifecycle<R>> {
        match self.stub.get_state(key)? {
            None => Ok(Lifecycle::Absent),
            Some(bytes) => decode::<R>(&bytes)
                .map(Lifecycle::Present)
                .map_err(|source| ChaincodeError::MalformedRecord {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// Whether any value is stored under the key of `kind`/`id`
    pub fn exists(&self, kind: RecordKind, id: impl std::fmt::Display) -> ChaincodeResult<bool> {
        let key = derive_key(kind, id);
        Ok(self.stub.get_state(&key)?.is_some())
    }

    /// Encode and persist `record` under its own key, returning the key.
    pub fn save<R: Record>(&mut self, record: &R) -> ChaincodeResult<String> {
        let key = record.key();
        let bytes = encode(record).map_err(ChaincodeError::Encoding)?;
        trace!(key = %key, size = bytes.len(), "saving record");
        self.stub.put_state(&key, bytes)?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use et_core::{EnergySource, MemoryStateStore, PlatformContract, User, UserCategory};

    fn user(id: i64) -> User {
        User {
            id,
            category: UserCategory::Consumer,
            created_on: 1,
            updated_on: 2,
            location: "Grid 7".to_string(),
            meter_id: "M-7".to_string(),
            source: EnergySource::Wind,
        }
    }

    #[test]
    fn test_save_then_resolve() {
        let mut stub = MemoryStateStore::new();
        let mut repo = RecordRepo::new(&mut stub);

        assert_eq!(repo.resolve::<User>("User_7").unwrap(), Lifecycle::Absent);
        let key = repo.save(&user(7)).unwrap();
        assert_eq!(key, "User_7");
        assert_eq!(
            repo.resolve::<User>("User_7").unwrap(),
            Lifecycle::Present(user(7))
        );
        assert!(repo.exists(RecordKind::User, 7).unwrap());
        assert!(!repo.exists(RecordKind::User, 8).unwrap());
    }

    #[test]
    fn test_resolve_malformed() {
        let mut stub = MemoryStateStore::new();
        stub.put_state("PlatformContract_1", b"not json".to_vec())
            .unwrap();
        let repo = RecordRepo::new(&mut stub);

        match repo.resolve::<PlatformContract>("PlatformContract_1") {
            Err(ChaincodeError::MalformedRecord { key, .. }) => {
                assert_eq!(key, "PlatformContract_1")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lifecycle_helpers() {
        assert!(Lifecycle::Present(3).is_present());
        assert!(!Lifecycle::<i32>::Absent.is_present());
    }
}
