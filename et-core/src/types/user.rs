//! User and platform contract records

use serde::{Deserialize, Serialize};

use super::{EnergySource, Record, UserCategory};
use crate::keys::RecordKind;

/// Registered market participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub category: UserCategory,
    /// Unix seconds of first persistence
    pub created_on: i64,
    /// Unix seconds of the latest profile update
    pub updated_on: i64,
    pub location: String,
    pub meter_id: String,
    pub source: EnergySource,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}

/// Platform terms signed by a user, keyed by the user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformContract {
    pub user_id: i64,
    pub created_on: i64,
    pub updated_on: i64,
}

impl Record for PlatformContract {
    const KIND: RecordKind = RecordKind::PlatformContract;

    fn record_id(&self) -> String {
        self.user_id.to_string()
    }
}
