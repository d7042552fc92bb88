//! Ledger key derivation
//!
//! Every record kind owns a key namespace: `<Prefix>_<id>`. The prefixes are
//! prefix-free (no prefix starts with another), so a key belongs to exactly
//! one kind and keys of different kinds cannot collide.
//!
//! Identifiers are not escaped. A string identifier such as a payment id may
//! contain `_`; it still stays inside its own namespace because the kind is
//! decided by the leading prefix alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record kinds stored by the chaincode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    User,
    PlatformContract,
    Payment,
    PaymentDetail,
    Order,
    BidMatch,
}

impl RecordKind {
    /// Every kind
    pub const ALL: [RecordKind; 6] = [
        RecordKind::User,
        RecordKind::PlatformContract,
        RecordKind::Payment,
        RecordKind::PaymentDetail,
        RecordKind::Order,
        RecordKind::BidMatch,
    ];

    /// Key prefix, including the trailing separator
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "User_",
            Self::PlatformContract => "PlatformContract_",
            Self::Payment => "Payment_",
            Self::PaymentDetail => "PaymentDetail_",
            Self::Order => "Order_",
            Self::BidMatch => "BidMatch_",
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::PlatformContract => "PlatformContract",
            Self::Payment => "Payment",
            Self::PaymentDetail => "PaymentDetail",
            Self::Order => "Order",
            Self::BidMatch => "BidMatch",
        }
    }

    /// Parse from display name (case-insensitive, for CLI filters)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the ledger key for a record of `kind` with identifier `id`.
pub fn derive_key(kind: RecordKind, id: impl fmt::Display) -> String {
    format!("{}{}", kind.prefix(), id)
}

/// Split a ledger key into its kind and identifier.
///
/// Returns `None` for keys outside every record namespace, e.g. raw keys
/// written through the generic `Write` function.
pub fn split_key(key: &str) -> Option<(RecordKind, &str)> {
    RecordKind::ALL
        .into_iter()
        .find_map(|kind| key.strip_prefix(kind.prefix()).map(|id| (kind, id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key() {
        assert_eq!(derive_key(RecordKind::User, 1), "User_1");
        assert_eq!(derive_key(RecordKind::Order, 42), "Order_42");
        assert_eq!(derive_key(RecordKind::Payment, "pay-1"), "Payment_pay-1");
        assert_eq!(
            derive_key(RecordKind::PlatformContract, 12345),
            "PlatformContract_12345"
        );
    }

    #[test]
    fn test_prefixes_are_prefix_free() {
        for a in RecordKind::ALL {
            for b in RecordKind::ALL {
                if a != b {
                    assert!(
                        !a.prefix().starts_with(b.prefix()),
                        "{} overlaps {}",
                        a.prefix(),
                        b.prefix()
                    );
                }
            }
        }
    }

    #[test]
    fn test_split_key_round_trip() {
        for kind in RecordKind::ALL {
            let key = derive_key(kind, 99);
            assert_eq!(split_key(&key), Some((kind, "99")));
        }
    }

    #[test]
    fn test_prefix_like_payment_id_stays_in_namespace() {
        let key = derive_key(RecordKind::Payment, "Detail_5");
        assert_eq!(key, "Payment_Detail_5");
        assert_ne!(key, derive_key(RecordKind::PaymentDetail, 5));
        assert_eq!(split_key(&key), Some((RecordKind::Payment, "Detail_5")));
    }

    #[test]
    fn test_split_unknown_key() {
        assert_eq!(split_key("TestKey"), None);
        assert_eq!(split_key("user_1"), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(RecordKind::from_str("bidmatch"), Some(RecordKind::BidMatch));
        assert_eq!(RecordKind::from_str("Order"), Some(RecordKind::Order));
        assert_eq!(RecordKind::from_str("invoice"), None);
    }
}
