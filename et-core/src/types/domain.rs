//! Domain tables - closed label/code vocabularies
//!
//! Codes are assigned in definition order and are part of the stored record
//! format; they must never be renumbered. Labels are the exact strings that
//! existing callers submit (case-sensitive, no normalization).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for domain table lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Label is not part of the table
    #[error("unknown {domain} value: '{value}'")]
    UnknownValue { domain: &'static str, value: String },

    /// Code is not part of the table
    #[error("unknown {domain} code: {code}")]
    UnknownCode { domain: &'static str, code: i64 },
}

/// A closed enumeration with stable integer codes and canonical labels.
pub trait DomainTable: Sized + Copy + 'static {
    /// Domain name used in error messages
    const DOMAIN: &'static str;

    /// Every variant, ordered by code
    const ALL: &'static [Self];

    /// Canonical label
    fn label(&self) -> &'static str;

    /// Stable integer code
    fn code(&self) -> i64;

    /// Look up a variant by its exact label
    fn from_label(label: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.label() == label)
            .ok_or_else(|| DomainError::UnknownValue {
                domain: Self::DOMAIN,
                value: label.to_string(),
            })
    }

    /// Look up a variant by its code
    fn from_code(code: i64) -> Result<Self, DomainError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(DomainError::UnknownCode {
                domain: Self::DOMAIN,
                code,
            })
    }
}

/// Records store domain values as their integer code.
macro_rules! code_repr {
    ($ty:ty) => {
        impl TryFrom<i64> for $ty {
            type Error = DomainError;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                <$ty as DomainTable>::from_code(code)
            }
        }

        impl From<$ty> for i64 {
            fn from(value: $ty) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Lifecycle status of an energy bid (orders and bid matches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum EnergyBidStatus {
    Created = 0,
    Accepted = 1,
    Rejected = 2,
    Executed = 3,
    Terminated = 4,
}

impl EnergyBidStatus {
    /// Whether a brand-new order may start in this status
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Created | Self::Accepted)
    }
}

impl DomainTable for EnergyBidStatus {
    const DOMAIN: &'static str = "bid status";
    const ALL: &'static [Self] = &[
        Self::Created,
        Self::Accepted,
        Self::Rejected,
        Self::Executed,
        Self::Terminated,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Created => "BidCreated",
            Self::Accepted => "BidAccepted",
            Self::Rejected => "BidRejected",
            Self::Executed => "BidExecuted",
            Self::Terminated => "BidTerminated",
        }
    }

    fn code(&self) -> i64 {
        *self as i64
    }
}

code_repr!(EnergyBidStatus);

/// Generation source behind a user's meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum EnergySource {
    Solar = 0,
    Wind = 1,
    DieselGenerator = 2,
    Battery = 3,
}

impl DomainTable for EnergySource {
    const DOMAIN: &'static str = "energy source";
    const ALL: &'static [Self] = &[Self::Solar, Self::Wind, Self::DieselGenerator, Self::Battery];

    fn label(&self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Wind => "Wind",
            Self::DieselGenerator => "DG Set",
            Self::Battery => "Battery",
        }
    }

    fn code(&self) -> i64 {
        *self as i64
    }
}

code_repr!(EnergySource);

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Action {
    Buy = 0,
    Sell = 1,
}

impl DomainTable for Action {
    const DOMAIN: &'static str = "action";
    const ALL: &'static [Self] = &[Self::Buy, Self::Sell];

    fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }

    fn code(&self) -> i64 {
        *self as i64
    }
}

code_repr!(Action);

/// Market participation category of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum UserCategory {
    Prosumer = 0,
    Consumer = 1,
}

impl DomainTable for UserCategory {
    const DOMAIN: &'static str = "user category";
    const ALL: &'static [Self] = &[Self::Prosumer, Self::Consumer];

    fn label(&self) -> &'static str {
        match self {
            Self::Prosumer => "Prosumer",
            Self::Consumer => "Consumer",
        }
    }

    fn code(&self) -> i64 {
        *self as i64
    }
}

code_repr!(UserCategory);

/// Reason a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PaymentType {
    WalletRecharge = 0,
    SellerTokenAmount = 1,
    BuyerEnergyPurchased = 2,
    BuyerSellerIncentive = 3,
    SellerEnergySoldTokenRefund = 4,
}

impl DomainTable for PaymentType {
    const DOMAIN: &'static str = "payment type";
    const ALL: &'static [Self] = &[
        Self::WalletRecharge,
        Self::SellerTokenAmount,
        Self::BuyerEnergyPurchased,
        Self::BuyerSellerIncentive,
        Self::SellerEnergySoldTokenRefund,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::WalletRecharge => "WalletRecharge",
            Self::SellerTokenAmount => "Seller - Token Amount",
            Self::BuyerEnergyPurchased => "Buyer - Energy Purchased",
            Self::BuyerSellerIncentive => "Buyer/Seller - Incentive",
            Self::SellerEnergySoldTokenRefund => "Seller - Energy Sold plus Token Refund",
        }
    }

    fn code(&self) -> i64 {
        *self as i64
    }
}

code_repr!(PaymentType);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_table<T: DomainTable + PartialEq + fmt::Debug>() {
        for (index, variant) in T::ALL.iter().enumerate() {
            assert_eq!(variant.code(), index as i64, "{} codes follow order", T::DOMAIN);
            assert_eq!(T::from_label(variant.label()).unwrap(), *variant);
            assert_eq!(T::from_code(variant.code()).unwrap(), *variant);
        }
        assert!(T::from_code(-1).is_err());
        assert!(T::from_code(T::ALL.len() as i64).is_err());
    }

    #[test]
    fn test_tables_round_trip() {
        assert_table::<EnergyBidStatus>();
        assert_table::<EnergySource>();
        assert_table::<Action>();
        assert_table::<UserCategory>();
        assert_table::<PaymentType>();
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(UserCategory::from_label("prosumer").is_err());
        assert!(EnergySource::from_label(" Solar").is_err());
        assert_eq!(
            EnergySource::from_label("DG Set").unwrap(),
            EnergySource::DieselGenerator
        );
    }

    #[test]
    fn test_unknown_label_error() {
        let err = PaymentType::from_label("Refund").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownValue {
                domain: "payment type",
                value: "Refund".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown payment type value: 'Refund'");
    }

    #[test]
    fn test_initial_statuses() {
        let initial: Vec<_> = EnergyBidStatus::ALL
            .iter()
            .filter(|status| status.is_initial())
            .collect();
        assert_eq!(
            initial,
            vec![&EnergyBidStatus::Created, &EnergyBidStatus::Accepted]
        );
    }

    #[test]
    fn test_serialized_as_code() {
        let json = serde_json::to_string(&PaymentType::BuyerSellerIncentive).unwrap();
        assert_eq!(json, "3");

        let source: EnergySource = serde_json::from_str("1").unwrap();
        assert_eq!(source, EnergySource::Wind);

        assert!(serde_json::from_str::<Action>("2").is_err());
        assert!(serde_json::from_str::<Action>("\"Buy\"").is_err());
    }
}
