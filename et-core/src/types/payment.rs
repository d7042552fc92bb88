//! Payment records

use serde::{Deserialize, Serialize};

use super::{PaymentType, Record};
use crate::keys::RecordKind;

/// A payment made on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub created_on: i64,
    pub id: String,
    /// Id of the [`PaymentDetail`] written alongside this payment
    #[serde(rename = "paymentDetail")]
    pub payment_detail_id: i64,
    pub payment_type: PaymentType,
    #[serde(with = "crate::canon::float")]
    pub total_amount: f64,
    pub user_id: i64,
}

impl Record for Payment {
    const KIND: RecordKind = RecordKind::Payment;

    fn record_id(&self) -> String {
        self.id.clone()
    }
}

/// Breakdown of a payment between parties, fees and refunds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    pub id: i64,
    pub debited_from: String,
    pub credited_to: String,
    #[serde(with = "crate::canon::float")]
    pub total_unit_cost: f64,
    #[serde(with = "crate::canon::float")]
    pub platform_fee: f64,
    #[serde(with = "crate::canon::float")]
    pub token_amount: f64,
    #[serde(with = "crate::canon::float")]
    pub bid_refund_amount: f64,
    #[serde(with = "crate::canon::float")]
    pub platform_fee_refund_amount: f64,
    #[serde(with = "crate::canon::float")]
    pub token_amount_refund: f64,
    #[serde(with = "crate::canon::float")]
    pub penalty_from_seller: f64,
}

impl Record for PaymentDetail {
    const KIND: RecordKind = RecordKind::PaymentDetail;

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
