//! Order and bid match records

use serde::{Deserialize, Serialize};

use super::{Action, EnergyBidStatus, Record};
use crate::keys::RecordKind;

/// An energy buy or sell bid.
///
/// Fields are declared alphabetically by stored name so the encoded form is
/// identical across implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub bid_match_id: i64,
    pub bid_status: EnergyBidStatus,
    pub created_on: i64,
    pub id: i64,
    pub on_market_price: String,
    /// Stored under `status` to stay readable by existing records and callers.
    #[serde(rename = "status", with = "crate::canon::float")]
    pub order_cost: f64,
    pub payment_id: i64,
    pub slot_id: String,
    pub slot_exec_date: i64,
    pub total_quantity: i64,
    #[serde(with = "crate::canon::float")]
    pub unit_cost: f64,
    pub updated_on: i64,
    #[serde(rename = "action")]
    pub user_action: Action,
    pub user_id: i64,
}

impl Record for Order {
    const KIND: RecordKind = RecordKind::Order;

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}

/// A matched buy/sell pair for one delivery slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidMatch {
    pub bid_match_tms: i64,
    pub bid_slot: String,
    pub bid_status: EnergyBidStatus,
    pub bid_unit_price: i64,
    pub buyer_user_id: i64,
    #[serde(with = "crate::canon::float")]
    pub delivered_bid_units: f64,
    pub id: i64,
    #[serde(with = "crate::canon::float")]
    pub original_bid_units: f64,
    pub seller_user_id: i64,
    pub transaction_buy_id: i64,
    pub transaction_sell_id: i64,
}

impl Record for BidMatch {
    const KIND: RecordKind = RecordKind::BidMatch;

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
