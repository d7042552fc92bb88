//! Chaincode function handlers
//!
//! Write handlers share one shape: arity, parse, derive key, resolve the
//! [`Lifecycle`], persist. Read handlers return stored bytes untouched.

mod bid_match_service;
mod contract_service;
mod order_service;
mod payment_service;
pub mod read;
mod user_service;
mod write_service;

pub use bid_match_service::{process_bid_match, PROCESS_BID_MATCH_ARGS};
pub use contract_service::{sign_platform_contract, SIGN_PLATFORM_CONTRACT_ARGS};
pub use order_service::{register_order, REGISTER_ORDER_ARGS};
pub use payment_service::{record_payment, RECORD_PAYMENT_ARGS};
pub use user_service::{update_user_profile, UPDATE_USER_PROFILE_ARGS};
pub use write_service::{write, WRITE_ARGS};

use et_core::logging::operations;
use et_core::RecordKind;
use tracing::info;

use crate::clock::Clock;
use crate::config::ChaincodeConfig;
use crate::ids::DetailIdSource;
use crate::repo::Lifecycle;

/// Per-invocation handler dependencies
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub config: &'a ChaincodeConfig,
    pub clock: &'a dyn Clock,
    pub detail_ids: &'a dyn DetailIdSource,
}

impl<'a> HandlerContext<'a> {
    /// Timestamp for `createdOn`/`updatedOn`
    pub fn now(&self) -> i64 {
        self.clock.unix_seconds()
    }
}

fn operation_for<R>(lifecycle: &Lifecycle<R>) -> &'static str {
    if lifecycle.is_present() {
        operations::UPDATE
    } else {
        operations::CREATE
    }
}

fn log_persisted(operation: &'static str, kind: RecordKind, key: &str) {
    info!(operation, kind = %kind, key = %key, "record persisted");
}
