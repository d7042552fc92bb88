//! Read accessors
//!
//! Each accessor takes one identifier and returns the stored bytes exactly
//! as written, without decoding. A missing record is reported with the
//! identifier as the caller wrote it.

use std::fmt::Display;

use et_core::logging::operations;
use et_core::{derive_key, RecordKind, StateStore};
use tracing::debug;

use crate::args::Args;
use crate::error::{ChaincodeError, ChaincodeResult};

pub const READ_ARGS: usize = 1;

pub fn read_user_profile(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    read_by_number(stub, "ReadUserProfile", RecordKind::User, "user id", args)
}

pub fn read_platform_contract(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    read_by_number(
        stub,
        "ReadPlatformContract",
        RecordKind::PlatformContract,
        "user id",
        args,
    )
}

/// Payments are keyed by their string id.
pub fn read_payment(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    debug!(function = "ReadPayment", arg_count = args.len(), "starting ReadPayment");
    let args = Args::expect("ReadPayment", args, READ_ARGS)?;
    let id = args.text(0);
    if id.is_empty() {
        return Err(ChaincodeError::parse("payment id", "must be a non-empty string"));
    }
    read_record(stub, RecordKind::Payment, id, id)
}

pub fn read_payment_detail(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    read_by_number(
        stub,
        "ReadPaymentDetail",
        RecordKind::PaymentDetail,
        "payment detail id",
        args,
    )
}

pub fn read_order(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    read_by_number(stub, "ReadOrder", RecordKind::Order, "order id", args)
}

pub fn read_bid_match(stub: &dyn StateStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    read_by_number(stub, "ReadBidMatch", RecordKind::BidMatch, "bid match id", args)
}

fn read_by_number(
    stub: &dyn StateStore,
    function: &'static str,
    kind: RecordKind,
    field: &'static str,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    debug!(function, arg_count = args.len(), "starting read");
    let args = Args::expect(function, args, READ_ARGS)?;
    let id = args.int(0, field)?;
    read_record(stub, kind, id, args.text(0))
}

/// Key is derived from the parsed id; errors echo `given`.
fn read_record(
    stub: &dyn StateStore,
    kind: RecordKind,
    id: impl Display,
    given: &str,
) -> ChaincodeResult<Vec<u8>> {
    let key = derive_key(kind, id);
    let bytes = stub
        .get_state(&key)?
        .ok_or_else(|| ChaincodeError::not_found(kind, given))?;
    debug!(operation = operations::READ, kind = %kind, key = %key, size = bytes.len(), "record read");
    Ok(bytes)
}
