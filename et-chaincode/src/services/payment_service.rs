//! Payments and their details

use et_core::logging::operations;
use et_core::{derive_key, Payment, PaymentDetail, PaymentType, RecordKind, StateStore};
use tracing::{debug, trace};

use super::{log_persisted, operation_for, HandlerContext};
use crate::args::Args;
use crate::error::ChaincodeResult;
use crate::repo::{Lifecycle, RecordRepo};

pub const RECORD_PAYMENT_ARGS: usize = 12;

/// `RecordPayment(paymentId, paymentType, totalAmount, userId, debitedFrom,
/// creditedTo, totalUnitCost, platformFee, tokenAmount, bidRefundAmount,
/// platformFeeRefundAmount, penaltyFromSeller)`
///
/// Writes a fresh [`PaymentDetail`] under an unused id first, then the [`Payment`] pointing at
/// it. The two puts are separate; if the second fails the detail stays in
/// the transaction's write set.
///
/// The penalty argument fills both `tokenAmountRefund` and
/// `penaltyFromSeller`.
pub fn record_payment(
    ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "RecordPayment", arg_count = args.len(), "starting RecordPayment");
    let args = Args::expect("RecordPayment", args, RECORD_PAYMENT_ARGS)?;

    let payment_id = args.identifier(0)?.to_string();
    let payment_type = args.label::<PaymentType>(1, "payment type")?;
    let total_amount = args.float(2, "total amount")?;
    let user_id = args.int(3, "user id")?;
    let debited_from = args.text(4).to_string();
    let credited_to = args.text(5).to_string();
    let total_unit_cost = args.float(6, "total unit cost")?;
    let platform_fee = args.float(7, "platform fee")?;
    let token_amount = args.float(8, "token amount")?;
    let bid_refund_amount = args.float(9, "bid refund amount")?;
    let platform_fee_refund_amount = args.float(10, "platform fee refund amount")?;
    let penalty_from_seller = args.float(11, "penalty from seller")?;

    let now = ctx.now();
    let mut repo = RecordRepo::new(stub);
    let lifecycle = repo.resolve::<Payment>(&derive_key(RecordKind::Payment, &payment_id))?;
    let operation = operation_for(&lifecycle);
    let created_on = match lifecycle {
        Lifecycle::Absent => now,
        Lifecycle::Present(existing) => existing.created_on,
    };

    let detail = PaymentDetail {
        id: free_detail_id(ctx, &repo)?,
        debited_from,
        credited_to,
        total_unit_cost,
        platform_fee,
        token_amount,
        bid_refund_amount,
        platform_fee_refund_amount,
        token_amount_refund: penalty_from_seller,
        penalty_from_seller,
    };
    let detail_key = repo.save(&detail)?;
    log_persisted(operations::CREATE, RecordKind::PaymentDetail, &detail_key);

    let payment = Payment {
        created_on,
        id: payment_id,
        payment_detail_id: detail.id,
        payment_type,
        total_amount,
        user_id,
    };
    let key = repo.save(&payment)?;
    log_persisted(operation, RecordKind::Payment, &key);
    Ok(())
}

/// Draw detail ids until one has no stored record. A detail, once written,
/// is never overwritten.
fn free_detail_id(ctx: &HandlerContext<'_>, repo: &RecordRepo<'_>) -> ChaincodeResult<i64> {
    loop {
        let id = ctx.detail_ids.next_id();
        if !repo.exists(RecordKind::PaymentDetail, id)? {
            return Ok(id);
        }
        trace!(id, "payment detail id taken");
    }
}
