//! Orders

use et_core::{derive_key, Action, EnergyBidStatus, Order, RecordKind, StateStore};
use tracing::debug;

use super::{log_persisted, operation_for, HandlerContext};
use crate::args::Args;
use crate::error::{ChaincodeError, ChaincodeResult};
use crate::repo::{Lifecycle, RecordRepo};

pub const REGISTER_ORDER_ARGS: usize = 12;

/// `RegisterOrder(bidMatchId, bidStatus, orderId, onMarketPrice, orderCost,
/// paymentId, slotId, totalQuantity, unitCost, userId, slotExecDate, action)`
///
/// Status and action are integer codes. A new order must start as
/// `BidCreated` or `BidAccepted`; an existing one may move to any status.
pub fn register_order(
    ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "RegisterOrder", arg_count = args.len(), "starting RegisterOrder");
    let args = Args::expect("RegisterOrder", args, REGISTER_ORDER_ARGS)?;

    let bid_match_id = args.int(0, "bid match id")?;
    let bid_status = args.code::<EnergyBidStatus>(1, "bid status")?;
    let id = args.int(2, "order id")?;
    let on_market_price = args.text(3).to_string();
    let order_cost = args.float(4, "order cost")?;
    let payment_id = args.int(5, "payment id")?;
    let slot_id = args.text(6).to_string();
    let total_quantity = args.int(7, "total quantity")?;
    let unit_cost = args.float(8, "unit cost")?;
    let user_id = args.int(9, "user id")?;
    let slot_exec_date = args.int(10, "slot exec date")?;
    let user_action = args.code::<Action>(11, "action")?;

    let now = ctx.now();
    let mut repo = RecordRepo::new(stub);
    let lifecycle = repo.resolve::<Order>(&derive_key(RecordKind::Order, id))?;
    let operation = operation_for(&lifecycle);
    let created_on = match lifecycle {
        Lifecycle::Absent if !bid_status.is_initial() => {
            return Err(ChaincodeError::InvalidInitialState {
                order_id: id,
                status: bid_status,
            });
        }
        Lifecycle::Absent => now,
        Lifecycle::Present(existing) => existing.created_on,
    };

    let order = Order {
        bid_match_id,
        bid_status,
        created_on,
        id,
        on_market_price,
        order_cost,
        payment_id,
        slot_id,
        slot_exec_date,
        total_quantity,
        unit_cost,
        updated_on: now,
        user_action,
        user_id,
    };
    let key = repo.save(&order)?;
    log_persisted(operation, RecordKind::Order, &key);
    Ok(())
}
