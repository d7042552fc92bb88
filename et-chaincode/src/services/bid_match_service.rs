//! Bid matches

use et_core::{derive_key, BidMatch, EnergyBidStatus, RecordKind, StateStore};
use tracing::debug;

use super::{log_persisted, operation_for, HandlerContext};
use crate::args::Args;
use crate::error::ChaincodeResult;
use crate::repo::RecordRepo;

pub const PROCESS_BID_MATCH_ARGS: usize = 11;

/// `ProcessBidMatch(tms, bidSlot, bidStatus, bidUnitPrice, buyerUserId,
/// deliveredBidUnits, id, originalBidUnits, sellerUserId, txBuyId, txSellId)`
///
/// Bid matches carry no timestamps of their own; an existing match is
/// overwritten field by field.
pub fn process_bid_match(
    _ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "ProcessBidMatch", arg_count = args.len(), "starting ProcessBidMatch");
    let args = Args::expect("ProcessBidMatch", args, PROCESS_BID_MATCH_ARGS)?;

    let bid_match = BidMatch {
        bid_match_tms: args.int(0, "bid match timestamp")?,
        bid_slot: args.text(1).to_string(),
        bid_status: args.code::<EnergyBidStatus>(2, "bid status")?,
        bid_unit_price: args.int(3, "bid unit price")?,
        buyer_user_id: args.int(4, "buyer user id")?,
        delivered_bid_units: args.float(5, "delivered bid units")?,
        id: args.int(6, "bid match id")?,
        original_bid_units: args.float(7, "original bid units")?,
        seller_user_id: args.int(8, "seller user id")?,
        transaction_buy_id: args.int(9, "buy transaction id")?,
        transaction_sell_id: args.int(10, "sell transaction id")?,
    };

    let mut repo = RecordRepo::new(stub);
    let lifecycle = repo.resolve::<BidMatch>(&derive_key(RecordKind::BidMatch, bid_match.id))?;
    let key = repo.save(&bid_match)?;
    log_persisted(operation_for(&lifecycle), RecordKind::BidMatch, &key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChaincodeError;
    use crate::services::testing::{args, Fixture};
    use et_core::{decode, MemoryStateStore};

    fn match_args(status: &str, delivered: &str) -> Vec<String> {
        args(&[
            "1700000000", "Slot1", status, "100", "4", delivered, "1", "3.5", "5", "6", "7",
        ])
    }

    #[test]
    fn test_create_and_overwrite() {
        let fixture = Fixture::new();
        let mut stub = MemoryStateStore::new();

        process_bid_match(&fixture.ctx(), &mut stub, &match_args("0", "2.5")).unwrap();
        process_bid_match(&fixture.ctx(), &mut stub, &match_args("3", "3.5")).unwrap();

        let stored: BidMatch = decode(&stub.get_state("BidMatch_1").unwrap().unwrap()).unwrap();
        assert_eq!(stored.bid_status, EnergyBidStatus::Executed);
        assert_eq!(stored.delivered_bid_units, 3.5);
        assert_eq!(stored.bid_slot, "Slot1");
        assert_eq!(stored.transaction_sell_id, 7);
        assert_eq!(stub.len(), 1);
    }

    #[test]
    fn test_unit_price_is_integer() {
        let fixture = Fixture::new();
        let mut stub = MemoryStateStore::new();

        let mut values = match_args("0", "2.5");
        values[3] = "100.5".to_string();
        let err = process_bid_match(&fixture.ctx(), &mut stub, &values).unwrap_err();
        assert!(matches!(
            err,
            ChaincodeError::Parse {
                field: "bid unit price",
                ..
            }
        ));
    }
}
