//! Platform contracts

use et_core::{derive_key, PlatformContract, RecordKind, StateStore};
use tracing::debug;

use super::{log_persisted, operation_for, HandlerContext};
use crate::args::Args;
use crate::error::{ChaincodeError, ChaincodeResult};
use crate::repo::{Lifecycle, RecordRepo};

pub const SIGN_PLATFORM_CONTRACT_ARGS: usize = 1;

/// `SignPlatformContract(userId)`: the user must already have a profile.
pub fn sign_platform_contract(
    ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "SignPlatformContract", arg_count = args.len(), "starting SignPlatformContract");
    let args = Args::expect("SignPlatformContract", args, SIGN_PLATFORM_CONTRACT_ARGS)?;
    let user_id = args.int(0, "user id")?;

    let now = ctx.now();
    let mut repo = RecordRepo::new(stub);
    if !repo.exists(RecordKind::User, user_id)? {
        return Err(ChaincodeError::ReferenceNotFound {
            kind: RecordKind::User,
            id: user_id.to_string(),
        });
    }

    let lifecycle =
        repo.resolve::<PlatformContract>(&derive_key(RecordKind::PlatformContract, user_id))?;
    let operation = operation_for(&lifecycle);
    let created_on = match lifecycle {
        Lifecycle::Absent => now,
        Lifecycle::Present(existing) => existing.created_on,
    };

    let contract = PlatformContract {
        user_id,
        created_on,
        updated_on: now,
    };
    let key = repo.save(&contract)?;
    log_persisted(operation, RecordKind::PlatformContract, &key);
    Ok(())
}
