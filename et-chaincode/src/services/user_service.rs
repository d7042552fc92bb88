//! User profiles

use et_core::{derive_key, EnergySource, RecordKind, StateStore, User, UserCategory};
use tracing::debug;

use super::{log_persisted, operation_for, HandlerContext};
use crate::args::Args;
use crate::error::ChaincodeResult;
use crate::repo::{Lifecycle, RecordRepo};

pub const UPDATE_USER_PROFILE_ARGS: usize = 5;

/// `UpdateUserProfile(id, category, location, meterId, source)`
///
/// Creates the user on first call; later calls replace every profile field
/// and keep `createdOn`.
pub fn update_user_profile(
    ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "UpdateUserProfile", arg_count = args.len(), "starting UpdateUserProfile");
    let args = Args::expect("UpdateUserProfile", args, UPDATE_USER_PROFILE_ARGS)?;
    args.sanitize(ctx.config.max_argument_len)?;

    let id = args.int(0, "user id")?;
    let category = args.label::<UserCategory>(1, "user category")?;
    let location = args.text(2).to_string();
    let meter_id = args.text(3).to_string();
    let source = args.label::<EnergySource>(4, "energy source")?;

    let now = ctx.now();
    let mut repo = RecordRepo::new(stub);
    let lifecycle = repo.resolve::<User>(&derive_key(RecordKind::User, id))?;
    let operation = operation_for(&lifecycle);
    let created_on = match lifecycle {
        Lifecycle::Absent => now,
        Lifecycle::Present(existing) => existing.created_on,
    };

    let user = User {
        id,
        category,
        created_on,
        updated_on: now,
        location,
        meter_id,
        source,
    };
    let key = repo.save(&user)?;
    log_persisted(operation, RecordKind::User, &key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChaincodeError;
    use crate::services::testing::{args, Fixture, START};
    use et_core::{decode, MemoryStateStore};

    fn stored_user(stub: &MemoryStateStore, id: i64) -> User {
        let bytes = stub
            .get_state(&derive_key(RecordKind::User, id))
            .unwrap()
            .expect("user stored");
        decode(&bytes).unwrap()
    }

    #[test]
    fn test_create_then_update() {
        let fixture = Fixture::new();
        let mut stub = MemoryStateStore::new();

        update_user_profile(
            &fixture.ctx(),
            &mut stub,
            &args(&["1", "Prosumer", "Location A", "Meter1", "Solar"]),
        )
        .unwrap();
        let created = stored_user(&stub, 1);
        assert_eq!(created.created_on, START);
        assert_eq!(created.updated_on, START);

        fixture.tick();
        update_user_profile(
            &fixture.ctx(),
            &mut stub,
            &args(&["1", "Consumer", "Location B", "Meter2", "DG Set"]),
        )
        .unwrap();
        let updated = stored_user(&stub, 1);
        assert_eq!(updated.created_on, START);
        assert_eq!(updated.updated_on, START + 1);
        assert_eq!(updated.category, UserCategory::Consumer);
        assert_eq!(updated.location, "Location B");
        assert_eq!(updated.meter_id, "Meter2");
        assert_eq!(updated.source, EnergySource::DieselGenerator);
    }

    #[test]
    fn test_unknown_category() {
        let fixture = Fixture::new();
        let mut stub = MemoryStateStore::new();

        let err = update_user_profile(
            &fixture.ctx(),
            &mut stub,
            &args(&["1", "Producer", "Location A", "Meter1", "Solar"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChaincodeError::UnknownDomainValue {
                field: "user category",
                ..
            }
        ));
        assert!(stub.is_empty());
    }

    #[test]
    fn test_malformed_existing_user() {
        let fixture = Fixture::new();
        let mut stub = MemoryStateStore::new();
        stub.put_state("User_1", b"garbage".to_vec()).unwrap();

        let err = update_user_profile(
            &fixture.ctx(),
            &mut stub,
            &args(&["1", "Prosumer", "Location A", "Meter1", "Solar"]),
        )
        .unwrap_err();
        assert!(matches!(err, ChaincodeError::MalformedRecord { .. }));
        assert_eq!(stub.get_state("User_1").unwrap(), Some(b"garbage".to_vec()));
    }
}
