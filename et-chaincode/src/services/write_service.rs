//! Raw passthrough write

use et_core::logging::operations;
use et_core::StateStore;
use tracing::{debug, info};

use super::HandlerContext;
use crate::args::Args;
use crate::error::ChaincodeResult;

pub const WRITE_ARGS: usize = 2;

/// `Write(key, value)`: store `value` at `key` verbatim.
///
/// No record kind or encoding is imposed; the key may lie inside a record
/// namespace.
pub fn write(
    ctx: &HandlerContext<'_>,
    stub: &mut dyn StateStore,
    args: &[String],
) -> ChaincodeResult<()> {
    debug!(function = "Write", arg_count = args.len(), "starting Write");
    let args = Args::expect("Write", args, WRITE_ARGS)?;
    args.sanitize(ctx.config.max_argument_len)?;

    let key = args.text(0);
    stub.put_state(key, args.text(1).as_bytes().to_vec())?;

    info!(operation = operations::WRITE, key = %key, "value written");
    Ok(())
}
