//! Invocation dispatch
//!
//! Maps a function name to its handler and turns handler results into
//! shim-style responses.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use et_core::StateStore;
use serde::Serialize;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::ChaincodeConfig;
use crate::error::{ChaincodeError, ChaincodeResult};
use crate::ids::DetailIdSource;
use crate::services::{self, read, HandlerContext};

/// Response status for a successful invocation
pub const OK: i32 = 200;
/// Response status for a failed invocation
pub const ERROR: i32 = 500;

/// Chaincode functions accepted by [`EnergyTradingChaincode::invoke`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Write,
    UpdateUserProfile,
    SignPlatformContract,
    RecordPayment,
    RegisterOrder,
    ProcessBidMatch,
    ReadUserProfile,
    ReadPlatformContract,
    ReadPayment,
    ReadPaymentDetail,
    ReadOrder,
    ReadBidMatch,
}

impl Function {
    pub const ALL: [Function; 12] = [
        Function::Write,
        Function::UpdateUserProfile,
        Function::SignPlatformContract,
        Function::RecordPayment,
        Function::RegisterOrder,
        Function::ProcessBidMatch,
        Function::ReadUserProfile,
        Function::ReadPlatformContract,
        Function::ReadPayment,
        Function::ReadPaymentDetail,
        Function::ReadOrder,
        Function::ReadBidMatch,
    ];

    /// Invocation name, matched case-sensitively
    pub fn name(&self) -> &'static str {
        match self {
            Self::Write => "Write",
            Self::UpdateUserProfile => "UpdateUserProfile",
            Self::SignPlatformContract => "SignPlatformContract",
            Self::RecordPayment => "RecordPayment",
            Self::RegisterOrder => "RegisterOrder",
            Self::ProcessBidMatch => "ProcessBidMatch",
            Self::ReadUserProfile => "ReadUserProfile",
            Self::ReadPlatformContract => "ReadPlatformContract",
            Self::ReadPayment => "ReadPayment",
            Self::ReadPaymentDetail => "ReadPaymentDetail",
            Self::ReadOrder => "ReadOrder",
            Self::ReadBidMatch => "ReadBidMatch",
        }
    }

}

impl FromStr for Function {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| ChaincodeError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one invocation, as handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<u8>>,
}

impl Response {
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == OK
    }
}

/// The energy trading chaincode
pub struct EnergyTradingChaincode {
    config: ChaincodeConfig,
    clock: Arc<dyn Clock>,
    detail_ids: Arc<dyn DetailIdSource>,
}

impl EnergyTradingChaincode {
    /// Chaincode on the system clock, with the detail id source the
    /// configuration selects
    pub fn new(config: ChaincodeConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let detail_ids = config.detail_id_source(clock.clone());
        Self::with_sources(config, clock, detail_ids)
    }

    pub fn with_sources(
        config: ChaincodeConfig,
        clock: Arc<dyn Clock>,
        detail_ids: Arc<dyn DetailIdSource>,
    ) -> Self {
        Self {
            config,
            clock,
            detail_ids,
        }
    }

    /// Chaincode instantiation. Nothing to set up.
    pub fn init(&self, _stub: &mut dyn StateStore) -> Response {
        debug!("chaincode init");
        Response::success(None)
    }

    /// Legacy query entry point, not supported
    pub fn query(&self, _stub: &mut dyn StateStore) -> Response {
        Response::error("Unknown supported call - Query()")
    }

    /// Run `function` and report the outcome as a [`Response`].
    pub fn invoke(&self, stub: &mut dyn StateStore, function: &str, args: &[String]) -> Response {
        match self.execute(stub, function, args) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                warn!(function, code = e.code(), error = %e, "invocation failed");
                Response::error(e.to_string())
            }
        }
    }

    /// Run `function`, returning the read payload if it produces one.
    pub fn execute(
        &self,
        stub: &mut dyn StateStore,
        function: &str,
        args: &[String],
    ) -> ChaincodeResult<Option<Vec<u8>>> {
        debug!(function, arg_count = args.len(), "starting invoke");
        let function: Function = function.parse()?;
        let ctx = HandlerContext {
            config: &self.config,
            clock: self.clock.as_ref(),
            detail_ids: self.detail_ids.as_ref(),
        };

        match function {
            Function::Write => services::write(&ctx, stub, args).map(|()| None),
            Function::UpdateUserProfile => {
                services::update_user_profile(&ctx, stub, args).map(|()| None)
            }
            Function::SignPlatformContract => {
                services::sign_platform_contract(&ctx, stub, args).map(|()| None)
            }
            Function::RecordPayment => services::record_payment(&ctx, stub, args).map(|()| None),
            Function::RegisterOrder => services::register_order(&ctx, stub, args).map(|()| None),
            Function::ProcessBidMatch => {
                services::process_bid_match(&ctx, stub, args).map(|()| None)
            }
            Function::ReadUserProfile => read::read_user_profile(stub, args).map(Some),
            Function::ReadPlatformContract => read::read_platform_contract(stub, args).map(Some),
            Function::ReadPayment => read::read_payment(stub, args).map(Some),
            Function::ReadPaymentDetail => read::read_payment_detail(stub, args).map(Some),
            Function::ReadOrder => read::read_order(stub, args).map(Some),
            Function::ReadBidMatch => read::read_bid_match(stub, args).map(Some),
        }
    }
}

impl fmt::Debug for EnergyTradingChaincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnergyTradingChaincode")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
