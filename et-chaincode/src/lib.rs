//! Energy Trading Chaincode
//!
//! Implements the chaincode functions on top of the `et-core` record types.
//! Every write function follows the same lifecycle:
//!
//! 1. check arity
//! 2. parse positional arguments strictly
//! 3. derive the record key
//! 4. resolve the key once: absent (create) or present (update)
//! 5. encode and persist
//!
//! Read functions return the stored bytes unchanged.
//!
//! # Usage
//!
//! ```
//! use et_chaincode::{ChaincodeConfig, EnergyTradingChaincode};
//! use et_core::MemoryStateStore;
//!
//! let chaincode = EnergyTradingChaincode::new(ChaincodeConfig::default());
//! let mut stub = MemoryStateStore::new();
//!
//! let args: Vec<String> = ["1", "Prosumer", "Location A", "Meter1", "Solar"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let response = chaincode.invoke(&mut stub, "UpdateUserProfile", &args);
//! assert!(response.is_ok());
//! ```

pub mod args;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ids;
pub mod repo;
pub mod services;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ChaincodeConfig, DetailIdMode};
pub use dispatch::{EnergyTradingChaincode, Function, Response};
pub use error::{ChaincodeError, ChaincodeResult};
pub use ids::{ClockIds, DetailIdSource, SequenceIds};
pub use repo::{Lifecycle, RecordRepo};
