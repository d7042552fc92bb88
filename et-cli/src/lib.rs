//! ET CLI - Command Line Host
//!
//! Runs the energy trading chaincode against a ledger kept in a local JSON
//! file. Each invocation loads the file, runs one chaincode function and
//! writes the file back only if the function succeeded.
//!
//! # Usage
//!
//! ```text
//! et [OPTIONS] <COMMAND>
//!
//! Commands:
//!   init     Run chaincode Init and create the ledger file
//!   invoke   Invoke a chaincode function
//!   keys     List stored keys by record kind
//!
//! Options:
//!   -s, --state <PATH>     Ledger file [env: ET_STATE_FILE] [default: ledger.json]
//!   -f, --format <FORMAT>  Output format (json, plain) [default: plain]
//!   -v, --verbose          Enable tracing output
//! ```
//!
//! # Examples
//!
//! ```text
//! et invoke UpdateUserProfile 1 Prosumer "Location A" Meter1 Solar
//! et invoke ReadUserProfile 1
//! et keys --kind order
//! ```

pub mod commands;
pub mod error;
pub mod file_store;
pub mod handler;
pub mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};
pub use file_store::FileStateStore;
