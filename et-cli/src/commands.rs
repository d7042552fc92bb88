//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Energy trading chaincode CLI
#[derive(Parser, Debug)]
#[command(name = "et")]
#[command(version)]
#[command(about = "Energy trading chaincode command line host")]
#[command(long_about = "Runs energy trading chaincode functions against a local ledger file.\n\n\
    The ledger file is only rewritten when an invocation succeeds.")]
pub struct Cli {
    /// Ledger file (env: ET_STATE_FILE)
    #[arg(short, long, env = "ET_STATE_FILE", default_value = "ledger.json")]
    pub state: PathBuf,

    /// Output format (json, plain)
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text
    Plain,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Plain
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run chaincode Init and create an empty ledger file if none exists
    Init,

    /// Invoke a chaincode function
    Invoke {
        /// Function name, e.g. RegisterOrder
        function: String,

        /// Positional arguments passed to the function
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List stored keys grouped by record kind
    Keys {
        /// Only list keys of this kind (user, order, payment, ...)
        #[arg(short, long)]
        kind: Option<String>,
    },
}
