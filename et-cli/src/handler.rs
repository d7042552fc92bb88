//! Command Handlers

use std::collections::BTreeMap;

use et_chaincode::{ChaincodeConfig, EnergyTradingChaincode};
use et_core::{split_key, RecordKind};
use tracing::info;

use crate::commands::{Cli, Commands, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::file_store::FileStateStore;
use crate::output;

/// Run the CLI with parsed arguments
pub fn run(cli: Cli, config: ChaincodeConfig) -> CliResult<()> {
    let out = match cli.command {
        Commands::Init => handle_init(&cli.state, config)?,
        Commands::Invoke { function, args } => {
            handle_invoke(&cli.state, config, &function, &args, cli.format)?
        }
        Commands::Keys { kind } => handle_keys(&cli.state, kind.as_deref(), cli.format)?,
    };
    println!("{}", out);
    Ok(())
}

/// Run chaincode Init; create the ledger file if it does not exist yet.
pub fn handle_init(path: &std::path::Path, config: ChaincodeConfig) -> CliResult<String> {
    let mut store = FileStateStore::load(path)?;
    let chaincode = EnergyTradingChaincode::new(config);

    let response = chaincode.init(&mut store);
    if !response.is_ok() {
        return Err(CliError::config(response.message));
    }
    if !path.exists() {
        store.flush()?;
        info!(path = %path.display(), "ledger created");
    }
    Ok(format!("Ledger ready at {} ({} keys)", path.display(), store.len()))
}

/// Invoke one function. The ledger file is rewritten only on success.
pub fn handle_invoke(
    path: &std::path::Path,
    config: ChaincodeConfig,
    function: &str,
    args: &[String],
    format: OutputFormat,
) -> CliResult<String> {
    let mut store = FileStateStore::load(path)?;
    let chaincode = EnergyTradingChaincode::new(config);

    let payload = chaincode.execute(&mut store, function, args)?;
    if store.is_dirty() {
        store.flush()?;
    }
    Ok(output::render_invoke(function, payload.as_deref(), format))
}

/// List keys grouped by record kind, optionally restricted to one kind.
pub fn handle_keys(
    path: &std::path::Path,
    kind: Option<&str>,
    format: OutputFormat,
) -> CliResult<String> {
    let filter = kind
        .map(|name| {
            RecordKind::from_str(name)
                .ok_or_else(|| CliError::invalid_arg(format!("unknown record kind '{}'", name)))
        })
        .transpose()?;

    let store = FileStateStore::load(path)?;
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for key in store.keys() {
        let group = match split_key(key) {
            Some((kind, _)) => {
                if filter.is_some_and(|wanted| wanted != kind) {
                    continue;
                }
                kind.to_string()
            }
            None if filter.is_some() => continue,
            None => "Other".to_string(),
        };
        groups.entry(group).or_default().push(key.to_string());
    }
    Ok(output::render_keys(&groups, format))
}
