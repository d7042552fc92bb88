//! Chaincode configuration
//!
//! Loaded from environment variables with the `ET_` prefix. Unset or
//! unparseable values fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

use et_core::logging::LogLevel;

use crate::args::DEFAULT_MAX_ARGUMENT_LEN;
use crate::clock::Clock;
use crate::ids::{ClockIds, DetailIdSource, SequenceIds};

/// How payment detail ids are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailIdMode {
    /// Nanosecond timestamps, forced strictly increasing
    Clock,
    /// Counter starting at `detail_id_start`
    Sequence,
}

impl Default for DetailIdMode {
    fn default() -> Self {
        Self::Clock
    }
}

impl DetailIdMode {
    /// Parse from string (for environment variables)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clock" | "time" => Some(Self::Clock),
            "sequence" | "seq" => Some(Self::Sequence),
            _ => None,
        }
    }
}

/// Chaincode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    /// Maximum byte length of a sanitized argument
    pub max_argument_len: usize,
    pub detail_id_mode: DetailIdMode,
    /// First id handed out in sequence mode
    pub detail_id_start: i64,
    pub log_level: LogLevel,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            max_argument_len: DEFAULT_MAX_ARGUMENT_LEN,
            detail_id_mode: DetailIdMode::default(),
            detail_id_start: 1,
            log_level: LogLevel::default(),
        }
    }
}

impl ChaincodeConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            max_argument_len: lookup("ET_MAX_ARG_LEN")
                .and_then(|v| v.parse().ok())
                .filter(|len: &usize| *len > 0)
                .unwrap_or(defaults.max_argument_len),
            detail_id_mode: lookup("ET_DETAIL_ID_MODE")
                .and_then(|v| DetailIdMode::from_str(&v))
                .unwrap_or(defaults.detail_id_mode),
            detail_id_start: lookup("ET_DETAIL_ID_START")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.detail_id_start),
            log_level: lookup("ET_LOG_LEVEL")
                .and_then(|v| LogLevel::from_str(&v))
                .unwrap_or(defaults.log_level),
        }
    }

    /// Build the detail id source selected by this configuration
    pub fn detail_id_source(&self, clock: Arc<dyn Clock>) -> Arc<dyn DetailIdSource> {
        match self.detail_id_mode {
            DetailIdMode::Clock => Arc::new(ClockIds::new(clock)),
            DetailIdMode::Sequence => Arc::new(SequenceIds::starting_at(self.detail_id_start)),
        }
    }
}
