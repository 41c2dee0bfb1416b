//! Runtime configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary) and can be overridden from the command line.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;
use crate::utils::constants::{
    ABI_PATH_VAR, CALL_TIMEOUT_VAR, DEFAULT_ABI_PATH, DEFAULT_CALL_TIMEOUT, RPC_URL_VAR,
};

/// Settings needed to quote a swap against a live node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON-RPC endpoint of the node
    pub rpc_url: String,
    /// Location of the pair ABI descriptor
    pub abi_path: PathBuf,
    /// Deadline applied to each contract call
    pub call_timeout: Duration,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    /// * If `PAIRQUOTE_RPC_URL` is not set
    /// * If `PAIRQUOTE_CALL_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// * If the RPC URL is missing
    /// * If the timeout is not a positive integer
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup(RPC_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{RPC_URL_VAR} must be set")))?;

        let abi_path =
            lookup(ABI_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_ABI_PATH), PathBuf::from);

        let call_timeout = match lookup(CALL_TIMEOUT_VAR) {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_CALL_TIMEOUT,
        };

        Ok(Self {
            rpc_url,
            abi_path,
            call_timeout,
        })
    }
}

/// Parses a whole number of seconds, rejecting zero.
///
/// # Errors
/// * If `raw` is not a positive integer
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, Error> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "{CALL_TIMEOUT_VAR} must be a positive number of seconds, got {raw:?}"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
