//! Application context for a quoting session.
//!
//! Holds the node connection, the pair ABI and the configuration it was
//! built from, so that a quote needs nothing but a `SwapRequest`.

use alloy::{
    network::Ethereum,
    providers::{Provider, ProviderBuilder, RootProvider},
};
use log::info;
use num_bigint::BigUint;
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::pool::PairAbi;
use crate::quote::{calculate_output_amount, SwapRequest};

/// Everything needed to quote swaps against one node.
pub struct AppContext {
    /// Remote node connection over HTTP(S)
    pub provider: RootProvider<Ethereum>,
    /// Pair ABI used to encode calls and decode their results
    pub abi: PairAbi,
    /// Settings the context was built from
    pub config: Config,
}

impl AppContext {
    /// Loads the ABI descriptor, then connects to the node.
    ///
    /// # Errors
    /// * `Error::Config` if the ABI descriptor can't be loaded
    /// * `Error::Connection` if the node URL is invalid or the node doesn't answer
    pub async fn new(config: Config) -> Result<Self, Error> {
        let abi = PairAbi::load(&config.abi_path)?;
        let provider = Self::remote(&config).await?;
        Ok(Self {
            provider,
            abi,
            config,
        })
    }

    /// Creates an HTTP provider and checks the node answers `eth_chainId`.
    ///
    /// # Errors
    /// * If URL parsing fails
    /// * If the node doesn't answer within the call timeout
    pub async fn remote(config: &Config) -> Result<RootProvider<Ethereum>, Error> {
        let url = Url::parse(&config.rpc_url)
            .map_err(|e| Error::Connection(format!("invalid RPC URL: {e}")))?;
        let provider = ProviderBuilder::new().on_http(url);
        let provider = (*provider.root()).clone();

        let chain_id = tokio::time::timeout(config.call_timeout, provider.get_chain_id())
            .await
            .map_err(|_| {
                Error::Connection(format!("no answer within {:?}", config.call_timeout))
            })?
            .map_err(|e| Error::Connection(e.to_string()))?;

        info!("Connected to chain {chain_id}");
        Ok(provider)
    }

    /// Quotes `request` against the connected node.
    ///
    /// # Errors
    /// * See [`calculate_output_amount`]
    pub async fn quote(&self, request: &SwapRequest) -> Result<BigUint, Error> {
        calculate_output_amount(&self.provider, &self.abi, self.config.call_timeout, request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;

    fn config(rpc_url: &str, abi_path: &str) -> Config {
        Config {
            rpc_url: rpc_url.to_string(),
            abi_path: PathBuf::from(abi_path),
            call_timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn test_missing_abi_is_config_error() {
        let result = AppContext::new(config("http://127.0.0.1:1", "missing/pair.json")).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_bad_url_is_connection_error() {
        let result = AppContext::new(config(
            "not a url",
            crate::utils::constants::DEFAULT_ABI_PATH,
        ))
        .await;
        assert!(matches!(result, Err(Error::Connection(_))));
    }

    #[tokio::test]
    async fn test_unreachable_node_is_connection_error() {
        // Nothing listens on port 1
        let result = AppContext::new(config(
            "http://127.0.0.1:1",
            crate::utils::constants::DEFAULT_ABI_PATH,
        ))
        .await;
        assert!(matches!(result, Err(Error::Connection(_))));
    }
}
