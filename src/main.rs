use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{error, info};

use pairquote::config::{parse_timeout_secs, Config};
use pairquote::quote::SwapRequest;
use pairquote::utils::app_context::AppContext;
use pairquote::utils::logger::setup_logger;

/// Quote a swap on a Uniswap V2 style pair.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address of the pair contract
    pool: String,
    /// Address of the token sold
    from_token: String,
    /// Address of the token bought
    to_token: String,
    /// Amount sold, in the token's smallest unit
    amount: String,
    /// JSON-RPC endpoint, overrides `PAIRQUOTE_RPC_URL`
    #[arg(long)]
    rpc_url: Option<String>,
    /// Pair ABI descriptor, overrides `PAIRQUOTE_ABI_PATH`
    #[arg(long)]
    abi: Option<PathBuf>,
    /// Per-call timeout in seconds, overrides `PAIRQUOTE_CALL_TIMEOUT_SECS`
    #[arg(long)]
    timeout_secs: Option<String>,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn config(&self) -> Result<Config> {
        let rpc_url = self.rpc_url.clone();
        let mut config = Config::from_lookup(|key| {
            if key == pairquote::utils::constants::RPC_URL_VAR && rpc_url.is_some() {
                return rpc_url.clone();
            }
            std::env::var(key).ok()
        })?;

        if let Some(abi) = &self.abi {
            config.abi_path.clone_from(abi);
        }
        if let Some(raw) = &self.timeout_secs {
            config.call_timeout = parse_timeout_secs(raw)?;
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let request = SwapRequest::parse(&cli.pool, &cli.from_token, &cli.to_token, &cli.amount)?;
    let config = cli.config()?;

    let ctx = AppContext::new(config).await?;
    let amount_out = ctx
        .quote(&request)
        .await
        .wrap_err_with(|| format!("can't quote {request}"))?;

    info!("Output amount is {amount_out}");
    println!("{amount_out}");
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if let Err(e) = setup_logger() {
        eprintln!("Failed to set up logger: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}
