use std::time::Duration;

/// Fee multiplier applied to the input amount (0.3% fee)
pub const FEE_NUMERATOR: u32 = 997;
/// Denominator of the fee fraction
pub const FEE_DENOMINATOR: u32 = 1000;

/// Upper bound for a single read-only call against the node
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Pair ABI shipped with the crate
pub const DEFAULT_ABI_PATH: &str = "contracts/abi/IUniswapV2Pair.json";

/// Environment variable holding the node's JSON-RPC endpoint
pub const RPC_URL_VAR: &str = "PAIRQUOTE_RPC_URL";
/// Environment variable overriding the ABI path
pub const ABI_PATH_VAR: &str = "PAIRQUOTE_ABI_PATH";
/// Environment variable overriding the per-call timeout, in seconds
pub const CALL_TIMEOUT_VAR: &str = "PAIRQUOTE_CALL_TIMEOUT_SECS";
