use std::time::Duration;

use log::info;
use num_bigint::BigUint;

use super::pricer::get_amount_out;
use super::request::SwapRequest;
use crate::error::Error;
use crate::pool::{fetch_pool_state, PairAbi, ReadOnlyCaller};

/// Quotes `request` against the live state of its pool.
///
/// Reads the pool, checks both tokens belong to it, orients the reserves by
/// swap direction and applies the constant-product formula.
///
/// # Errors
/// * `Error::Call` / `Error::Decode` if the pool can't be read
/// * `Error::TokenNotInPool` if either token isn't one of the pool's tokens
/// * `Error::IdenticalTokens` if both tokens are the same
/// * `Error::Arithmetic` if the pricing formula is undefined for the reserves
pub async fn calculate_output_amount<C: ReadOnlyCaller>(
    caller: &C,
    abi: &PairAbi,
    timeout: Duration,
    request: &SwapRequest,
) -> Result<BigUint, Error> {
    let pool = fetch_pool_state(caller, abi, request.pool, timeout).await?;
    let (reserve_in, reserve_out) = pool.reserves_for(&request.from_token, &request.to_token)?;

    let amount_out = get_amount_out(&request.amount_in, &reserve_in, &reserve_out)?;
    info!("quote: {request} = {amount_out} (reserves {reserve_in} / {reserve_out})");
    Ok(amount_out)
}
