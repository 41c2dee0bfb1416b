use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::PriceError;
use crate::utils::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};

/// Output amount of a constant-product swap with a 0.3% fee taken from the input.
///
/// ```text
/// amount_out = floor(amount_in * 997 * reserve_out / (reserve_in * 1000 + amount_in * 997))
/// ```
///
/// Same integer semantics as `UniswapV2Library.getAmountOut`, without the
/// fixed-width limits: every intermediate is unbounded and the division truncates.
///
/// # Errors
/// * `PriceError::DivisionByZero` if both `amount_in` and `reserve_in` are zero
pub fn get_amount_out(
    amount_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
) -> Result<BigUint, PriceError> {
    let amount_in_with_fee = amount_in * FEE_NUMERATOR;
    let numerator = &amount_in_with_fee * reserve_out;
    let denominator = reserve_in * FEE_DENOMINATOR + &amount_in_with_fee;

    if denominator.is_zero() {
        return Err(PriceError::DivisionByZero);
    }
    Ok(numerator / denominator)
}
