use std::fmt::{self, Display};
use std::str::FromStr;

use alloy::primitives::Address;
use num_bigint::BigUint;

use crate::error::Error;

/// A single pricing question: how much `to_token` does `amount_in` of `from_token` buy in `pool`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Pair contract to price against
    pub pool: Address,
    /// Token sold, as given by the caller
    pub from_token: String,
    /// Token bought, as given by the caller
    pub to_token: String,
    /// Amount of `from_token` in its smallest unit
    pub amount_in: BigUint,
}

impl SwapRequest {
    /// Builds a request from its textual form.
    ///
    /// # Errors
    /// * If `pool` is not a 20-byte hex address
    /// * If `amount_in` is not a base-10 unsigned integer
    pub fn parse(
        pool: &str,
        from_token: &str,
        to_token: &str,
        amount_in: &str,
    ) -> Result<Self, Error> {
        let pool = Address::from_str(pool.trim())
            .map_err(|e| Error::Argument(format!("pool {pool:?} is not an address: {e}")))?;

        let amount_in = BigUint::from_str(amount_in.trim()).map_err(|e| {
            Error::Argument(format!("amount {amount_in:?} is not an unsigned integer: {e}"))
        })?;

        Ok(Self {
            pool,
            from_token: from_token.trim().to_string(),
            to_token: to_token.trim().to_string(),
            amount_in,
        })
    }
}

impl Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} @ {}",
            self.amount_in, self.from_token, self.to_token, self.pool
        )
    }
}
