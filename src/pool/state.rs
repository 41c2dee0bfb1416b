use std::fmt::{self, Display};

use alloy::primitives::{Address, U256};
use num_bigint::BigUint;

use crate::error::Error;

/// Reserves as returned by `getReserves()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    /// Reserve of token0
    pub reserve0: U256,
    /// Reserve of token1
    pub reserve1: U256,
    /// Timestamp of the block the reserves were last updated in
    pub block_timestamp_last: u32,
}

/// Snapshot of a pair contract: its two tokens and their reserves.
///
/// The three values come from separate calls and aren't guaranteed to
/// belong to the same block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    /// Address of the pair contract
    pub address: Address,
    /// First token of the pair
    pub token0: Address,
    /// Second token of the pair
    pub token1: Address,
    /// Reserves of token0 and token1
    pub reserves: Reserves,
}

impl Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool({}, {} {} / {} {})",
            self.address,
            self.reserves.reserve0,
            self.token0,
            self.reserves.reserve1,
            self.token1
        )
    }
}

impl PoolState {
    /// Whether `token` names token0, compared case-insensitively on its hex form.
    #[must_use]
    pub fn is_token0(&self, token: &str) -> bool {
        same_token(token, self.token0)
    }

    /// Whether `token` names token1, compared case-insensitively on its hex form.
    #[must_use]
    pub fn is_token1(&self, token: &str) -> bool {
        same_token(token, self.token1)
    }

    /// Whether `token` is one of the pool's two tokens.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.is_token0(token) || self.is_token1(token)
    }

    /// Returns `(reserve_in, reserve_out)` for a swap from `from` to `to`.
    ///
    /// # Errors
    /// * If either token isn't in the pool, `from` being checked first
    /// * If `from` and `to` are the same token
    pub fn reserves_for(&self, from: &str, to: &str) -> Result<(BigUint, BigUint), Error> {
        for token in [from, to] {
            if !self.contains(token) {
                return Err(Error::TokenNotInPool {
                    token: token.to_string(),
                    pool: self.address,
                });
            }
        }

        if from.trim().eq_ignore_ascii_case(to.trim()) {
            return Err(Error::IdenticalTokens {
                token: from.to_string(),
            });
        }

        let reserve0 = to_biguint(self.reserves.reserve0);
        let reserve1 = to_biguint(self.reserves.reserve1);
        if self.is_token0(from) {
            Ok((reserve0, reserve1))
        } else {
            Ok((reserve1, reserve0))
        }
    }
}

/// Compares a caller-supplied token string against an on-chain address.
fn same_token(token: &str, address: Address) -> bool {
    token.trim().eq_ignore_ascii_case(&address.to_string())
}

/// Widens an on-chain `U256` to an unbounded integer.
#[must_use]
pub fn to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}
