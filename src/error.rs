use std::fmt::{self, Display};
use std::time::Duration;

use alloy::primitives::Address;
use thiserror::Error;

/// One of the three read-only calls made against a pool contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolCall {
    /// `getReserves()`
    Reserves,
    /// `token0()`
    Token0,
    /// `token1()`
    Token1,
}

impl PoolCall {
    /// Name of the contract method backing this call.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Reserves => "getReserves",
            Self::Token0 => "token0",
            Self::Token1 => "token1",
        }
    }
}

impl Display for PoolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserves => write!(f, "reserves"),
            Self::Token0 => write!(f, "token0"),
            Self::Token1 => write!(f, "token1"),
        }
    }
}

/// Why a pool call did not produce a response.
#[derive(Debug, Error)]
pub enum CallFailure {
    /// The call did not finish within its deadline
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// The node or transport returned an error
    #[error("{0}")]
    Rpc(String),
}

/// Failure of the constant-product pricing formula.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// `reserve_in * 1000 + amount_in * 997` is zero
    #[error("Price error - division by zero")]
    DivisionByZero,
}

/// Everything that can go wrong while quoting a swap.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command-line input
    #[error("invalid argument: {0}")]
    Argument(String),

    /// ABI descriptor or environment configuration could not be loaded
    #[error("can't load configuration: {0}")]
    Config(String),

    /// The node could not be reached
    #[error("can't connect to Ethereum client: {0}")]
    Connection(String),

    /// A pool call failed or timed out
    #[error("can't call contract ({call}): {source}")]
    Call {
        /// Which call failed
        call: PoolCall,
        /// What went wrong
        #[source]
        source: CallFailure,
    },

    /// A pool call returned data of an unexpected shape
    #[error("can't decode {call} output: {reason}")]
    Decode {
        /// Which call returned the data
        call: PoolCall,
        /// Decoder message
        reason: String,
    },

    /// A requested token is neither token0 nor token1 of the pool
    #[error("token {token} is not in the pool {pool}")]
    TokenNotInPool {
        /// Token as given by the caller
        token: String,
        /// Pool that was queried
        pool: Address,
    },

    /// Input and output token are the same
    #[error("from and to token are both {token}")]
    IdenticalTokens {
        /// Token as given by the caller
        token: String,
    },

    /// Pricing formula failure
    #[error(transparent)]
    Arithmetic(#[from] PriceError),
}

impl Error {
    /// The pool call this error originated from, if any.
    #[must_use]
    pub const fn call(&self) -> Option<PoolCall> {
        match self {
            Self::Call { call, .. } | Self::Decode { call, .. } => Some(*call),
            _ => None,
        }
    }

    /// Whether this is a call that hit its deadline.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Call {
                source: CallFailure::Timeout(_),
                ..
            }
        )
    }
}
