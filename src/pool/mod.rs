//! # Pool Module
//!
//! Reads a Uniswap V2 style pair contract: its two tokens and current reserves.

/// Pair ABI descriptor
pub mod abi;
/// Read-only calls against a pair contract
pub mod accessor;
/// Pool snapshot types
pub mod state;

pub use abi::PairAbi;
pub use accessor::{fetch_pool_state, ReadOnlyCaller};
pub use state::{PoolState, Reserves};
