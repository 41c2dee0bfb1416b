/*!
 * # Pairquote - Constant-Product Swap Quotes
 *
 * Pairquote answers one question: given a Uniswap V2 style pair, an input token,
 * an output token and an input amount, how much of the output token would the
 * swap return right now.
 *
 * ## Module Structure
 *
 * - `config`: Configuration from the environment
 * - `error`: Error taxonomy
 * - `pool`: Reading tokens and reserves from a pair contract
 * - `quote`: Request validation and the pricing formula
 * - `utils`: Application context, constants and logging
 */

/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Pair contract reader
pub mod pool;
/// Swap pricing
pub mod quote;
/// Utility functions and helpers
pub mod utils;

pub use error::{Error, PoolCall, PriceError};
