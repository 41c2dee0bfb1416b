//! # Quote Module
//!
//! Prices a single swap against a single pool: request parsing, the
//! constant-product formula, and the pipeline tying them to the pool reader.

/// Request validation, reserve selection and pricing
pub mod calculator;
/// Constant-product pricing formula
pub mod pricer;
/// Swap request
pub mod request;
/// Test helpers and fakes
#[cfg(test)]
#[allow(clippy::unwrap_used, missing_docs, clippy::missing_docs_in_private_items)]
pub(crate) mod test_helpers;

pub use calculator::calculate_output_amount;
pub use pricer::get_amount_out;
pub use request::SwapRequest;
