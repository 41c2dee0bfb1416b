use std::path::Path;

use alloy::dyn_abi::{DynSolValue, FunctionExt};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::Bytes;

use crate::error::{Error, PoolCall};

/// The subset of the Uniswap V2 pair ABI needed to read a pool.
///
/// Loaded at runtime from a JSON ABI descriptor so that forks with the same
/// method names but different output layouts can be read by swapping the file.
#[derive(Debug, Clone)]
pub struct PairAbi {
    /// `getReserves() returns (uint112, uint112, uint32)`
    get_reserves: Function,
    /// `token0() returns (address)`
    token0: Function,
    /// `token1() returns (address)`
    token1: Function,
}

impl PairAbi {
    /// Reads and parses the ABI descriptor at `path`.
    ///
    /// # Errors
    /// * If the file can't be read
    /// * If it is not a JSON ABI or lacks one of the pair methods
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read ABI file {}: {e}", path.display()))
        })?;
        Self::from_json(&json).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{msg} in {}", path.display())),
            other => other,
        })
    }

    /// Parses a JSON ABI descriptor.
    ///
    /// # Errors
    /// * If `json` is not a JSON ABI
    /// * If `getReserves`, `token0` or `token1` is missing
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("failed to parse ABI: {e}")))?;

        Ok(Self {
            get_reserves: Self::method(&abi, PoolCall::Reserves)?,
            token0: Self::method(&abi, PoolCall::Token0)?,
            token1: Self::method(&abi, PoolCall::Token1)?,
        })
    }

    /// Picks the zero-argument overload of a method.
    fn method(abi: &JsonAbi, call: PoolCall) -> Result<Function, Error> {
        abi.function(call.method())
            .and_then(|overloads| overloads.iter().find(|f| f.inputs.is_empty()))
            .cloned()
            .ok_or_else(|| {
                Error::Config(format!("ABI has no zero-argument {} method", call.method()))
            })
    }

    /// The ABI entry backing `call`.
    #[must_use]
    pub const fn function(&self, call: PoolCall) -> &Function {
        match call {
            PoolCall::Reserves => &self.get_reserves,
            PoolCall::Token0 => &self.token0,
            PoolCall::Token1 => &self.token1,
        }
    }

    /// Calldata for `call`: just the 4-byte selector, none of the methods take arguments.
    #[must_use]
    pub fn calldata(&self, call: PoolCall) -> Bytes {
        Bytes::from(self.function(call).selector().to_vec())
    }

    /// Decodes the raw return data of `call` against its declared outputs.
    ///
    /// # Errors
    /// * If the data doesn't match the output types
    pub fn decode(&self, call: PoolCall, data: &[u8]) -> Result<Vec<DynSolValue>, Error> {
        self.function(call)
            .abi_decode_output(data, true)
            .map_err(|e| Error::Decode {
                call,
                reason: e.to_string(),
            })
    }
}
