use std::future::Future;
use std::time::Duration;

use alloy::dyn_abi::DynSolValue;
use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::TransactionRequest;
use log::{debug, info};

use super::abi::PairAbi;
use super::state::{PoolState, Reserves};
use crate::error::{CallFailure, Error, PoolCall};

/// Something that can run a read-only contract call (`eth_call`) and hand back the raw output.
pub trait ReadOnlyCaller {
    /// Calls `to` with `data` against the latest block.
    fn call_read_only(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = eyre::Result<Bytes>> + Send;
}

impl ReadOnlyCaller for RootProvider<Ethereum> {
    fn call_read_only(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = eyre::Result<Bytes>> + Send {
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        async move { Ok(self.call(&tx).await?) }
    }
}

/// Reads the tokens and reserves of the pair at `pool`.
///
/// Calls are made one after another (reserves, token0, token1), each bounded
/// by `timeout`. The first failure is returned as is; nothing is retried.
///
/// # Errors
/// * `Error::Call` if a call fails or times out
/// * `Error::Decode` if a call returns data of the wrong shape
pub async fn fetch_pool_state<C: ReadOnlyCaller>(
    caller: &C,
    abi: &PairAbi,
    pool: Address,
    timeout: Duration,
) -> Result<PoolState, Error> {
    let reserves = fetch_reserves(caller, abi, pool, timeout).await?;
    let token0 = fetch_token(caller, abi, pool, PoolCall::Token0, timeout).await?;
    let token1 = fetch_token(caller, abi, pool, PoolCall::Token1, timeout).await?;

    let state = PoolState {
        address: pool,
        token0,
        token1,
        reserves,
    };
    info!("pool::fetch_pool_state: {state}");
    Ok(state)
}

/// Calls `getReserves()` and unpacks `(reserve0, reserve1, blockTimestampLast)`.
///
/// # Errors
/// * If the call fails or the output isn't three unsigned integers
pub async fn fetch_reserves<C: ReadOnlyCaller>(
    caller: &C,
    abi: &PairAbi,
    pool: Address,
    timeout: Duration,
) -> Result<Reserves, Error> {
    let call = PoolCall::Reserves;
    let values = call_and_decode(caller, abi, pool, call, timeout).await?;

    let uint_at = |index: usize| {
        values
            .get(index)
            .and_then(DynSolValue::as_uint)
            .map(|(value, _bits)| value)
            .ok_or_else(|| Error::Decode {
                call,
                reason: format!("output {index} is not an unsigned integer"),
            })
    };

    let reserve0 = uint_at(0)?;
    let reserve1 = uint_at(1)?;
    let block_timestamp_last = match values.get(2) {
        Some(_) => uint_at(2)?.saturating_to::<u32>(),
        None => 0,
    };

    Ok(Reserves {
        reserve0,
        reserve1,
        block_timestamp_last,
    })
}

/// Calls `token0()` or `token1()` and unpacks the returned address.
///
/// # Errors
/// * If the call fails or the output isn't an address
pub async fn fetch_token<C: ReadOnlyCaller>(
    caller: &C,
    abi: &PairAbi,
    pool: Address,
    call: PoolCall,
    timeout: Duration,
) -> Result<Address, Error> {
    let values = call_and_decode(caller, abi, pool, call, timeout).await?;
    values
        .first()
        .and_then(DynSolValue::as_address)
        .ok_or_else(|| Error::Decode {
            call,
            reason: "output 0 is not an address".to_string(),
        })
}

/// Runs one pool call under a deadline and decodes its output.
async fn call_and_decode<C: ReadOnlyCaller>(
    caller: &C,
    abi: &PairAbi,
    pool: Address,
    call: PoolCall,
    timeout: Duration,
) -> Result<Vec<DynSolValue>, Error> {
    debug!("pool::call: {}() on {pool}", call.method());

    // Dropping the future on expiry cancels the request
    let output = tokio::time::timeout(timeout, caller.call_read_only(pool, abi.calldata(call)))
        .await
        .map_err(|_| Error::Call {
            call,
            source: CallFailure::Timeout(timeout),
        })?
        .map_err(|e| Error::Call {
            call,
            source: CallFailure::Rpc(format!("{e:#}")),
        })?;

    debug!("pool::call: {}() returned {output}", call.method());
    abi.decode(call, &output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use alloy::primitives::U256;

    use super::*;
    use crate::quote::test_helpers::{
        pair_abi, FakeCall, FakePool, POOL, TEST_TIMEOUT, USDT, WETH,
    };

    fn pool_address() -> Address {
        Address::from_str(POOL).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_pool_state() {
        let fake = FakePool::new(WETH, USDT, 16_000, 30_000_000);
        let state = fetch_pool_state(&fake, &pair_abi(), pool_address(), TEST_TIMEOUT)
            .await
            .unwrap();

        assert_eq!(state.address, pool_address());
        assert_eq!(state.token0, Address::from_str(WETH).unwrap());
        assert_eq!(state.token1, Address::from_str(USDT).unwrap());
        assert_eq!(state.reserves.reserve0, U256::from(16_000));
        assert_eq!(state.reserves.reserve1, U256::from(30_000_000));
        assert_eq!(state.reserves.block_timestamp_last, FakePool::TIMESTAMP);
        assert_eq!(fake.calls(), 3);
    }

    #[tokio::test]
    async fn test_reserves_timeout_fails_fast() {
        let fake = FakePool::new(WETH, USDT, 1, 1).with_call(PoolCall::Reserves, FakeCall::Hang);
        let err = fetch_pool_state(&fake, &pair_abi(), pool_address(), TEST_TIMEOUT)
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.call(), Some(PoolCall::Reserves));
        assert!(err.to_string().contains("reserves"));
        // token0/token1 were never attempted
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_token1_rpc_error() {
        let fake = FakePool::new(WETH, USDT, 1, 1).with_call(PoolCall::Token1, FakeCall::Fail);
        let err = fetch_pool_state(&fake, &pair_abi(), pool_address(), TEST_TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Call {
                call: PoolCall::Token1,
                source: CallFailure::Rpc(_),
            }
        ));
        assert_eq!(fake.calls(), 3);
    }

    #[tokio::test]
    async fn test_reserves_wrong_shape() {
        // A single address word can't be decoded as three integers
        let fake = FakePool::new(WETH, USDT, 1, 1)
            .with_call(PoolCall::Reserves, FakeCall::Return(Bytes::from(vec![0u8; 32])));
        let err = fetch_pool_state(&fake, &pair_abi(), pool_address(), TEST_TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Decode {
                call: PoolCall::Reserves,
                ..
            }
        ));
    }
}
