use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use crate::error::PoolCall;
use crate::pool::{PairAbi, PoolState, ReadOnlyCaller, Reserves};

/// Uniswap V2 WETH/USDT pair on mainnet
pub const POOL: &str = "0x0d4a11d5EEaaC28EC3F61d100daF4d40471f1852";
pub const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Short enough that hanging calls don't slow the suite down
pub const TEST_TIMEOUT: Duration = Duration::from_millis(50);

pub fn pair_abi() -> PairAbi {
    PairAbi::from_json(include_str!("../../contracts/abi/IUniswapV2Pair.json")).unwrap()
}

pub fn address(value: &str) -> Address {
    Address::from_str(value).unwrap()
}

pub fn pool_state(token0: &str, token1: &str, reserve0: u128, reserve1: u128) -> PoolState {
    PoolState {
        address: address(POOL),
        token0: address(token0),
        token1: address(token1),
        reserves: Reserves {
            reserve0: U256::from(reserve0),
            reserve1: U256::from(reserve1),
            block_timestamp_last: FakePool::TIMESTAMP,
        },
    }
}

/// How the fake pool answers one of its methods.
#[derive(Clone)]
pub enum FakeCall {
    Return(Bytes),
    Hang,
    Fail,
}

/// In-memory pair contract answering `getReserves`, `token0` and `token1`.
pub struct FakePool {
    abi: PairAbi,
    answers: HashMap<PoolCall, FakeCall>,
    calls: AtomicUsize,
}

impl FakePool {
    pub const TIMESTAMP: u32 = 1_700_000_000;

    pub fn new(token0: &str, token1: &str, reserve0: u128, reserve1: u128) -> Self {
        let reserves = (
            U256::from(reserve0),
            U256::from(reserve1),
            U256::from(Self::TIMESTAMP),
        )
            .abi_encode();

        let answers = HashMap::from([
            (PoolCall::Reserves, FakeCall::Return(reserves.into())),
            (
                PoolCall::Token0,
                FakeCall::Return(address(token0).abi_encode().into()),
            ),
            (
                PoolCall::Token1,
                FakeCall::Return(address(token1).abi_encode().into()),
            ),
        ]);

        Self {
            abi: pair_abi(),
            answers,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_call(mut self, call: PoolCall, answer: FakeCall) -> Self {
        self.answers.insert(call, answer);
        self
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, data: &Bytes) -> Option<FakeCall> {
        [PoolCall::Reserves, PoolCall::Token0, PoolCall::Token1]
            .into_iter()
            .find(|call| self.abi.calldata(*call) == *data)
            .and_then(|call| self.answers.get(&call).cloned())
    }
}

impl ReadOnlyCaller for FakePool {
    fn call_read_only(
        &self,
        _to: Address,
        data: Bytes,
    ) -> impl Future<Output = eyre::Result<Bytes>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.answer(&data);
        async move {
            match answer {
                Some(FakeCall::Return(output)) => Ok(output),
                Some(FakeCall::Hang) => std::future::pending().await,
                Some(FakeCall::Fail) => Err(eyre::eyre!("execution reverted")),
                None => Err(eyre::eyre!("unknown selector {data}")),
            }
        }
    }
}
