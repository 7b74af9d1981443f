//! Shared utilities for integration tests against a mocked node.

#![allow(dead_code)]

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, Bytes, LogData, B256, U256, U64};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::rpc::types::Log;
use alloy::sol_types::{SolEvent, SolValue};
use alloy::transports::mock::Asserter;

use prism_client::blockchain::abi::IPrism::{TransferAccepted, WithdrawAccepted};
use prism_client::PrismConfig;

pub const CONTRACT: &str = "0x3187A668605846B7c8C2Ad6522285c1C47C16F5E";

/// Config pointing at the mocked deployment.
pub fn test_config() -> PrismConfig {
    PrismConfig {
        node_url: "http://127.0.0.1:7545".to_string(),
        contract_address: CONTRACT.to_string(),
        mnemonic_path: "m/44'/60'/0'/0/0".to_string(),
        ..PrismConfig::default()
    }
}

/// Provider whose responses are served, in order, from `asserter`.
pub fn mocked_provider(asserter: &Asserter) -> DynProvider {
    ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased()
}

/// Signing provider for `signer` whose responses come from `asserter`.
pub fn mocked_signing_provider(asserter: &Asserter, signer: &PrivateKeySigner) -> DynProvider {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer.clone()))
        .connect_mocked_client(asserter.clone())
        .erased()
}

/// Queue the node answers a transfer needs before it is signed:
/// nonce, gas price, chain id, gas estimate.
pub fn push_transfer_preparation(asserter: &Asserter) {
    asserter.push_success(&U64::from(0));
    asserter.push_success(&U256::from(1_000_000_000u64));
    asserter.push_success(&U64::from(31337));
    asserter.push_success(&U64::from(45_000));
}

/// `eth_getTransactionReceipt` body for a mined transfer.
pub fn receipt_json(tx_hash: B256, block_number: u64, success: bool) -> serde_json::Value {
    serde_json::json!({
        "type": "0x0",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0xafc8",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": format!("{:#x}", block_number),
        "gasUsed": "0xafc8",
        "effectiveGasPrice": "0x3b9aca00",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": CONTRACT.to_lowercase(),
        "contractAddress": null
    })
}

pub fn id(n: u8) -> B256 {
    B256::with_last_byte(n)
}

pub fn ether(amount: &str) -> U256 {
    prism_client::prism::units::parse_ether(amount).unwrap()
}

fn rpc_log(data: LogData, index: u64) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: CONTRACT.parse::<Address>().unwrap(),
            data,
        },
        block_number: Some(index + 1),
        log_index: Some(index),
        ..Default::default()
    }
}

/// Raw `TransferAccepted` logs in the given order.
pub fn transfer_logs(events: &[(u8, U256)]) -> Vec<Log> {
    events
        .iter()
        .enumerate()
        .map(|(i, (n, amount))| {
            let event = TransferAccepted {
                id: id(*n),
                amount: *amount,
            };
            rpc_log(event.encode_log_data(), i as u64)
        })
        .collect()
}

/// Raw `WithdrawAccepted` logs in the given order.
pub fn withdraw_logs(events: &[(u8, U256)]) -> Vec<Log> {
    events
        .iter()
        .enumerate()
        .map(|(i, (n, amount))| {
            let event = WithdrawAccepted {
                id: id(*n),
                amount: *amount,
            };
            rpc_log(event.encode_log_data(), i as u64)
        })
        .collect()
}

/// `eth_call` response for a function returning `uint256[]`.
pub fn encode_uint_array(values: Vec<U256>) -> Bytes {
    (values,).abi_encode_params().into()
}

/// `eth_call` response for a function returning one static value.
pub fn encode_word<T: SolValue>(value: T) -> Bytes {
    value.abi_encode().into()
}
