//! Value-transfer submission and confirmation.
//!
//! # Responsibilities
//! - Build a plain value transfer to the contract (no call data)
//! - Fill nonce, gas and chain id from the node, then sign and broadcast
//! - Poll for the receipt until the configured confirmation depth
//!
//! # Design Decisions
//! - Exactly one broadcast per call; failures are never retried
//! - The request is complete before it reaches the provider, so the wallet
//!   filler only signs
//! - Confirmation is polled sequentially (receipt, then head block) rather
//!   than through a background block watcher

use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tokio::time::interval;

use crate::blockchain::types::{PrismError, PrismResult};
use crate::observability::metrics;
use crate::resilience::with_timeout;

/// Delay between receipt polls while waiting for confirmation.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Build the request for sending `value` wei to `to`.
pub fn build_transfer(from: Address, to: Address, value: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(value)
}

/// Complete a transfer request with nonce, gas price, chain id and gas limit.
///
/// Queries, in order: `eth_getTransactionCount`, `eth_gasPrice`,
/// `eth_chainId`, `eth_estimateGas`.
pub async fn prepare_transfer(
    provider: &DynProvider,
    from: Address,
    to: Address,
    value: U256,
) -> PrismResult<TransactionRequest> {
    let nonce = provider
        .get_transaction_count(from)
        .await
        .map_err(|e| rpc_error("eth_getTransactionCount", e))?;
    let gas_price = provider
        .get_gas_price()
        .await
        .map_err(|e| rpc_error("eth_gasPrice", e))?;
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| rpc_error("eth_chainId", e))?;

    let tx = build_transfer(from, to, value)
        .with_nonce(nonce)
        .with_gas_price(gas_price)
        .with_chain_id(chain_id);

    let gas_limit = provider
        .estimate_gas(tx.clone())
        .await
        .map_err(|e| rpc_error("eth_estimateGas", e))?;

    tracing::debug!(nonce, gas_price, chain_id, gas_limit, "Transfer prepared");
    Ok(tx.with_gas_limit(gas_limit))
}

/// Broadcast `tx` and wait until it has `confirmations` blocks, counting
/// its own.
///
/// # Arguments
/// * `provider` - Provider with a wallet filler for the sender
/// * `tx` - Request from [`prepare_transfer`]
/// * `confirmations` - Required confirmation depth
/// * `timeout_secs` - Optional deadline for the confirmation wait
pub async fn submit_and_confirm(
    provider: &DynProvider,
    tx: TransactionRequest,
    confirmations: u64,
    timeout_secs: Option<u64>,
) -> PrismResult<TransactionReceipt> {
    let pending = match provider.send_transaction(tx).await {
        Ok(pending) => pending,
        Err(e) => {
            metrics::record_transfer(false);
            return Err(PrismError::Rpc(format!("Transaction broadcast failed: {}", e)));
        }
    };

    let tx_hash = *pending.tx_hash();
    tracing::info!(tx_hash = %tx_hash, confirmations, "Transfer broadcast");

    let result = with_timeout(
        timeout_secs,
        wait_for_confirmation(provider, tx_hash, confirmations),
    )
    .await;
    metrics::record_transfer(result.is_ok());

    let receipt = result?;
    tracing::info!(
        tx_hash = %tx_hash,
        block_number = receipt.block_number.unwrap_or_default(),
        "Transfer confirmed"
    );
    Ok(receipt)
}

/// Poll until the receipt is `confirmations` blocks deep.
///
/// A reverted receipt is reported as soon as it is seen.
async fn wait_for_confirmation(
    provider: &DynProvider,
    tx_hash: TxHash,
    confirmations: u64,
) -> PrismResult<TransactionReceipt> {
    let mut ticker = interval(RECEIPT_POLL_INTERVAL);

    loop {
        ticker.tick().await;

        let receipt = match provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| rpc_error("eth_getTransactionReceipt", e))?
        {
            Some(receipt) => receipt,
            None => {
                tracing::debug!(tx_hash = %tx_hash, "Transfer pending");
                continue;
            }
        };

        if !receipt.status() {
            tracing::warn!(tx_hash = %tx_hash, "Transfer reverted");
            return Err(PrismError::Reverted(tx_hash.to_string()));
        }

        let Some(tx_block) = receipt.block_number else {
            continue;
        };
        let head = provider
            .get_block_number()
            .await
            .map_err(|e| rpc_error("eth_blockNumber", e))?;
        let depth = head.saturating_sub(tx_block) + 1;

        if depth >= confirmations {
            return Ok(receipt);
        }

        tracing::debug!(
            tx_hash = %tx_hash,
            depth,
            required = confirmations,
            "Waiting for confirmations"
        );
    }
}

fn rpc_error(method: &str, e: impl std::fmt::Display) -> PrismError {
    PrismError::Rpc(format!("{} failed: {}", method, e))
}
