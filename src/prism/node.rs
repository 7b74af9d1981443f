//! Read-only Prism client.
//!
//! # Responsibilities
//! - Query contract state: tiers, next withdraw id, balance
//! - Aggregate the full transfer and withdraw event history
//! - Build the waiting-withdraws report
//!
//! Every call goes to the node; nothing is cached between calls.

use alloy::primitives::{B256, U256};
use alloy::providers::DynProvider;

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::PrismResult;
use crate::config::schema::PrismConfig;
use crate::prism::events::{PrismEvent, TransferEvent, WithdrawEvent};
use crate::prism::units::format_ether;
use crate::prism::withdraws::{correlate, WaitingWithdraw};

/// Unauthenticated view of a Prism deployment.
#[derive(Debug, Clone)]
pub struct PrismNode {
    chain: ChainClient,
}

impl PrismNode {
    /// Connect to the configured node and contract.
    pub fn new(config: &PrismConfig) -> PrismResult<Self> {
        let chain = ChainClient::connect(config)?;
        tracing::info!(contract = %chain.contract_address(), "Prism node client initialized");
        Ok(Self { chain })
    }

    /// Bind an existing provider instead of connecting over HTTP.
    pub fn with_provider(config: &PrismConfig, provider: DynProvider) -> PrismResult<Self> {
        Ok(Self {
            chain: ChainClient::with_provider(config, provider)?,
        })
    }

    /// Transfer tiers accepted by the contract, in ether, contract order.
    pub async fn get_levels(&self) -> PrismResult<Vec<String>> {
        let levels = self.chain.get_levels().await?;
        Ok(levels.into_iter().map(format_ether).collect())
    }

    /// Next pending withdraw id for the tier `level` (in wei).
    pub async fn get_next_withdraw(&self, level: U256) -> PrismResult<B256> {
        self.chain.get_next_withdraw(level).await
    }

    /// Contract balance in ether.
    pub async fn get_balance(&self) -> PrismResult<String> {
        let balance = self.chain.get_balance().await?;
        Ok(format_ether(balance))
    }

    pub async fn get_total_transfers_count(&self) -> PrismResult<usize> {
        Ok(self.chain.get_events::<TransferEvent>().await?.len())
    }

    /// Sum of every transfer, in ether.
    pub async fn get_total_transfers_amount(&self) -> PrismResult<String> {
        let transfers = self.chain.get_events::<TransferEvent>().await?;
        Ok(format_ether(sum_amounts(&transfers)))
    }

    pub async fn get_total_withdraws_count(&self) -> PrismResult<usize> {
        Ok(self.chain.get_events::<WithdrawEvent>().await?.len())
    }

    /// Sum of every withdraw, in ether.
    pub async fn get_total_withdraws_amount(&self) -> PrismResult<String> {
        let withdraws = self.chain.get_events::<WithdrawEvent>().await?;
        Ok(format_ether(sum_amounts(&withdraws)))
    }

    /// Every transfer with its recorded or estimated payout.
    ///
    /// Transfers and withdraws are fetched with two independent queries, so
    /// the report can straddle a block that lands between them.
    pub async fn get_waiting_withdraws(&self) -> PrismResult<Vec<WaitingWithdraw>> {
        let transfers = self.chain.get_events::<TransferEvent>().await?;
        let withdraws = self.chain.get_events::<WithdrawEvent>().await?;

        let report = correlate(&transfers, &withdraws);
        tracing::debug!(
            transfers = transfers.len(),
            withdraws = withdraws.len(),
            pending = report.iter().filter(|w| !w.is_completed).count(),
            "Built waiting withdraws"
        );
        Ok(report)
    }

    /// The underlying chain client.
    pub fn chain(&self) -> &ChainClient {
        &self.chain
    }
}

/// Wei total of `events`; saturates rather than wrapping.
pub fn sum_amounts<E: PrismEvent>(events: &[E]) -> U256 {
    events
        .iter()
        .fold(U256::ZERO, |total, event| total.saturating_add(event.amount()))
}
