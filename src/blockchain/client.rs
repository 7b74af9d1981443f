//! Contract-bound RPC client.
//!
//! # Responsibilities
//! - Bind a provider to the Prism contract address
//! - Run view calls and event-history queries under the request policy
//! - Translate SDK failures into `PrismError`

use alloy::primitives::{Address, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::Filter;
use alloy::sol_types::SolEvent;

use crate::blockchain::abi::IPrism::{self, IPrismInstance};
use crate::blockchain::types::{PrismError, PrismResult};
use crate::config::schema::{PrismConfig, RequestPolicy};
use crate::prism::events::{parse_logs, PrismEvent};
use crate::resilience::with_retries;

/// Provider plus contract handle for one Prism deployment.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    contract: IPrismInstance<DynProvider>,
    policy: RequestPolicy,
    from_block: u64,
}

impl ChainClient {
    /// Connect read-only over HTTP to the configured node.
    ///
    /// No request is sent here; an unreachable node surfaces on first use.
    pub fn connect(config: &PrismConfig) -> PrismResult<Self> {
        let url = parse_node_url(&config.node_url)?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Self::with_provider(config, provider)
    }

    /// Bind an existing provider (signing, mocked, or custom transport).
    pub fn with_provider(config: &PrismConfig, provider: DynProvider) -> PrismResult<Self> {
        let address = parse_contract_address(&config.contract_address)?;
        let contract = IPrism::new(address, provider.clone());

        Ok(Self {
            provider,
            contract,
            policy: config.policy,
            from_block: config.from_block,
        })
    }

    /// Contract tiers in wei.
    pub async fn get_levels(&self) -> PrismResult<Vec<U256>> {
        with_retries(&self.policy, "getLevels", || async {
            self.contract
                .getLevels()
                .call()
                .await
                .map_err(|e| contract_error("getLevels", e))
        })
        .await
    }

    /// Next pending withdraw id for a tier.
    pub async fn get_next_withdraw(&self, level: U256) -> PrismResult<B256> {
        with_retries(&self.policy, "getNextWithdraw", || async {
            self.contract
                .getNextWithdraw(level)
                .call()
                .await
                .map_err(|e| contract_error("getNextWithdraw", e))
        })
        .await
    }

    /// Contract balance in wei, as reported by the contract.
    pub async fn get_balance(&self) -> PrismResult<U256> {
        with_retries(&self.policy, "getBalance", || async {
            self.contract
                .getBalance()
                .call()
                .await
                .map_err(|e| contract_error("getBalance", e))
        })
        .await
    }

    /// Every `E` event the contract emitted from `from_block` onward.
    pub async fn get_events<E: PrismEvent>(&self) -> PrismResult<Vec<E>> {
        let filter = Filter::new()
            .address(self.contract_address())
            .from_block(self.from_block)
            .event_signature(<E::Abi as SolEvent>::SIGNATURE_HASH);

        let logs = with_retries(&self.policy, "getLogs", || async {
            self.provider
                .get_logs(&filter)
                .await
                .map_err(|e| PrismError::Rpc(format!("getLogs {}: {}", E::NAME, e)))
        })
        .await?;

        tracing::debug!(
            event = E::NAME,
            from_block = self.from_block,
            count = logs.len(),
            "Fetched event logs"
        );
        parse_logs(&logs)
    }

    /// The underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// The bound contract instance.
    pub fn contract(&self) -> &IPrismInstance<DynProvider> {
        &self.contract
    }

    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    pub fn policy(&self) -> &RequestPolicy {
        &self.policy
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("contract_address", &self.contract_address())
            .field("from_block", &self.from_block)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Parse the node endpoint.
pub fn parse_node_url(node_url: &str) -> PrismResult<url::Url> {
    node_url
        .parse()
        .map_err(|e| PrismError::InvalidConfig(format!("Invalid node URL '{}': {}", node_url, e)))
}

/// Parse the contract address.
pub fn parse_contract_address(address: &str) -> PrismResult<Address> {
    address.parse().map_err(|e| {
        PrismError::InvalidConfig(format!("Invalid contract address '{}': {}", address, e))
    })
}

fn contract_error(method: &str, e: alloy::contract::Error) -> PrismError {
    PrismError::Rpc(format!("{} call failed: {}", method, e))
}
