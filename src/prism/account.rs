//! Account-bound Prism client.

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::abi::IPrism::IPrismInstance;
use crate::blockchain::client::{parse_node_url, ChainClient};
use crate::blockchain::transaction::{prepare_transfer, submit_and_confirm};
use crate::blockchain::types::PrismResult;
use crate::blockchain::wallet::Credential;
use crate::config::schema::PrismConfig;
use crate::prism::units::parse_ether;

/// Prism client holding signing authority over one account.
#[derive(Clone)]
pub struct Prism {
    signer: PrivateKeySigner,
    chain: ChainClient,
    min_confirmations: u64,
}

impl Prism {
    /// Create a client from any supported credential.
    ///
    /// Fails with `InvalidCredential` or `InvalidConfig` before any
    /// network traffic.
    pub fn new(config: &PrismConfig, credential: Credential) -> PrismResult<Self> {
        let signer = credential.into_signer(&config.mnemonic_path)?;
        let url = parse_node_url(&config.node_url)?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_http(url)
            .erased();

        Self::with_provider(config, signer, provider)
    }

    /// Create a client from a mnemonic phrase.
    ///
    /// `path` defaults to the configured `mnemonic_path`, then to
    /// `m/44'/60'/0'/0/0`.
    pub fn from_mnemonic(config: &PrismConfig, phrase: &str, path: Option<&str>) -> PrismResult<Self> {
        Self::new(
            config,
            Credential::Mnemonic {
                phrase: phrase.to_string(),
                path: path.map(str::to_string),
            },
        )
    }

    /// Bind an already-built provider; it must sign for `signer`.
    pub fn with_provider(
        config: &PrismConfig,
        signer: PrivateKeySigner,
        provider: DynProvider,
    ) -> PrismResult<Self> {
        let chain = ChainClient::with_provider(config, provider)?;

        tracing::info!(
            address = %signer.address(),
            contract = %chain.contract_address(),
            "Prism account client initialized"
        );

        Ok(Self {
            signer,
            chain,
            min_confirmations: config.min_confirmations,
        })
    }

    /// The signer this client sends with.
    pub fn wallet(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// The contract handle, connected through the signing provider.
    pub fn contract(&self) -> &IPrismInstance<DynProvider> {
        self.chain.contract()
    }

    /// Sender address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Send `amount` wei to the contract and wait for confirmation.
    ///
    /// Returns the receipt once the transaction is `min_confirmations` blocks
    /// deep, counting its own block. The transaction is broadcast once.
    pub async fn transfer(&self, amount: U256) -> PrismResult<TransactionReceipt> {
        tracing::info!(
            from = %self.address(),
            to = %self.chain.contract_address(),
            amount = %amount,
            "Submitting transfer"
        );

        let tx = prepare_transfer(
            self.chain.provider(),
            self.address(),
            self.chain.contract_address(),
            amount,
        )
        .await?;

        submit_and_confirm(
            self.chain.provider(),
            tx,
            self.min_confirmations,
            self.chain.policy().timeout_secs,
        )
        .await
    }

    /// [`transfer`](Self::transfer) with a decimal ether amount, e.g. `"0.02"`.
    pub async fn transfer_ether(&self, amount: &str) -> PrismResult<TransactionReceipt> {
        self.transfer(parse_ether(amount)?).await
    }
}

impl std::fmt::Debug for Prism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prism")
            .field("address", &self.signer.address())
            .field("chain", &self.chain)
            .field("min_confirmations", &self.min_confirmations)
            .finish()
    }
}
