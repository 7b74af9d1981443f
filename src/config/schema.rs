//! Configuration schema definitions.
//!
//! This module defines the settings every Prism client is built from.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for Prism clients.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrismConfig {
    /// JSON-RPC endpoint URL (e.g., "http://127.0.0.1:7545").
    pub node_url: String,

    /// Address of the deployed Prism contract.
    pub contract_address: String,

    /// Block confirmations to wait for after submitting a transfer.
    pub min_confirmations: u64,

    /// Default BIP-44 path for mnemonic credentials (e.g., "m/44'/60'/0'/0/0").
    pub mnemonic_path: String,

    /// Mnemonic used only by integration tests against a local node.
    pub test_mnemonic: String,

    /// Private key used only by integration tests against a local node.
    pub test_private_key: String,

    /// First block scanned by event-history queries (0 = genesis).
    pub from_block: u64,

    /// Timeout and retry policy for node requests.
    pub policy: RequestPolicy,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            node_url: String::new(),
            contract_address: String::new(),
            min_confirmations: 1,
            mnemonic_path: String::new(),
            test_mnemonic: String::new(),
            test_private_key: String::new(),
            from_block: 0,
            policy: RequestPolicy::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl PrismConfig {
    /// Merge `update` over this config; fields left `None` keep their value.
    pub fn apply(&mut self, update: ConfigUpdate) {
        let ConfigUpdate {
            node_url,
            contract_address,
            min_confirmations,
            mnemonic_path,
            test_mnemonic,
            test_private_key,
            from_block,
            policy,
            observability,
        } = update;

        if let Some(v) = node_url {
            self.node_url = v;
        }
        if let Some(v) = contract_address {
            self.contract_address = v;
        }
        if let Some(v) = min_confirmations {
            self.min_confirmations = v;
        }
        if let Some(v) = mnemonic_path {
            self.mnemonic_path = v;
        }
        if let Some(v) = test_mnemonic {
            self.test_mnemonic = v;
        }
        if let Some(v) = test_private_key {
            self.test_private_key = v;
        }
        if let Some(v) = from_block {
            self.from_block = v;
        }
        if let Some(v) = policy {
            self.policy = v;
        }
        if let Some(v) = observability {
            self.observability = v;
        }
    }

    /// Consume `self`, returning it with `update` merged in.
    pub fn merged(mut self, update: ConfigUpdate) -> Self {
        self.apply(update);
        self
    }
}

/// Partial configuration; each present field replaces the current one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub node_url: Option<String>,
    pub contract_address: Option<String>,
    pub min_confirmations: Option<u64>,
    pub mnemonic_path: Option<String>,
    pub test_mnemonic: Option<String>,
    pub test_private_key: Option<String>,
    pub from_block: Option<u64>,
    pub policy: Option<RequestPolicy>,
    pub observability: Option<ObservabilityConfig>,
}

/// Timeout and retry policy applied to node requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestPolicy {
    /// Per-attempt deadline in seconds; `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,

    /// Total attempts for read queries (1 = no retry).
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            max_attempts: 1,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
