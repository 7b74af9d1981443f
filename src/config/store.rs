//! Shared, mutable configuration.
//!
//! Clients read a snapshot at construction; later updates only affect
//! clients built afterwards.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::schema::{ConfigUpdate, PrismConfig};

/// Lock-free holder for the current [`PrismConfig`].
#[derive(Debug)]
pub struct ConfigStore {
    current: ArcSwap<PrismConfig>,
}

impl ConfigStore {
    pub fn new(config: PrismConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// Merge `update` over the current config.
    pub fn set_config(&self, update: ConfigUpdate) {
        self.current.rcu(|current| {
            let mut next = PrismConfig::clone(current);
            next.apply(update.clone());
            next
        });
        tracing::debug!("Configuration updated");
    }

    /// Current configuration, by value.
    pub fn get_config(&self) -> PrismConfig {
        PrismConfig::clone(&self.current.load())
    }

    /// Current configuration without copying it.
    pub fn snapshot(&self) -> Arc<PrismConfig> {
        self.current.load_full()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(PrismConfig::default())
    }
}
