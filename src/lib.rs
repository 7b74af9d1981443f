//! Client library for the Prism contract.
//!
//! Two entry points:
//! - [`Prism`] binds a credential and sends value transfers to the contract
//! - [`PrismNode`] reads tiers, balances, event statistics and the
//!   waiting-withdraws report
//!
//! Both are built from an explicit [`PrismConfig`]; [`ConfigStore`] holds a
//! shared, mergeable config for applications that want one.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod prism;
pub mod resilience;

pub use blockchain::{Credential, PrismError, PrismResult};
pub use config::{ConfigStore, ConfigUpdate, PrismConfig};
pub use prism::{Prism, PrismNode, WaitingWithdraw};
