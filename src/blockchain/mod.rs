//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Credential (private key, mnemonic, or signer)
//!     → wallet.rs (signer resolution)
//!     → client.rs (provider + contract binding, policy-wrapped reads)
//!     → transaction.rs (build, sign, broadcast, confirm)
//! abi.rs supplies the contract interface to all of the above.
//! ```
//!
//! # Security Constraints
//! - Never log private keys or phrases
//! - Credentials are resolved before any network traffic

pub mod abi;
pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{PrismError, PrismResult};
pub use wallet::Credential;
