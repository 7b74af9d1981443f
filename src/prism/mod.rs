//! Prism clients.
//!
//! # Data Flow
//! ```text
//! PrismConfig + Credential
//!     → account.rs (Prism: signer-bound, transfer)
//! PrismConfig
//!     → node.rs (PrismNode: read-only queries)
//!         → events.rs (decode TransferAccepted / WithdrawAccepted logs)
//!         → withdraws.rs (join transfers with withdraws by id)
//!         → units.rs (wei → ether strings)
//! ```

pub mod account;
pub mod events;
pub mod node;
pub mod units;
pub mod withdraws;

pub use account::Prism;
pub use events::{TransferEvent, WithdrawEvent};
pub use node::PrismNode;
pub use withdraws::WaitingWithdraw;
