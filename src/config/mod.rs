//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! PrismConfig built in code, or config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → optionally held in store.rs (merge updates, hand out snapshots)
//!     → passed by reference to Prism / PrismNode constructors
//! ```
//!
//! # Design Decisions
//! - No process-wide global; every client receives its config explicitly
//! - All fields have defaults to allow minimal configs
//! - Updates are shallow merges of a partial `ConfigUpdate`

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ConfigUpdate, ObservabilityConfig, PrismConfig, RequestPolicy};
pub use store::ConfigStore;
