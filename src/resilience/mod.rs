//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Read request to node:
//!     → timeouts.rs (optional per-attempt deadline)
//!     → on failure: retries.rs (retryable? sleep per backoff.rs, try again)
//! ```
//!
//! # Design Decisions
//! - Policy is injected through config, never hardcoded
//! - Retries only for idempotent reads; transfers are never retried

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::with_retries;
pub use timeouts::with_timeout;
