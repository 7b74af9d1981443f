//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Clients and resilience layer produce:
//!     → tracing events (structured fields, no secrets)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers (installed by the application):
//!     → logging.rs subscriber (stdout, plain or JSON)
//!     → any `metrics` recorder
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
