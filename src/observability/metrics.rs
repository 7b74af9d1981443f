//! RPC metrics.
//!
//! # Metrics
//! - `prism_rpc_requests_total` (counter): requests by method and outcome
//! - `prism_rpc_duration_seconds` (histogram): per-attempt latency by method
//!
//! Nothing is exported unless the host application installs a recorder.

use std::time::Duration;

/// Record one RPC attempt.
pub fn record_rpc(method: &'static str, success: bool, elapsed: Duration) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!("prism_rpc_requests_total", "method" => method, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("prism_rpc_duration_seconds", "method" => method)
        .record(elapsed.as_secs_f64());
}

/// Record a submitted transfer.
pub fn record_transfer(confirmed: bool) {
    let outcome = if confirmed { "confirmed" } else { "failed" };
    metrics::counter!("prism_transfers_total", "outcome" => outcome).increment(1);
}
