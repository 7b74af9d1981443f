//! Retry logic for read-only contract queries.
//!
//! # Design Decisions
//! - Only reads go through here; a transfer is submitted exactly once
//! - Only transport failures and timeouts are retried
//! - The default policy makes a single attempt

use std::future::Future;
use std::time::Instant;

use crate::blockchain::types::PrismResult;
use crate::config::schema::RequestPolicy;
use crate::observability::metrics;
use crate::resilience::backoff::Backoff;
use crate::resilience::timeouts::with_timeout;

/// Execute `op` under `policy`, retrying retryable failures with backoff.
///
/// # Arguments
/// * `policy` - Timeout and retry settings
/// * `method` - Label used in logs and metrics
/// * `op` - Factory producing a fresh request future per attempt
pub async fn with_retries<T, F, Fut>(policy: &RequestPolicy, method: &'static str, op: F) -> PrismResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = PrismResult<T>>,
{
    let backoff = Backoff::new(policy.base_delay_ms, policy.max_delay_ms);
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        let started = Instant::now();
        let result = with_timeout(policy.timeout_secs, op()).await;
        metrics::record_rpc(method, result.is_ok(), started.elapsed());

        match result {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt + 1 < max_attempts => {
                attempt += 1;
                let delay = backoff.delay(attempt);
                tracing::warn!(
                    method,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "RPC request failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
