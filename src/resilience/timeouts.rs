//! Deadline enforcement for RPC calls.
//!
//! A policy without a deadline leaves cancellation to the transport.

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{PrismError, PrismResult};

/// Run `fut`, failing with [`PrismError::Timeout`] once `timeout_secs` elapses.
pub async fn with_timeout<T, Fut>(timeout_secs: Option<u64>, fut: Fut) -> PrismResult<T>
where
    Fut: Future<Output = PrismResult<T>>,
{
    match timeout_secs {
        Some(secs) => match timeout(Duration::from_secs(secs), fut).await {
            Ok(result) => result,
            Err(_) => Err(PrismError::Timeout(secs)),
        },
        None => fut.await,
    }
}
