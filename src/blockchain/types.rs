//! Error definitions shared by every Prism operation.

use thiserror::Error;

/// Errors that can occur while talking to the Prism contract.
#[derive(Debug, Error)]
pub enum PrismError {
    /// Credential could not be turned into a signer.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Node URL or contract address could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Request did not complete within the policy deadline.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was mined but reverted.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// An event log could not be decoded into a typed record.
    #[error("Malformed event log at index {index}: {reason}")]
    MalformedEvent { index: usize, reason: String },

    /// Decimal amount could not be converted to base units.
    #[error("Units error: {0}")]
    Units(String),
}

impl PrismError {
    /// Whether a read may be attempted again after this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PrismError::Rpc(_) | PrismError::Timeout(_))
    }
}

/// Result type for Prism operations.
pub type PrismResult<T> = Result<T, PrismError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrismError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = PrismError::MalformedEvent {
            index: 3,
            reason: "missing amount".to_string(),
        };
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("missing amount"));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(PrismError::Rpc("connection refused".into()).is_retryable());
        assert!(PrismError::Timeout(5).is_retryable());
        assert!(!PrismError::InvalidCredential("bad".into()).is_retryable());
        assert!(!PrismError::Reverted("0xabc".into()).is_retryable());
    }
}
