//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the node URL and contract address parse
//! - Validate derivation path shape and retry ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PrismConfig → Result<(), Vec<ValidationError>>
//! - Clients do not call this; they fail on use with the offending value

use alloy::primitives::Address;

use crate::config::schema::PrismConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Check a config for values that would fail once a client uses them.
pub fn validate_config(config: &PrismConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = url::Url::parse(&config.node_url) {
        errors.push(ValidationError {
            field: "node_url",
            message: format!("invalid URL '{}': {}", config.node_url, e),
        });
    }

    if let Err(e) = config.contract_address.parse::<Address>() {
        errors.push(ValidationError {
            field: "contract_address",
            message: format!("invalid address '{}': {}", config.contract_address, e),
        });
    }

    if !config.mnemonic_path.is_empty() && !is_derivation_path(&config.mnemonic_path) {
        errors.push(ValidationError {
            field: "mnemonic_path",
            message: format!("'{}' is not a BIP-32 path", config.mnemonic_path),
        });
    }

    let policy = &config.policy;
    if policy.max_attempts == 0 {
        errors.push(ValidationError {
            field: "policy.max_attempts",
            message: "must be at least 1".to_string(),
        });
    }
    if policy.base_delay_ms > policy.max_delay_ms {
        errors.push(ValidationError {
            field: "policy.base_delay_ms",
            message: format!(
                "{} exceeds max_delay_ms {}",
                policy.base_delay_ms, policy.max_delay_ms
            ),
        });
    }
    if policy.timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "policy.timeout_secs",
            message: "must be positive when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// m/44'/60'/0'/0/0 style: "m" followed by numeric segments, optionally hardened
fn is_derivation_path(path: &str) -> bool {
    let mut segments = path.split('/');
    if segments.next() != Some("m") {
        return false;
    }

    let mut any = false;
    for segment in segments {
        let index = segment
            .strip_suffix('\'')
            .or_else(|| segment.strip_suffix('h'))
            .unwrap_or(segment);
        if index.is_empty() || index.parse::<u32>().is_err() {
            return false;
        }
        any = true;
    }
    any
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> PrismConfig {
        PrismConfig {
            node_url: "http://127.0.0.1:7545".to_string(),
            contract_address: "0x3187A668605846B7c8C2Ad6522285c1C47C16F5E".to_string(),
            mnemonic_path: "m/44'/60'/0'/0/0".to_string(),
            ..PrismConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = valid_config();
        config.node_url = "not a url".to_string();
        config.contract_address = "0x1234".to_string();
        config.policy.max_attempts = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["node_url", "contract_address", "policy.max_attempts"]);
    }

    #[test]
    fn test_default_config_is_invalid() {
        // Empty URL and address are accepted by the schema but not usable
        assert!(validate_config(&PrismConfig::default()).is_err());
    }

    #[test]
    fn test_derivation_paths() {
        assert!(is_derivation_path("m/44'/60'/0'/0/0"));
        assert!(is_derivation_path("m/44h/60h/0h/0/1"));
        assert!(!is_derivation_path("m"));
        assert!(!is_derivation_path("44'/60'/0'"));
        assert!(!is_derivation_path("m/44'/x/0"));
        assert!(!is_derivation_path("m//0"));
    }

    #[test]
    fn test_backoff_range() {
        let mut config = valid_config();
        config.policy.base_delay_ms = 5000;
        config.policy.max_delay_ms = 100;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "policy.base_delay_ms");
    }
}
