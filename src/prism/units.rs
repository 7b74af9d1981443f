//! Conversion between base units (wei) and decimal display strings.

use alloy::primitives::utils::{format_ether as alloy_format_ether, parse_ether as alloy_parse_ether};
use alloy::primitives::U256;

use crate::blockchain::types::{PrismError, PrismResult};

/// Format a wei amount as ether with trailing zeros trimmed.
///
/// At least one fractional digit is kept: `10^18` is `"1.0"`,
/// `2 * 10^16` is `"0.02"`.
pub fn format_ether(value: U256) -> String {
    let formatted = alloy_format_ether(value);
    let trimmed = formatted.trim_end_matches('0');

    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Parse a decimal ether amount (e.g. `"0.02"`) into wei.
pub fn parse_ether(amount: &str) -> PrismResult<U256> {
    alloy_parse_ether(amount.trim())
        .map_err(|e| PrismError::Units(format!("Invalid ether amount '{}': {}", amount, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(n: u128) -> U256 {
        U256::from(n)
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_ether(wei(20_000_000_000_000_000)), "0.02");
        assert_eq!(format_ether(wei(26_000_000_000_000_000)), "0.026");
        assert_eq!(format_ether(wei(1_000_000_000_000_000_000)), "1.0");
        assert_eq!(format_ether(wei(10_000_000_000_000_000_000)), "10.0");
        assert_eq!(format_ether(wei(1)), "0.000000000000000001");
        assert_eq!(format_ether(wei(1_500_000_000_000_000_001)), "1.500000000000000001");
    }

    #[test]
    fn test_format_large_value() {
        let value = U256::MAX;
        let formatted = format_ether(value);
        assert!(formatted.contains('.'));
        assert!(formatted.len() > 60);
    }

    #[test]
    fn test_parse_ether() {
        assert_eq!(parse_ether("0.02").unwrap(), wei(20_000_000_000_000_000));
        assert_eq!(parse_ether("1").unwrap(), wei(1_000_000_000_000_000_000));
        assert_eq!(parse_ether(" 10.0 ").unwrap(), wei(10_000_000_000_000_000_000));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_ether("abc"), Err(PrismError::Units(_))));
    }

    #[test]
    fn test_levels_format_roundtrip() {
        for level in ["0.02", "0.05", "0.1", "0.5", "1.0", "2.0", "10.0"] {
            assert_eq!(format_ether(parse_ether(level).unwrap()), level);
        }
    }
}
