//! Credential handling and signer construction.
//!
//! # Security
//! - Private keys and phrases are never logged or serialized
//! - Credentials are resolved once, at client construction

use std::fmt;
use std::str::FromStr;

use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

use crate::blockchain::types::{PrismError, PrismResult};

/// Derivation path used when neither the caller nor the config supplies one.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Word counts accepted for a BIP-39 phrase.
const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// The ways an authenticated client can be given signing authority.
#[derive(Clone)]
pub enum Credential {
    /// Hex-encoded secp256k1 private key, with or without `0x` prefix.
    PrivateKey(String),
    /// BIP-39 phrase plus an optional BIP-44 derivation path.
    Mnemonic { phrase: String, path: Option<String> },
    /// Signer built elsewhere by the caller.
    Signer(PrivateKeySigner),
}

impl Credential {
    /// Resolve the credential into a local signer.
    ///
    /// # Arguments
    /// * `default_path` - Derivation path used for a mnemonic without one;
    ///   an empty string falls back to [`DEFAULT_DERIVATION_PATH`]
    pub fn into_signer(self, default_path: &str) -> PrismResult<PrivateKeySigner> {
        match self {
            Credential::PrivateKey(key) => signer_from_private_key(&key),
            Credential::Mnemonic { phrase, path } => {
                let path = resolve_derivation_path(path.as_deref(), default_path);
                signer_from_mnemonic(&phrase, path)
            }
            Credential::Signer(signer) => Ok(signer),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::PrivateKey(_) => f.write_str("Credential::PrivateKey(..)"),
            Credential::Mnemonic { path, .. } => f
                .debug_struct("Credential::Mnemonic")
                .field("path", path)
                .finish_non_exhaustive(),
            Credential::Signer(signer) => f
                .debug_tuple("Credential::Signer")
                .field(&signer.address())
                .finish(),
        }
    }
}

impl From<PrivateKeySigner> for Credential {
    fn from(signer: PrivateKeySigner) -> Self {
        Credential::Signer(signer)
    }
}

impl FromStr for Credential {
    type Err = PrismError;

    /// Classify a loosely-typed credential string.
    ///
    /// 32-byte hex becomes a private key, a phrase of a valid BIP-39 length
    /// becomes a mnemonic, anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Credential::PrivateKey(trimmed.to_string()));
        }

        let words = trimmed.split_whitespace().count();
        if MNEMONIC_WORD_COUNTS.contains(&words) {
            return Ok(Credential::Mnemonic {
                phrase: trimmed.split_whitespace().collect::<Vec<_>>().join(" "),
                path: None,
            });
        }

        Err(PrismError::InvalidCredential(
            "expected a 32-byte hex private key or a BIP-39 phrase".to_string(),
        ))
    }
}

/// Pick the derivation path: explicit, then configured, then the default.
pub fn resolve_derivation_path<'a>(explicit: Option<&'a str>, configured: &'a str) -> &'a str {
    match explicit {
        Some(path) if !path.is_empty() => path,
        _ if !configured.is_empty() => configured,
        _ => DEFAULT_DERIVATION_PATH,
    }
}

/// Create a signer from a hex-encoded private key string.
pub fn signer_from_private_key(private_key_hex: &str) -> PrismResult<PrivateKeySigner> {
    let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

    let signer: PrivateKeySigner = key_hex
        .parse()
        .map_err(|e| PrismError::InvalidCredential(format!("Invalid private key format: {}", e)))?;

    tracing::debug!(address = %signer.address(), "Signer loaded from private key");
    Ok(signer)
}

/// Derive a signer from a BIP-39 phrase at the given path.
pub fn signer_from_mnemonic(phrase: &str, path: &str) -> PrismResult<PrivateKeySigner> {
    tracing::debug!(derivation_path = %path, "Deriving signer from mnemonic");

    let signer = MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .derivation_path(path)
        .map_err(|e| PrismError::InvalidCredential(format!("Invalid derivation path: {}", e)))?
        .build()
        .map_err(|e| PrismError::InvalidCredential(format!("Invalid mnemonic: {}", e)))?;

    tracing::debug!(address = %signer.address(), "Signer derived from mnemonic");
    Ok(signer)
}
