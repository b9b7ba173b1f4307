//! Error types for threshold signature operations.

use thiserror::Error;

/// Errors that can occur during threshold signature operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdSignatureError {
    /// Not enough signatures to meet the threshold.
    #[error("insufficient signatures: provided {provided}, required {required}")]
    InsufficientSignatures { provided: usize, required: usize },

    /// Invalid threshold value.
    #[error("invalid threshold: {threshold} exceeds total keys {total_keys}")]
    InvalidThreshold { threshold: u8, total_keys: usize },

    /// More keys than a `u8` signer index can address.
    #[error("too many signers: {0}")]
    TooManySigners(usize),

    /// The same key appears twice in a configuration.
    #[error("duplicate signer key")]
    DuplicateKey,

    /// Signature does not recover to the key at its index.
    #[error("invalid signature at index {index}")]
    InvalidSignature { index: u8 },

    /// Recovery id or compact signature bytes could not be parsed.
    #[error("invalid signature format")]
    InvalidSignatureFormat,

    /// Duplicate signer index in signature set.
    #[error("duplicate signer index: {0}")]
    DuplicateSignerIndex(u8),

    /// Signer index out of bounds.
    #[error("signer index {index} out of bounds (max: {max})")]
    SignerIndexOutOfBounds { index: u8, max: usize },
}

impl ThresholdSignatureError {
    /// Whether the error stems from undecodable input rather than a failed check.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignatureFormat
                | Self::DuplicateSignerIndex(_)
                | Self::DuplicateKey
                | Self::InvalidThreshold { .. }
                | Self::TooManySigners(_)
        )
    }
}
