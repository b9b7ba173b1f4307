use thiserror::Error;

/// Errors parsing an [`Identity`](crate::Identity) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityParseError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("address must have 40 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("address is not valid hex: {0}")]
    InvalidHex(String),
}

/// Reasons a [`SourceTxId`](crate::SourceTxId) is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceTxIdError {
    #[error("source tx id is empty")]
    Empty,

    #[error("source tx id is {len} bytes, max is {max}")]
    TooLong { len: usize, max: usize },
}
