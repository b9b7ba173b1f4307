use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::SourceTxIdError;

/// Maximum accepted length of a source transaction id, in bytes.
pub const MAX_SOURCE_TX_ID_LEN: usize = 128;

/// Identifier of a burn transaction on the other ledger.
///
/// Opaque to this crate. Relayers pass whatever the source ledger uses as a
/// transaction reference, which is often but not always printable text.
#[derive(
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct SourceTxId(#[serde(with = "hex::serde")] Vec<u8>);

impl_opaque_thin_wrapper!(SourceTxId => Vec<u8>);

impl SourceTxId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Checks the id is non-empty and within [`MAX_SOURCE_TX_ID_LEN`].
    pub fn validate(&self) -> Result<(), SourceTxIdError> {
        if self.0.is_empty() {
            return Err(SourceTxIdError::Empty);
        }
        if self.0.len() > MAX_SOURCE_TX_ID_LEN {
            return Err(SourceTxIdError::TooLong {
                len: self.0.len(),
                max: MAX_SOURCE_TX_ID_LEN,
            });
        }
        Ok(())
    }
}

impl From<&str> for SourceTxId {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<&[u8]> for SourceTxId {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Display for SourceTxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_graphic()) => f.write_str(s),
            _ => write!(f, "0x{}", hex::encode(&self.0)),
        }
    }
}

impl fmt::Debug for SourceTxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceTxId({self})")
    }
}
