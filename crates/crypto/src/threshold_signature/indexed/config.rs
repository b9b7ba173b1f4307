//! Signer set and threshold for indexed ECDSA signatures.

use std::{collections::HashSet, num::NonZero};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use super::{CompressedPublicKey, ThresholdSignatureError};

/// Maximum number of signers allowed in a threshold configuration.
///
/// The signer index is a `u8`, which addresses at most 256 keys.
pub const MAX_SIGNERS: usize = 256;

/// Who can sign (`keys`) and how many must sign (`threshold`).
///
/// Construction validates the key list, and so does borsh decoding, so a
/// value of this type is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdConfig")]
pub struct ThresholdConfig {
    keys: Vec<CompressedPublicKey>,
    threshold: NonZero<u8>,
}

#[derive(Deserialize)]
struct RawThresholdConfig {
    keys: Vec<CompressedPublicKey>,
    threshold: NonZero<u8>,
}

impl TryFrom<RawThresholdConfig> for ThresholdConfig {
    type Error = ThresholdSignatureError;

    fn try_from(raw: RawThresholdConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.keys, raw.threshold)
    }
}

impl ThresholdConfig {
    /// Creates a new threshold configuration.
    ///
    /// # Errors
    ///
    /// - `TooManySigners` if more than [`MAX_SIGNERS`] keys are given
    /// - `DuplicateKey` if a key appears twice
    /// - `InvalidThreshold` if the threshold exceeds the number of keys
    pub fn try_new(
        keys: Vec<CompressedPublicKey>,
        threshold: NonZero<u8>,
    ) -> Result<Self, ThresholdSignatureError> {
        if keys.len() > MAX_SIGNERS {
            return Err(ThresholdSignatureError::TooManySigners(keys.len()));
        }

        let unique: HashSet<&CompressedPublicKey> = keys.iter().collect();
        if unique.len() != keys.len() {
            return Err(ThresholdSignatureError::DuplicateKey);
        }

        if threshold.get() as usize > keys.len() {
            return Err(ThresholdSignatureError::InvalidThreshold {
                threshold: threshold.get(),
                total_keys: keys.len(),
            });
        }

        Ok(Self { keys, threshold })
    }

    pub fn keys(&self) -> &[CompressedPublicKey] {
        &self.keys
    }

    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl BorshSerialize for ThresholdConfig {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        BorshSerialize::serialize(&self.keys, writer)?;
        BorshSerialize::serialize(&self.threshold.get(), writer)
    }
}

impl BorshDeserialize for ThresholdConfig {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let keys = Vec::<CompressedPublicKey>::deserialize_reader(reader)?;
        let threshold = u8::deserialize_reader(reader)?;
        let threshold = NonZero::new(threshold).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "zero threshold")
        })?;
        Self::try_new(keys, threshold)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}
