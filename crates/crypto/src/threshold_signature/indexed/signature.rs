//! Signature types for threshold signing.

use borsh::{BorshDeserialize, BorshSerialize};

use super::ThresholdSignatureError;

/// Length of a recoverable signature: `recovery_id || r || s`.
pub(crate) const RECOVERABLE_SIG_LEN: usize = 65;

/// An individual ECDSA signature with its signer index.
///
/// The signature is in recoverable format: `recovery_id || r || s`, which
/// is what hardware wallets emit natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedSignature {
    /// Index of the signer in the [`ThresholdConfig`](super::ThresholdConfig) key list.
    index: u8,
    signature: [u8; RECOVERABLE_SIG_LEN],
}

impl IndexedSignature {
    pub fn new(index: u8, signature: [u8; RECOVERABLE_SIG_LEN]) -> Self {
        Self { index, signature }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// The recovery id (first byte of the signature).
    pub fn recovery_id(&self) -> u8 {
        self.signature[0]
    }

    /// The compact signature (r || s) without recovery id.
    pub fn compact(&self) -> [u8; 64] {
        let mut compact = [0u8; 64];
        compact.copy_from_slice(&self.signature[1..]);
        compact
    }
}

impl BorshSerialize for IndexedSignature {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.index.serialize(writer)?;
        writer.write_all(&self.signature)
    }
}

impl BorshDeserialize for IndexedSignature {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let index = u8::deserialize_reader(reader)?;
        let mut signature = [0u8; RECOVERABLE_SIG_LEN];
        reader.read_exact(&mut signature)?;
        Ok(Self { index, signature })
    }
}

/// A set of indexed ECDSA signatures, sorted by signer index with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureSet {
    signatures: Vec<IndexedSignature>,
}

impl SignatureSet {
    /// Sorts the signatures by index and rejects duplicate indices.
    pub fn new(mut signatures: Vec<IndexedSignature>) -> Result<Self, ThresholdSignatureError> {
        signatures.sort_by_key(|s| s.index);

        if let Some(dup) = signatures.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(ThresholdSignatureError::DuplicateSignerIndex(dup[0].index));
        }

        Ok(Self { signatures })
    }

    pub fn signatures(&self) -> &[IndexedSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.signatures.iter().map(|s| s.index)
    }
}

impl BorshSerialize for SignatureSet {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        // Indices are unique u8s, so there are never more than 256 entries, but
        // the count prefix is a u8 and tops out at 255.
        let count = u8::try_from(self.signatures.len()).map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "too many signatures")
        })?;
        count.serialize(writer)?;
        for sig in &self.signatures {
            sig.serialize(writer)?;
        }
        Ok(())
    }
}

impl BorshDeserialize for SignatureSet {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let count = u8::deserialize_reader(reader)?;
        let signatures = (0..count)
            .map(|_| IndexedSignature::deserialize_reader(reader))
            .collect::<std::io::Result<Vec<_>>>()?;
        SignatureSet::new(signatures)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}
