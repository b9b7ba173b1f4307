//! Compressed secp256k1 public key used as a threshold signer identity.

use std::{
    hash::{Hash, Hasher},
    ops::Deref,
};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use secp256k1::{PublicKey, SecretKey, SECP256K1};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A compressed secp256k1 public key (33 bytes).
///
/// ECDSA works with either y-parity, so unlike x-only keys no parity is
/// enforced. The wire form is the 33-byte SEC1 compressed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedPublicKey(PublicKey);

impl CompressedPublicKey {
    /// Parses a 33-byte compressed point (0x02 or 0x03 prefix).
    pub fn from_slice(data: &[u8]) -> Result<Self, secp256k1::Error> {
        PublicKey::from_slice(data).map(Self)
    }

    pub fn as_inner(&self) -> &PublicKey {
        &self.0
    }

    pub fn serialize(&self) -> [u8; 33] {
        self.0.serialize()
    }
}

impl Deref for CompressedPublicKey {
    type Target = PublicKey;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<PublicKey> for CompressedPublicKey {
    fn from(pk: PublicKey) -> Self {
        Self(pk)
    }
}

impl Hash for CompressedPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}

impl BorshSerialize for CompressedPublicKey {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.0.serialize())
    }
}

impl BorshDeserialize for CompressedPublicKey {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut bytes = [0u8; 33];
        reader.read_exact(&mut bytes)?;
        Self::from_slice(&bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}

impl Serialize for CompressedPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0.serialize()))
    }
}

impl<'de> Deserialize<'de> for CompressedPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as DeError;

        let hex_string = <String as Deserialize>::deserialize(deserializer)?;
        let bytes = hex::decode(hex_string.trim_start_matches("0x")).map_err(DeError::custom)?;
        Self::from_slice(&bytes).map_err(DeError::custom)
    }
}

impl<'a> Arbitrary<'a> for CompressedPublicKey {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut sk_bytes = [0u8; 32];
        u.fill_buffer(&mut sk_bytes)?;
        if sk_bytes.iter().all(|&b| b == 0) {
            sk_bytes[31] = 1;
        }
        let sk = SecretKey::from_slice(&sk_bytes).map_err(|_| arbitrary::Error::IncorrectFormat)?;
        Ok(Self(PublicKey::from_secret_key(SECP256K1, &sk)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(seed: u8) -> CompressedPublicKey {
        let sk = SecretKey::from_slice(&[seed.max(1); 32]).unwrap();
        CompressedPublicKey::from(PublicKey::from_secret_key(SECP256K1, &sk))
    }

    #[test]
    fn test_borsh_is_33_bytes() {
        let pk = key(7);
        let bytes = borsh::to_vec(&pk).unwrap();
        assert_eq!(bytes.len(), 33);
        assert_eq!(borsh::from_slice::<CompressedPublicKey>(&bytes).unwrap(), pk);
    }

    #[test]
    fn test_borsh_rejects_invalid_point() {
        let bytes = [0x05u8; 33];
        assert!(borsh::from_slice::<CompressedPublicKey>(&bytes).is_err());
    }

    #[test]
    fn test_serde_hex() {
        let pk = key(3);
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json.len(), 33 * 2 + 2);
        let back: CompressedPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }
}
