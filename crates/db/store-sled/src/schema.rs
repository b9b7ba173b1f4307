//! Typed table definitions over raw sled trees.

use std::fmt::Debug;

use borsh::{BorshDeserialize, BorshSerialize};
use lucid_db_types::{DbError, DbResult};
use lucid_identifiers::{Identity, SourceTxId};

/// A named tree with typed keys and values.
pub(crate) trait Schema: Debug + Send + Sync + Sized + 'static {
    const TREE_NAME: &'static str;

    type Key: KeyCodec;
    type Value: ValueCodec;
}

pub(crate) trait KeyCodec: Sized {
    fn encode_key(&self) -> Vec<u8>;
    fn decode_key(buf: &[u8]) -> DbResult<Self>;
}

pub(crate) trait ValueCodec: Sized {
    fn encode_value(&self) -> DbResult<Vec<u8>>;
    fn decode_value(buf: &[u8]) -> DbResult<Self>;
}

impl<T: BorshSerialize + BorshDeserialize> ValueCodec for T {
    fn encode_value(&self) -> DbResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|e| DbError::CodecError(e.to_string()))
    }

    fn decode_value(buf: &[u8]) -> DbResult<Self> {
        borsh::from_slice(buf).map_err(|e| DbError::CodecError(e.to_string()))
    }
}

// Big-endian so sled's byte order matches numeric order.
impl KeyCodec for u64 {
    fn encode_key(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        let arr = <[u8; 8]>::try_from(buf)
            .map_err(|_| DbError::InvalidKeyLength("u64", 8, buf.len()))?;
        Ok(u64::from_be_bytes(arr))
    }
}

impl KeyCodec for u8 {
    fn encode_key(&self) -> Vec<u8> {
        vec![*self]
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        match buf {
            [b] => Ok(*b),
            _ => Err(DbError::InvalidKeyLength("u8", 1, buf.len())),
        }
    }
}

impl KeyCodec for String {
    fn encode_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        String::from_utf8(buf.to_vec()).map_err(|e| DbError::CodecError(e.to_string()))
    }
}

impl KeyCodec for Identity {
    fn encode_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        let arr = <[u8; 20]>::try_from(buf)
            .map_err(|_| DbError::InvalidKeyLength("Identity", 20, buf.len()))?;
        Ok(Identity::from_bytes(arr))
    }
}

impl KeyCodec for SourceTxId {
    fn encode_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        Ok(SourceTxId::from(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_keys_sort_numerically() {
        let mut keys: Vec<Vec<u8>> = [300u64, 2, 70_000, 1]
            .iter()
            .map(KeyCodec::encode_key)
            .collect();
        keys.sort();
        let decoded: Vec<u64> = keys.iter().map(|k| u64::decode_key(k).unwrap()).collect();
        assert_eq!(decoded, vec![1, 2, 300, 70_000]);
    }

    #[test]
    fn test_identity_key_rejects_bad_length() {
        let err = Identity::decode_key(&[0u8; 19]).unwrap_err();
        assert_eq!(err, DbError::InvalidKeyLength("Identity", 20, 19));
    }
}
