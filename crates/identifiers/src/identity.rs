use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{buf::Buf20, errors::IdentityParseError};

/// Length of the hex body of an address, excluding the `0x` prefix.
const ADDRESS_HEX_LEN: usize = Buf20::LEN * 2;

/// An account address.
///
/// Every capability check (admin, sequencer, relayer) and every balance is
/// keyed by one of these. The text form is `0x` followed by 40 hex digits.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct Identity(Buf20);

impl_opaque_thin_wrapper!(Identity => Buf20);

impl Identity {
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Buf20::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Identity {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .ok_or_else(|| IdentityParseError::MissingPrefix(s.to_owned()))?;

        if body.len() != ADDRESS_HEX_LEN {
            return Err(IdentityParseError::InvalidLength(body.len()));
        }

        let mut out = [0u8; 20];
        hex::decode_to_slice(body, &mut out)
            .map_err(|e| IdentityParseError::InvalidHex(e.to_string()))?;
        Ok(Self::from_bytes(out))
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
