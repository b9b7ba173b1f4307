//! Serde helpers for [`Amount`] fields.
//!
//! Amounts are written as decimal strings, since neither JSON consumers nor
//! serde's buffered formats (internally tagged enums, flattened structs) carry
//! `u128` reliably. Reading accepts either a decimal string or an integer.
//!
//! Use with `#[serde(with = "lucid_identifiers::amount_serde")]`.

use serde::{de::Error, Deserialize, Deserializer, Serializer};

use crate::Amount;

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Int(u64),
    Str(String),
}

pub fn serialize<S: Serializer>(v: &Amount, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(v)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Amount, D::Error> {
    match AmountRepr::deserialize(d)? {
        AmountRepr::Int(v) => Ok(v.into()),
        AmountRepr::Str(s) => s.trim().parse().map_err(D::Error::custom),
    }
}
