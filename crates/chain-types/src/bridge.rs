use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use lucid_identifiers::{Amount, Identity};
use serde::{Deserialize, Serialize};

/// What a consumed source transaction id was used for.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct MintRecord {
    pub account: Identity,
    pub amount: Amount,
}

impl MintRecord {
    pub fn new(account: Identity, amount: Amount) -> Self {
        Self { account, amount }
    }
}

/// Running bridge counters.
///
/// Inbound and outbound flows are kept apart; `total_minted` only ever counts
/// mints on this ledger and `total_bridged_out` only counts local burns.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct BridgeTotals {
    pub total_minted: Amount,
    pub total_bridged_out: Amount,
}

/// Snapshot returned by bridge stat queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStats {
    pub total_minted: Amount,
    pub headroom: Amount,
    pub total_bridged_out: Amount,
    pub max_supply: Amount,
}

impl BridgeStats {
    pub fn from_totals(totals: BridgeTotals, max_supply: Amount) -> Self {
        Self {
            total_minted: totals.total_minted,
            headroom: max_supply.saturating_sub(totals.total_minted),
            total_bridged_out: totals.total_bridged_out,
            max_supply,
        }
    }
}
