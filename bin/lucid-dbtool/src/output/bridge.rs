//! Bridge state formatting implementations

use lucid_chain_types::BridgeStats;
use lucid_identifiers::{Amount, Identity, SourceTxId};
use serde::Serialize;

use super::{helpers::porcelain_field, traits::Formattable};

#[derive(Serialize)]
pub(crate) struct BridgeStatsInfo {
    #[serde(flatten)]
    pub stats: BridgeStats,
    pub processed_count: u64,
}

#[derive(Serialize)]
pub(crate) struct MintRecordInfo<'a> {
    pub source_tx_id: &'a SourceTxId,
    pub account: Identity,
    pub amount: Amount,
}

#[derive(Serialize)]
pub(crate) struct BridgedBalanceInfo<'a> {
    pub account: &'a Identity,
    pub bridged_balance: Amount,
}

impl Formattable for BridgeStatsInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("total_minted", self.stats.total_minted),
            porcelain_field("headroom", self.stats.headroom),
            porcelain_field("max_supply", self.stats.max_supply),
            porcelain_field("total_bridged_out", self.stats.total_bridged_out),
            porcelain_field("processed_count", self.processed_count),
        ]
        .join("\n")
    }
}

impl Formattable for MintRecordInfo<'_> {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("source_tx_id", self.source_tx_id),
            porcelain_field("account", self.account),
            porcelain_field("amount", self.amount),
        ]
        .join("\n")
    }
}

impl Formattable for BridgedBalanceInfo<'_> {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("account", self.account),
            porcelain_field("bridged_balance", self.bridged_balance),
        ]
        .join("\n")
    }
}
