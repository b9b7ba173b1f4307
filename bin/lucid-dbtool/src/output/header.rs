//! Header formatting implementations

use lucid_chain_types::Header;
use lucid_identifiers::{Buf32, Identity, SequenceId};
use serde::Serialize;

use super::{
    helpers::{porcelain_field, porcelain_optional},
    traits::Formattable,
};

/// Header information displayed to the user
#[derive(Serialize)]
pub(crate) struct HeaderInfo<'a> {
    pub sequence_id: SequenceId,
    pub record_count: u32,
    pub previous_hash: &'a Buf32,
    pub current_hash: &'a Buf32,
    pub proposer: &'a Identity,
    pub proof_len: usize,
}

impl<'a> HeaderInfo<'a> {
    pub(crate) fn from_header(header: &'a Header) -> Self {
        Self {
            sequence_id: header.sequence_id(),
            record_count: header.record_count(),
            previous_hash: header.previous_hash(),
            current_hash: header.current_hash(),
            proposer: header.proposer(),
            proof_len: header.proof().len(),
        }
    }
}

/// Finality log summary displayed to the user
#[derive(Serialize)]
pub(crate) struct HeadersSummaryInfo {
    pub header_count: u64,
    pub latest_sequence: Option<SequenceId>,
    pub latest_current_hash: Option<Buf32>,
}

impl Formattable for HeaderInfo<'_> {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("sequence_id", self.sequence_id),
            porcelain_field("record_count", self.record_count),
            porcelain_field("previous_hash", format!("{:?}", self.previous_hash)),
            porcelain_field("current_hash", format!("{:?}", self.current_hash)),
            porcelain_field("proposer", self.proposer),
            porcelain_field("proof_len", self.proof_len),
        ]
        .join("\n")
    }
}

impl Formattable for HeadersSummaryInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("header_count", self.header_count),
            porcelain_field("latest_sequence", porcelain_optional(self.latest_sequence)),
            porcelain_field(
                "latest_current_hash",
                porcelain_optional(self.latest_current_hash.as_ref().map(|h| format!("{h:?}"))),
            ),
        ]
        .join("\n")
    }
}
