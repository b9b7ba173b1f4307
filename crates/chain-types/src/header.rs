use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use lucid_identifiers::{Buf32, Identity, SequenceId};
use serde::{Deserialize, Serialize};

use crate::message::finalization_message;

/// A committed entry of the finality log.
///
/// Built by the sequencing agent, submitted once and stored verbatim. The
/// store never mutates a header after it is committed.
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
pub struct Header {
    sequence_id: SequenceId,
    record_count: u32,
    previous_hash: Buf32,
    current_hash: Buf32,
    proposer: Identity,
    #[serde(with = "hex::serde")]
    proof: Vec<u8>,
}

impl Header {
    pub fn new(
        sequence_id: SequenceId,
        record_count: u32,
        previous_hash: Buf32,
        current_hash: Buf32,
        proposer: Identity,
        proof: Vec<u8>,
    ) -> Self {
        Self {
            sequence_id,
            record_count,
            previous_hash,
            current_hash,
            proposer,
            proof,
        }
    }

    pub fn sequence_id(&self) -> SequenceId {
        self.sequence_id
    }

    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn previous_hash(&self) -> &Buf32 {
        &self.previous_hash
    }

    pub fn current_hash(&self) -> &Buf32 {
        &self.current_hash
    }

    pub fn proposer(&self) -> &Identity {
        &self.proposer
    }

    pub fn proof(&self) -> &[u8] {
        &self.proof
    }

    /// The digest validators sign over for this header.
    pub fn signing_message(&self) -> Buf32 {
        finalization_message(self.sequence_id, &self.current_hash)
    }
}
