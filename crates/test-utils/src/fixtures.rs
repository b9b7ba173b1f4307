//! Deterministic values for tests that need to name things.

use lucid_chain_types::Header;
use lucid_identifiers::{Buf32, Identity, SequenceId};

use crate::ArbitraryGenerator;

/// Identity whose 20 bytes are all `b`.
pub fn identity(b: u8) -> Identity {
    Identity::from_bytes([b; 20])
}

/// Hash whose 32 bytes are all `b`.
pub fn hash(b: u8) -> Buf32 {
    Buf32::new([b; 32])
}

/// Header with a fixed proposer and an empty proof.
pub fn header(sequence_id: SequenceId, hash_byte: u8) -> Header {
    Header::new(
        sequence_id,
        1,
        Buf32::zero(),
        hash(hash_byte),
        identity(0xaa),
        Vec::new(),
    )
}

/// Header at `sequence_id` with every other field random.
pub fn random_header(arb: &mut ArbitraryGenerator, sequence_id: SequenceId) -> Header {
    let h: Header = arb.generate();
    Header::new(
        sequence_id,
        h.record_count(),
        *h.previous_hash(),
        *h.current_hash(),
        *h.proposer(),
        h.proof().to_vec(),
    )
}
