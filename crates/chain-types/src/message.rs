use lucid_identifiers::{Buf32, SequenceId};
use sha2::{Digest, Sha256};

/// Domain tag mixed into every finalization digest.
pub const FINALIZATION_DOMAIN: &[u8] = b"lucid/finalize/v1";

/// Derives the message validators attest to when finalizing a header.
///
/// `sha256(FINALIZATION_DOMAIN || be64(sequence_id) || current_hash)`
pub fn finalization_message(sequence_id: SequenceId, current_hash: &Buf32) -> Buf32 {
    let mut hasher = Sha256::new();
    hasher.update(FINALIZATION_DOMAIN);
    hasher.update(sequence_id.to_be_bytes());
    hasher.update(current_hash.as_slice());
    Buf32::new(hasher.finalize().into())
}
