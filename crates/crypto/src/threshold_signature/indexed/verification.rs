//! ECDSA signature verification for threshold signatures.

use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

use super::{SignatureSet, ThresholdConfig, ThresholdSignatureError};

/// Verifies a set of ECDSA signatures against a threshold configuration.
///
/// # Verification Steps
///
/// 1. Check that the number of signatures meets the threshold
/// 2. For each signature, check that the signer index is within bounds
/// 3. Recover the signing key and compare it against the key at that index
///
/// The [`SignatureSet`] type already guarantees signer indices are unique.
pub fn verify_threshold_signatures(
    config: &ThresholdConfig,
    signatures: &SignatureSet,
    message_hash: &[u8; 32],
) -> Result<(), ThresholdSignatureError> {
    if signatures.len() < config.threshold() as usize {
        return Err(ThresholdSignatureError::InsufficientSignatures {
            provided: signatures.len(),
            required: config.threshold() as usize,
        });
    }

    let message = Message::from_digest(*message_hash);

    for indexed_sig in signatures.signatures() {
        let expected_pubkey = config
            .keys()
            .get(indexed_sig.index() as usize)
            .ok_or(ThresholdSignatureError::SignerIndexOutOfBounds {
                index: indexed_sig.index(),
                max: config.len(),
            })?;

        let recovery_id = RecoveryId::from_i32(indexed_sig.recovery_id() as i32)
            .map_err(|_| ThresholdSignatureError::InvalidSignatureFormat)?;

        let recoverable_sig =
            RecoverableSignature::from_compact(&indexed_sig.compact(), recovery_id)
                .map_err(|_| ThresholdSignatureError::InvalidSignatureFormat)?;

        let recovered_pubkey = SECP256K1
            .recover_ecdsa(&message, &recoverable_sig)
            .map_err(|_| ThresholdSignatureError::InvalidSignature {
                index: indexed_sig.index(),
            })?;

        if &recovered_pubkey != expected_pubkey.as_inner() {
            return Err(ThresholdSignatureError::InvalidSignature {
                index: indexed_sig.index(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::*;
    use crate::{
        test_utils::{keypair, sign_recoverable},
        threshold_signature::indexed::IndexedSignature,
    };

    const MSG: [u8; 32] = [0xAB; 32];

    fn config(seeds: &[u8], threshold: u8) -> ThresholdConfig {
        let keys = seeds.iter().map(|s| keypair(*s).1).collect();
        ThresholdConfig::try_new(keys, NonZero::new(threshold).unwrap()).unwrap()
    }

    fn signed(index: u8, seed: u8, msg: &[u8; 32]) -> IndexedSignature {
        IndexedSignature::new(index, sign_recoverable(msg, &keypair(seed).0))
    }

    #[test]
    fn test_verify_threshold_signatures_success() {
        let config = config(&[1, 2, 3], 2);
        let set = SignatureSet::new(vec![signed(0, 1, &MSG), signed(2, 3, &MSG)]).unwrap();
        assert_eq!(verify_threshold_signatures(&config, &set, &MSG), Ok(()));
    }

    #[test]
    fn test_verify_insufficient_signatures() {
        let config = config(&[1, 2, 3], 2);
        let set = SignatureSet::new(vec![signed(1, 2, &MSG)]).unwrap();
        assert_eq!(
            verify_threshold_signatures(&config, &set, &MSG),
            Err(ThresholdSignatureError::InsufficientSignatures {
                provided: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_verify_wrong_message() {
        let config = config(&[1, 2], 2);
        let other = [0xCD; 32];
        let set = SignatureSet::new(vec![signed(0, 1, &MSG), signed(1, 2, &other)]).unwrap();
        assert_eq!(
            verify_threshold_signatures(&config, &set, &MSG),
            Err(ThresholdSignatureError::InvalidSignature { index: 1 })
        );
    }

    #[test]
    fn test_verify_wrong_signer() {
        let config = config(&[1, 2], 2);
        // Index 1 claims key 2 but was produced by key 1.
        let set = SignatureSet::new(vec![signed(0, 1, &MSG), signed(1, 1, &MSG)]).unwrap();
        assert_eq!(
            verify_threshold_signatures(&config, &set, &MSG),
            Err(ThresholdSignatureError::InvalidSignature { index: 1 })
        );
    }

    #[test]
    fn test_verify_index_out_of_bounds() {
        let config = config(&[1, 2], 2);
        let set = SignatureSet::new(vec![signed(0, 1, &MSG), signed(99, 2, &MSG)]).unwrap();
        assert!(matches!(
            verify_threshold_signatures(&config, &set, &MSG),
            Err(ThresholdSignatureError::SignerIndexOutOfBounds { index: 99, .. })
        ));
    }

    #[test]
    fn test_verify_bad_recovery_id() {
        let config = config(&[1], 1);
        let mut raw = sign_recoverable(&MSG, &keypair(1).0);
        raw[0] = 9;
        let set = SignatureSet::new(vec![IndexedSignature::new(0, raw)]).unwrap();
        assert_eq!(
            verify_threshold_signatures(&config, &set, &MSG),
            Err(ThresholdSignatureError::InvalidSignatureFormat)
        );
    }
}
