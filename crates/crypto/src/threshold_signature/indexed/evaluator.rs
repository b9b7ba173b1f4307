//! [`ProofEvaluator`] over indexed ECDSA threshold signatures.

use tracing::debug;

use super::{verify_threshold_signatures, SignatureSet, ThresholdConfig};
use crate::verifier::{ProofEvaluator, ProofFormatError, PublicKeySet};

/// Evaluates proofs that are borsh-encoded [`SignatureSet`]s against a
/// borsh-encoded [`ThresholdConfig`] key set.
///
/// Inputs that do not decode are reported as [`ProofFormatError`]. Inputs
/// that decode but do not carry enough valid signatures evaluate to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedEcdsaEvaluator;

impl IndexedEcdsaEvaluator {
    pub const NAME: &'static str = "indexed-ecdsa";
}

impl ProofEvaluator for IndexedEcdsaEvaluator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(
        &self,
        keys: &PublicKeySet,
        message: &[u8],
        proof: &[u8],
    ) -> Result<bool, ProofFormatError> {
        let config: ThresholdConfig = borsh::from_slice(keys.as_bytes())
            .map_err(|e| ProofFormatError::MalformedKeySet(e.to_string()))?;

        let signatures: SignatureSet = borsh::from_slice(proof)
            .map_err(|e| ProofFormatError::MalformedProof(e.to_string()))?;

        let message_hash: &[u8; 32] = message
            .try_into()
            .map_err(|_| ProofFormatError::MalformedMessage { len: message.len() })?;

        match verify_threshold_signatures(&config, &signatures, message_hash) {
            Ok(()) => Ok(true),
            Err(e) if e.is_format_error() => Err(ProofFormatError::MalformedProof(e.to_string())),
            Err(e) => {
                debug!(err = %e, "threshold signature check failed");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_proof, key_set, keypair};

    const MSG: [u8; 32] = [0x11; 32];

    #[test]
    fn test_evaluate_quorum_met() {
        let keys = key_set(&[1, 2, 3], 2);
        let proof = build_proof(&MSG, &[(0, 1), (1, 2)]);
        assert_eq!(IndexedEcdsaEvaluator.evaluate(&keys, &MSG, &proof), Ok(true));
    }

    #[test]
    fn test_evaluate_below_threshold_is_clean_false() {
        let keys = key_set(&[1, 2, 3], 3);
        let proof = build_proof(&MSG, &[(0, 1), (1, 2)]);
        assert_eq!(IndexedEcdsaEvaluator.evaluate(&keys, &MSG, &proof), Ok(false));
    }

    #[test]
    fn test_evaluate_forged_signature_is_clean_false() {
        let keys = key_set(&[1, 2], 1);
        // Signed by a key outside the set.
        let proof = build_proof(&MSG, &[(0, 9)]);
        assert_eq!(IndexedEcdsaEvaluator.evaluate(&keys, &MSG, &proof), Ok(false));
        assert_ne!(keypair(9).1, keypair(1).1);
    }

    #[test]
    fn test_evaluate_garbage_proof_is_format_error() {
        let keys = key_set(&[1], 1);
        let res = IndexedEcdsaEvaluator.evaluate(&keys, &MSG, b"garbage");
        assert!(matches!(res, Err(ProofFormatError::MalformedProof(_))));
    }

    #[test]
    fn test_evaluate_garbage_keys_is_format_error() {
        let proof = build_proof(&MSG, &[(0, 1)]);
        let keys = PublicKeySet::new(vec![0xff; 7]);
        let res = IndexedEcdsaEvaluator.evaluate(&keys, &MSG, &proof);
        assert!(matches!(res, Err(ProofFormatError::MalformedKeySet(_))));
    }

    #[test]
    fn test_evaluate_short_message_is_format_error() {
        let keys = key_set(&[1], 1);
        let proof = build_proof(&MSG, &[(0, 1)]);
        let res = IndexedEcdsaEvaluator.evaluate(&keys, &MSG[..16], &proof);
        assert_eq!(res, Err(ProofFormatError::MalformedMessage { len: 16 }));
    }
}
