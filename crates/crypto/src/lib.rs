//! Signature verification for header finalization.
//!
//! [`SignatureVerifier`] is the entry point. It holds the backend selection and
//! delegates real checks to a [`ProofEvaluator`]. The evaluator shipped here is
//! [`IndexedEcdsaEvaluator`], an M-of-N scheme over recoverable secp256k1 ECDSA
//! signatures.

pub mod threshold_signature;
mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use threshold_signature::indexed::IndexedEcdsaEvaluator;
pub use verifier::{
    ProofEvaluator, ProofFormatError, PublicKeySet, SignatureVerifier, VerifierBackend,
};
