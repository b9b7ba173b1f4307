//! ECDSA signature set for threshold signatures (M-of-N).
//!
//! This module provides types and functions for verifying a set of ECDSA
//! signatures against a threshold configuration, and the [`IndexedEcdsaEvaluator`]
//! that plugs the scheme into the finalization verifier.

mod config;
mod errors;
mod evaluator;
mod pubkey;
mod signature;
mod verification;

pub use config::{ThresholdConfig, MAX_SIGNERS};
pub use errors::ThresholdSignatureError;
pub use evaluator::IndexedEcdsaEvaluator;
pub use pubkey::CompressedPublicKey;
pub use signature::{IndexedSignature, SignatureSet};
pub use verification::verify_threshold_signatures;
