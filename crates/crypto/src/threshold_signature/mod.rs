//! Threshold signature schemes.
//!
//! - `indexed`: individual ECDSA signatures tagged with the signer's index into a key list
//!   (M-of-N threshold)

pub mod indexed;

pub use indexed::{
    verify_threshold_signatures, CompressedPublicKey, IndexedSignature, SignatureSet,
    ThresholdConfig, ThresholdSignatureError,
};
