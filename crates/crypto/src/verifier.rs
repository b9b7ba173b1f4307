//! Backend selection for finalization signature checks.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Encoded key material a proof is checked against.
///
/// Opaque to the verifier; each [`ProofEvaluator`] defines its own encoding.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PublicKeySet(Vec<u8>);

impl PublicKeySet {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeySet({})", hex::encode(&self.0))
    }
}

/// Proof or key input that could not be interpreted at all.
///
/// Kept apart from a clean `false`, which means the input was well formed but
/// did not prove what it claimed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofFormatError {
    #[error("malformed key set: {0}")]
    MalformedKeySet(String),

    #[error("malformed proof: {0}")]
    MalformedProof(String),

    #[error("message must be a 32-byte digest, got {len} bytes")]
    MalformedMessage { len: usize },
}

/// A cryptographic scheme able to check an aggregate proof.
pub trait ProofEvaluator: Send + Sync + fmt::Debug {
    /// Short stable name, reported in events and logs.
    fn name(&self) -> &'static str;

    /// Returns whether `proof` shows the key set attested to `message`.
    fn evaluate(
        &self,
        keys: &PublicKeySet,
        message: &[u8],
        proof: &[u8],
    ) -> Result<bool, ProofFormatError>;
}

/// Which backend answers verification requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifierBackend {
    /// Delegate to the configured [`ProofEvaluator`].
    Native,

    /// Accept everything. Only honoured while the admin override is on; this
    /// disables all signature checking.
    AlwaysTrue,
}

impl fmt::Display for VerifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierBackend::Native => f.write_str("native"),
            VerifierBackend::AlwaysTrue => f.write_str("always_true"),
        }
    }
}

/// Checks aggregate proofs for header finalization.
///
/// Fails closed: `AlwaysTrue` without the override latch set, or `Native`
/// without an evaluator, both reject every proof.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    backend: VerifierBackend,
    override_enabled: bool,
    evaluator: Option<Arc<dyn ProofEvaluator>>,
}

impl SignatureVerifier {
    /// Native verifier backed by `evaluator`.
    pub fn new(evaluator: Arc<dyn ProofEvaluator>) -> Self {
        Self {
            backend: VerifierBackend::Native,
            override_enabled: false,
            evaluator: Some(evaluator),
        }
    }

    /// Native verifier with no evaluator yet. Rejects everything.
    pub fn unconfigured() -> Self {
        Self {
            backend: VerifierBackend::Native,
            override_enabled: false,
            evaluator: None,
        }
    }

    pub fn backend(&self) -> VerifierBackend {
        self.backend
    }

    pub fn override_enabled(&self) -> bool {
        self.override_enabled
    }

    /// Name of the native evaluator, if one is configured.
    pub fn evaluator_name(&self) -> Option<&'static str> {
        self.evaluator.as_ref().map(|e| e.name())
    }

    /// Toggles the bootstrap override.
    ///
    /// Enabling selects [`VerifierBackend::AlwaysTrue`]; disabling returns to
    /// [`VerifierBackend::Native`].
    pub fn set_override(&mut self, enabled: bool) {
        self.override_enabled = enabled;
        self.backend = if enabled {
            warn!("signature verification override enabled, all proofs will be accepted");
            VerifierBackend::AlwaysTrue
        } else {
            VerifierBackend::Native
        };
    }

    /// Re-points the native backend at a different evaluator.
    pub fn set_evaluator(&mut self, evaluator: Arc<dyn ProofEvaluator>) {
        self.evaluator = Some(evaluator);
    }

    /// Checks `proof` over `message` against `keys`.
    ///
    /// Returns `Ok(false)` for a well-formed proof that does not verify and
    /// [`ProofFormatError`] when the evaluator cannot decode its inputs.
    pub fn verify(
        &self,
        keys: &PublicKeySet,
        message: &[u8],
        proof: &[u8],
    ) -> Result<bool, ProofFormatError> {
        match self.backend {
            VerifierBackend::AlwaysTrue => Ok(self.override_enabled),
            VerifierBackend::Native => match &self.evaluator {
                Some(evaluator) => evaluator.evaluate(keys, message, proof),
                None => Ok(false),
            },
        }
    }
}
