use lucid_authority::{AuthorityError, ErrorClass};
use lucid_chain_types::QuorumError;
use lucid_crypto::ProofFormatError;
use lucid_db_types::DbError;
use lucid_identifiers::{Buf32, Identity, SequenceId};
use thiserror::Error;

/// Failures of validator set administration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Unauthorized(#[from] AuthorityError),

    #[error("validator set must not be empty")]
    EmptyMemberSet,

    #[error("{0} is already a member")]
    MemberAlreadyExists(Identity),

    #[error("{0} is not a member")]
    MemberNotFound(Identity),

    #[error("cannot remove {0}, the last remaining member")]
    LastMemberProtected(Identity),

    #[error("invalid quorum: {0}")]
    InvalidQuorum(#[from] QuorumError),
}

impl RegistryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            RegistryError::Unauthorized(_) => ErrorClass::Authorization,
            RegistryError::EmptyMemberSet | RegistryError::InvalidQuorum(_) => {
                ErrorClass::Validation
            }
            RegistryError::MemberAlreadyExists(_) | RegistryError::MemberNotFound(_) => {
                ErrorClass::Conflict
            }
            RegistryError::LastMemberProtected(_) => ErrorClass::Integrity,
        }
    }
}

/// Failures of [`finalize`](crate::ConsensusCoordinator::finalize). Every one
/// of them leaves the header chain untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FinalizeError {
    #[error("{0} is not an authorized sequencer")]
    UnauthorizedSequencer(Identity),

    #[error("invalid proof format: {0}")]
    InvalidProofFormat(#[from] ProofFormatError),

    #[error("signature check failed for header {0}")]
    SignatureInvalid(SequenceId),

    #[error("header {sequence_id} names previous hash {found:?}, predecessor has {expected:?}")]
    PreviousHashMismatch {
        sequence_id: SequenceId,
        expected: Buf32,
        found: Buf32,
    },

    #[error("header {0} already exists")]
    HeaderExists(SequenceId),

    #[error("db: {0}")]
    Db(#[from] DbError),
}

impl FinalizeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            FinalizeError::UnauthorizedSequencer(_) => ErrorClass::Authorization,
            FinalizeError::InvalidProofFormat(_) => ErrorClass::Validation,
            FinalizeError::SignatureInvalid(_) | FinalizeError::PreviousHashMismatch { .. } => {
                ErrorClass::Integrity
            }
            FinalizeError::HeaderExists(_) => ErrorClass::Conflict,
            FinalizeError::Db(_) => ErrorClass::Storage,
        }
    }
}
