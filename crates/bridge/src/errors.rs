use lucid_authority::{AuthorityError, ErrorClass};
use lucid_db_types::DbError;
use lucid_identifiers::{Amount, Identity, SourceTxId, SourceTxIdError};
use thiserror::Error;

use crate::InsufficientBalance;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error(transparent)]
    Unauthorized(#[from] AuthorityError),

    #[error("{0} is not an authorized relayer")]
    UnauthorizedRelayer(Identity),

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("destination must not be empty")]
    InvalidDestination,

    #[error("invalid source tx id: {0}")]
    InvalidSourceTxId(#[from] SourceTxIdError),

    #[error(transparent)]
    InsufficientBalance(#[from] InsufficientBalance),

    #[error("source tx {0} was already processed")]
    TransactionAlreadyProcessed(SourceTxId),

    #[error("minting {requested} would exceed max supply {max_supply} (minted {total_minted})")]
    SupplyCapExceeded {
        requested: Amount,
        total_minted: Amount,
        max_supply: Amount,
    },

    #[error("db: {0}")]
    Db(#[from] DbError),
}

impl BridgeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            BridgeError::Unauthorized(_) | BridgeError::UnauthorizedRelayer(_) => {
                ErrorClass::Authorization
            }
            BridgeError::InvalidAmount
            | BridgeError::InvalidDestination
            | BridgeError::InvalidSourceTxId(_) => ErrorClass::Validation,
            BridgeError::TransactionAlreadyProcessed(_) => ErrorClass::Conflict,
            BridgeError::InsufficientBalance(_) | BridgeError::SupplyCapExceeded { .. } => {
                ErrorClass::Integrity
            }
            BridgeError::Db(_) => ErrorClass::Storage,
        }
    }
}
