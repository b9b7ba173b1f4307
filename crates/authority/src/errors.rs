use lucid_identifiers::Identity;
use thiserror::Error;

use crate::ErrorClass;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AuthorityError {
    #[error("{actor} is not the admin")]
    Unauthorized { actor: Identity },
}

impl AuthorityError {
    pub fn class(&self) -> ErrorClass {
        ErrorClass::Authorization
    }
}
