use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse category of a rejected operation.
///
/// None of these are fatal to the process; every failure is scoped to the
/// call that produced it and leaves no partial state behind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Caller lacks the capability for the operation.
    Authorization,

    /// Input is malformed.
    Validation,

    /// The operation already happened.
    Conflict,

    /// A computed check failed.
    Integrity,

    /// The backing store failed.
    Storage,
}

impl ErrorClass {
    /// Whether retrying the identical call could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorClass::Storage)
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorClass::Authorization => "authorization",
            ErrorClass::Validation => "validation",
            ErrorClass::Conflict => "conflict",
            ErrorClass::Integrity => "integrity",
            ErrorClass::Storage => "storage",
        };
        f.write_str(s)
    }
}
