use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("schema version mismatch (expected {expected}, found {found})")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    #[error("corrupt key in {0}: expected {1} bytes, got {2}")]
    InvalidKeyLength(&'static str, usize, usize),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("codec error {0}")]
    CodecError(String),

    #[error("transaction error {0}")]
    TransactionError(String),

    #[error("{0}")]
    Other(String),
}

impl DbError {
    /// Whether the failure came from the storage engine rather than from the
    /// data, so that an identical retry might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, DbError::IoError(_) | DbError::TransactionError(_))
    }
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}
