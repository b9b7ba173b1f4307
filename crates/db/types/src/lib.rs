//! Storage interfaces for the header chain and bridge state.

pub mod errors;
pub mod traits;
pub mod types;

#[cfg(feature = "stubs")]
pub mod stubs;

pub use errors::DbError;

pub type DbResult<T> = Result<T, DbError>;
