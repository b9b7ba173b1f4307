//! Validator membership and the signature-gated finalization of headers.

mod coordinator;
pub mod errors;
mod registry;

pub use coordinator::ConsensusCoordinator;
pub use registry::ValidatorRegistry;
