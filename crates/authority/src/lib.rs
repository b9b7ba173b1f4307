//! Admin capability shared by the consensus and bridge admin surfaces, plus
//! the error taxonomy every domain error reports into.

mod admin;
mod class;
mod errors;

pub use admin::AdminAuthority;
pub use class::ErrorClass;
pub use errors::AuthorityError;
