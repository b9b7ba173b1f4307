//! Core identifier types and buffer types.

#[macro_use]
mod macros;

pub mod amount_serde;
mod buf;
mod errors;
mod identity;
mod source_tx;

pub use buf::{Buf20, Buf32};
pub use errors::{IdentityParseError, SourceTxIdError};
pub use identity::Identity;
pub use source_tx::{SourceTxId, MAX_SOURCE_TX_ID_LEN};

/// Position of a header in the finality log.
pub type SequenceId = u64;

/// Token quantity on either side of the bridge.
pub type Amount = u128;
