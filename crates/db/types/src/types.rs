//! Module for database local types

use lucid_identifiers::Amount;
use serde::Serialize;

/// Outcome of an atomic mint commit.
///
/// The rejected outcomes are not errors at this layer: the store only reports
/// which precondition failed, and leaves nothing written in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MintCommit {
    /// The source tx id was marked processed and the counters were bumped.
    Committed { total_minted: Amount },

    /// The source tx id had already been consumed.
    AlreadyProcessed,

    /// Minting would push the total past the supply cap.
    CapExceeded { total_minted: Amount },
}

impl MintCommit {
    pub fn is_committed(&self) -> bool {
        matches!(self, MintCommit::Committed { .. })
    }
}
