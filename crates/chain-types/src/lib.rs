//! Data types shared by the finality log and the bridge.

mod bridge;
mod header;
mod linkage;
mod message;
mod quorum;

pub use bridge::{BridgeStats, BridgeTotals, MintRecord};
pub use header::Header;
pub use linkage::LinkagePolicy;
pub use message::{finalization_message, FINALIZATION_DOMAIN};
pub use quorum::{Quorum, QuorumError};
