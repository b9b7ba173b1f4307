//! Burn/mint asset bridge with relayer allowlisting and replay protection.

pub mod errors;
mod ledger;
mod relayers;
mod token;

pub use errors::BridgeError;
pub use ledger::BridgeLedger;
pub use relayers::RelayerSet;
pub use token::{InMemoryTokenLedger, InsufficientBalance, TokenLedger};
