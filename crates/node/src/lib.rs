//! The lucid core: finality log and bridge ledger behind one facade.
//!
//! [`LucidCore`] wires the consensus coordinator and bridge ledger to a
//! storage backend, a shared admin capability and the event sinks. It exposes
//! the admin, finalization, bridge and query surfaces. [`CoreBuilder`]
//! assembles one from a validated [`Config`](lucid_config::Config).

mod builder;
mod core;
mod init;

pub use builder::CoreBuilder;
pub use core::LucidCore;
pub use init::{init_logging, logging_init_config, open_sled_core, SledCore};
