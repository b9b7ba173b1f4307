//! Node configuration loaded from TOML.

mod config;
mod errors;

pub use config::{
    BridgeConfig, ClientConfig, Config, ConsensusConfig, LogRotation, LoggingConfig,
};
pub use errors::ConfigError;
