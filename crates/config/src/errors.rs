use std::{io, path::PathBuf};

use lucid_chain_types::QuorumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("consensus.validators must not be empty")]
    EmptyValidatorSet,

    #[error("invalid consensus quorum: {0}")]
    InvalidQuorum(#[from] QuorumError),

    #[error("bridge.max_supply must be greater than zero")]
    ZeroMaxSupply,
}
