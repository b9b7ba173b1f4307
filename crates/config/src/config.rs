use std::{fs, path::Path, path::PathBuf};

use lucid_chain_types::{LinkagePolicy, Quorum};
use lucid_identifiers::{Amount, Identity};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default value for `datadir` in [`ClientConfig`].
const DEFAULT_DATADIR: &str = "lucid-data";

/// Default number of retries for a conflicting db transaction.
const DEFAULT_DB_RETRY_COUNT: u16 = 3;

/// Default DB retry delay in ms.
const DEFAULT_DB_RETRY_DELAY: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The data directory where database contents reside.
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,

    /// How many times to retry a db transaction that failed on storage.
    #[serde(default = "default_db_retry_count")]
    pub db_retry_count: u16,

    /// Db retry delay in ms.
    #[serde(default = "default_db_retry_delay")]
    pub db_retry_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            datadir: default_datadir(),
            db_retry_count: DEFAULT_DB_RETRY_COUNT,
            db_retry_delay_ms: DEFAULT_DB_RETRY_DELAY,
        }
    }
}

fn default_datadir() -> PathBuf {
    DEFAULT_DATADIR.into()
}

fn default_db_retry_count() -> u16 {
    DEFAULT_DB_RETRY_COUNT
}

fn default_db_retry_delay() -> u64 {
    DEFAULT_DB_RETRY_DELAY
}

fn default_quorum_numerator() -> u32 {
    Quorum::TWO_THIRDS.numerator()
}

fn default_quorum_denominator() -> u32 {
    Quorum::TWO_THIRDS.denominator()
}

/// Log file rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Use JSON format for logs instead of compact format.
    #[serde(default)]
    pub json_format: bool,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_directory: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_rotation: Option<LogRotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    /// Identity holding the admin capability at startup.
    pub admin: Identity,

    /// Initial validator set. Members double as authorized sequencers.
    pub validators: Vec<Identity>,

    #[serde(default = "default_quorum_numerator")]
    pub quorum_numerator: u32,

    #[serde(default = "default_quorum_denominator")]
    pub quorum_denominator: u32,

    #[serde(default)]
    pub linkage: LinkagePolicy,

    /// Start with the always-true verifier override enabled.
    #[serde(default)]
    pub verifier_override: bool,
}

impl ConsensusConfig {
    pub fn quorum(&self) -> Result<Quorum, ConfigError> {
        Ok(Quorum::try_new(
            self.quorum_numerator,
            self.quorum_denominator,
        )?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Hard cap on the cumulative amount minted from the other ledger.
    ///
    /// Accepts a TOML integer, or a decimal string for values past `i64`.
    #[serde(with = "amount_serde")]
    pub max_supply: Amount,

    #[serde(default)]
    pub relayers: Vec<Identity>,
}

/// TOML has no integers past `i64`, so small caps stay integers and larger
/// ones fall back to decimal strings.
mod amount_serde {
    use lucid_identifiers::Amount;
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(v: &Amount, s: S) -> Result<S::Ok, S::Error> {
        match i64::try_from(*v) {
            Ok(small) => s.serialize_i64(small),
            Err(_) => s.serialize_str(&v.to_string()),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Amount, D::Error> {
        lucid_identifiers::amount_serde::deserialize(d)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,

    pub consensus: ConsensusConfig,

    pub bridge: BridgeConfig,
}

impl Config {
    /// Reads, parses and validates the config at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consensus.validators.is_empty() {
            return Err(ConfigError::EmptyValidatorSet);
        }
        self.consensus.quorum()?;
        if self.bridge.max_supply == 0 {
            return Err(ConfigError::ZeroMaxSupply);
        }
        Ok(())
    }
}
