use std::sync::Arc;

use anyhow::Context;
use lucid_common::logging::{self, LoggingInitConfig, Rotation};
use lucid_config::{Config, LogRotation};
use lucid_db_store_sled::{open_sled_backend, SledBackend, SledDbConfig, SLED_NAME};
use tracing::*;

use crate::{CoreBuilder, LucidCore};

const SERVICE_NAME: &str = "lucid";

/// A core running over the on-disk sled store.
#[derive(Debug)]
pub struct SledCore {
    pub core: LucidCore,
    pub backend: Arc<SledBackend>,
}

/// Opens `<datadir>/sled/lucid` and builds a core over it.
///
/// The builder's collaborators are kept; only the backend is supplied here.
pub fn open_sled_core(builder: CoreBuilder, config: &Config) -> anyhow::Result<SledCore> {
    let db_config = SledDbConfig::new_with_constant_backoff(
        config.client.db_retry_count,
        config.client.db_retry_delay_ms,
    );
    let backend = open_sled_backend(&config.client.datadir, SLED_NAME, db_config)
        .with_context(|| format!("open sled store in {}", config.client.datadir.display()))?;
    let core = builder.build(backend.as_ref())?;

    info!(datadir = %config.client.datadir.display(), "opened sled store");
    Ok(SledCore { core, backend })
}

fn rotation(r: LogRotation) -> Rotation {
    match r {
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// Logging parameters derived from the `[logging]` section.
pub fn logging_init_config(config: &Config) -> LoggingInitConfig<'_> {
    LoggingInitConfig {
        service_base_name: SERVICE_NAME,
        service_label: None,
        log_dir: config.logging.file_directory.as_deref(),
        log_file_prefix: config.logging.file_name_prefix.as_deref(),
        rotation: config.logging.file_rotation.map(rotation),
        json_format: config.logging.json_format,
        default_log_prefix: SERVICE_NAME,
    }
}

/// Installs the global subscriber described by `config`.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    logging::init_logging_from_config(logging_init_config(config)).context("init logging")
}
