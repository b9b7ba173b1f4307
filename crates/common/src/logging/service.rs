//! Logging initialization from node configuration.

use std::path::Path;

use tracing::info;
use tracing_appender::rolling::Rotation;

use super::{format_service_name, init, FileLoggingConfig, LoggerConfig, LoggingError};

/// Configuration parameters for logging initialization.
#[derive(Debug)]
pub struct LoggingInitConfig<'a> {
    /// Base service name
    pub service_base_name: &'a str,
    /// Optional service label to append like prod or dev
    pub service_label: Option<&'a str>,
    /// Directory for file-based logging
    pub log_dir: Option<&'a Path>,
    /// Prefix for log file names
    pub log_file_prefix: Option<&'a str>,
    /// File rotation, daily if unset
    pub rotation: Option<Rotation>,
    /// Use JSON format instead of compact
    pub json_format: bool,
    /// Default log file prefix if not specified in config
    pub default_log_prefix: &'a str,
}

/// Builds the [`LoggerConfig`] without installing anything.
pub fn build_logger_config(config: &LoggingInitConfig<'_>) -> LoggerConfig {
    let service_name = format_service_name(config.service_base_name, config.service_label);

    let mut lconfig = LoggerConfig::new(service_name).with_json_logging(config.json_format);

    if let Some(dir) = config.log_dir {
        let prefix = config
            .log_file_prefix
            .unwrap_or(config.default_log_prefix)
            .to_owned();
        let file_config = FileLoggingConfig::new(dir.to_path_buf(), prefix)
            .with_rotation(config.rotation.clone().unwrap_or(Rotation::DAILY))
            .with_json_format(config.json_format);
        lconfig = lconfig.with_file_logging(file_config);
    }

    lconfig
}

/// Initialize logging from configuration with all standard setup.
pub fn init_logging_from_config(config: LoggingInitConfig<'_>) -> Result<(), LoggingError> {
    let lconfig = build_logger_config(&config);
    let file_logging_config = lconfig.file_logging_config.clone();

    init(lconfig)?;

    if let Some(file_config) = &file_logging_config {
        info!(
            log_dir = %file_config.directory.display(),
            log_prefix = %file_config.file_name_prefix,
            "file logging enabled"
        );
    }
    Ok(())
}
