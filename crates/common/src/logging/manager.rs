//! Logging initialization.

use std::fs;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::types::{LoggerConfig, LoggingError};

/// Filter defaulting to INFO, overridable through `RUST_LOG`.
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Installs the global subscriber described by `config`.
///
/// Fails if the log directory can't be created or if a global subscriber is
/// already set.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    let filt = build_env_filter();

    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    let file_layer = match config.file_logging_config.as_ref() {
        Some(file_config) => {
            fs::create_dir_all(&file_config.directory)
                .map_err(|e| LoggingError::LogDir(file_config.directory.clone(), e))?;

            let file_appender = RollingFileAppender::new(
                file_config.rotation.clone(),
                &file_config.directory,
                &file_config.file_name_prefix,
            );

            let layer = if file_config.json_format {
                layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(filt)
                    .boxed()
            } else {
                layer()
                    .compact()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(filt)
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    info!(service_name = %config.service_name, "logging initialized");
    Ok(())
}
