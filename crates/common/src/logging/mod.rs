//! Logging subsystem.

pub mod manager;
pub mod service;
pub mod types;


pub use manager::{build_env_filter, init};
pub use service::{build_logger_config, init_logging_from_config, LoggingInitConfig};
pub use types::{FileLoggingConfig, LoggerConfig, LoggingError, StdoutConfig};

// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;

/// Formats a service name with an optional label suffix.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
