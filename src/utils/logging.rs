//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the localization core.

use std::path::Path;
use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{CareNetworkError, Result};

/// Initialize logging based on configuration
///
/// Returns the file appender guard when a log file is configured; it must be
/// held for as long as log lines should be flushed to disk.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CareNetworkError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "care-network.log".to_string());
            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with((!config.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .with(config.json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with(file_layer)
        .try_init()
        .map_err(|e| CareNetworkError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an Active Language transition
pub fn log_language_change(from: &str, to: &str, persisted: bool) {
    info!(
        from = from,
        to = to,
        persisted = persisted,
        "Active language changed"
    );
}

/// Log a lookup key that did not resolve and fell back to the key itself
pub fn log_missing_translation(key: &str, language: &str) {
    warn!(
        key = key,
        language = language,
        "Translation not found, rendering key"
    );
}

/// Log a failed preference read or write
pub fn log_storage_failure(operation: &str, key: &str, error: &str) {
    warn!(
        operation = operation,
        key = key,
        error = error,
        "Preference storage operation failed"
    );
}

/// Log a resolved lookup
pub fn log_translation_hit(key: &str, language: &str) {
    debug!(key = key, language = language, "Translation resolved");
}
