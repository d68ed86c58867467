//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
