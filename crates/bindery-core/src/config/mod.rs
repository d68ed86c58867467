//! Runtime configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod registry;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::registry::RegistryConfig;

use crate::error::CoreError;

/// Root runtime configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Hook registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl RuntimeConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `BINDERY__`.
    pub fn load(env: &str) -> Result<Self, CoreError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BINDERY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CoreError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| CoreError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
