//! Hook registry configuration.

use serde::{Deserialize, Serialize};

/// Hook registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Ranking assigned to hooks registered without an explicit ranking.
    /// Higher rankings are invoked earlier.
    #[serde(default)]
    pub default_ranking: i32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { default_ranking: 0 }
    }
}
