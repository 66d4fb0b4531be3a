use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypesyncError};

/// Root configuration for typesync, loaded from `typesync.toml`.
///
/// Every setting has a default, so an absent or empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesyncConfig {
    /// Path configuration.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl TypesyncConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TypesyncError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TypesyncError::Config(format!("Failed to parse config: {}", e)))
    }
}

impl Default for TypesyncConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
        }
    }
}

/// Source and destination roots for the conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root directory scanned for `models.py` files.
    #[serde(default = "default_backend_dir")]
    pub backend_dir: String,

    /// Output location for generated `.ts` files.
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            backend_dir: default_backend_dir(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_backend_dir() -> String {
    "backend/models".to_string()
}

fn default_frontend_dir() -> String {
    "frontend/src/lib/types/models".to_string()
}
