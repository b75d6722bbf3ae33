//! Toolkit configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section; every field carries a serde default so an empty configuration
//! is valid.

pub mod columns;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::columns::ColumnsConfig;
use self::logging::LoggingConfig;

use crate::error::ColumnError;

/// Root toolkit configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Column registry settings.
    #[serde(default)]
    pub columns: ColumnsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToolkitConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `TREECOL_`.
    pub fn load(env: &str) -> Result<Self, ColumnError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TREECOL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ColumnError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| ColumnError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
