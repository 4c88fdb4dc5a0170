//! Table configuration using Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values (hardcoded)
//! 2. An optional configuration file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables with the `TABULA_` prefix
//!
//! ```toml
//! notification_timeout_ms = 5000
//! entity_label = "Employee"
//! ```

use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, Result};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TABULA_";

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;

/// Table behavior that is not part of the schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    /// Milliseconds before a notification is dismissed.
    pub notification_timeout_ms: u64,
    /// Noun used in success messages, e.g. "Employee's age was changed!".
    pub entity_label: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            entity_label: "Employee".to_string(),
        }
    }
}

impl GridConfig {
    /// Load defaults, then `file` if given, then `TABULA_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(GridConfig::default()));

        if let Some(path) = file {
            figment = figment.merge(file_provider(path)?);
        }

        let config: GridConfig = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        debug!(
            timeout_ms = config.notification_timeout_ms,
            entity = %config.entity_label,
            "grid configuration loaded"
        );
        Ok(config)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

fn file_provider(path: &Path) -> Result<Figment> {
    if !path.is_file() {
        return Err(GridError::config(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml") | Some("yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => Err(GridError::config(format!(
            "unsupported config file format: {}",
            path.display()
        ))),
    }
}
