//! Inbound server configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The locale-relevant slice of a server-delivered configuration.
///
/// Both fields are optional; absence means "no adjustment". The wire form
/// uses camelCase for the default locale (`defaultLocale`), which is accepted
/// as an alias alongside the snake_case form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Locale codes the deployment wants offered. Unknown codes are dropped
    /// at application time, not at parse time.
    #[serde(default)]
    pub languages: Option<Vec<String>>,

    /// Locale to activate for users without an explicit preference.
    #[serde(default, alias = "defaultLocale")]
    pub default_locale: Option<String>,
}

impl ServerConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Load from a `.toml` or `.json` file, dispatching on the extension.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::UnknownFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
