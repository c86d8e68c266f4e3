use thiserror::Error;

/// Errors from loading a server configuration document.
///
/// This is the crate's only failing edge; every locale operation degrades
/// silently instead of erroring.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {0:?} (expected .toml or .json)")]
    UnknownFormat(String),
}
