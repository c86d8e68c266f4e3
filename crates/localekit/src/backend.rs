//! Translation-resource path template.
//!
//! Resource loading and parsing belong to the external translation backend;
//! this layer only answers "where does the document for this locale and
//! namespace live". We intentionally keep this thin.

use std::path::{Path, PathBuf};

/// Options for the translation-loading backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    /// Root the locale tree hangs under.
    pub base_path: PathBuf,
}

impl BackendOptions {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the resource document for a locale and namespace:
    /// `<base>/locales/<code>/<namespace>.toml`.
    pub fn resource_path(&self, code: &str, namespace: &str) -> PathBuf {
        self.base_path
            .join("locales")
            .join(code)
            .join(format!("{namespace}.toml"))
    }
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}
