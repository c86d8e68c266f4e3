//! Durable storage of the user's explicitly chosen locale.
//!
//! Presence of a stored value means the user picked a locale themselves, and
//! server-delivered defaults must never override it. Storage trouble is never
//! surfaced to callers: a store that cannot be read behaves as "no
//! preference", a store that cannot be written drops the write with a
//! warning.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Durable store for the user's explicit locale choice.
pub trait PreferenceStore: Send {
    /// The stored locale code, if the user has ever chosen one.
    fn load(&self) -> Option<String>;

    /// Persist an explicit user choice.
    fn save(&self, code: &str);
}

/// In-memory store for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a choice, as if the user had picked one.
    pub fn with_choice(code: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(code.into())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone().filter(|v| !v.is_empty())
    }

    fn save(&self, code: &str) {
        *self.value.lock().unwrap() = Some(code.to_string());
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferenceDoc {
    #[serde(default)]
    language: Option<String>,
}

/// TOML-file store for desktop hosts: a single `language` key at a
/// host-chosen path.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            // No file yet means the user never chose a locale.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("could not read {}: {err}", self.path.display());
                return None;
            }
        };
        let doc: PreferenceDoc = match toml::from_str(&content) {
            Ok(d) => d,
            Err(err) => {
                warn!("unreadable preference file {}: {err}", self.path.display());
                return None;
            }
        };
        doc.language.filter(|v| !v.is_empty())
    }

    fn save(&self, code: &str) {
        let doc = PreferenceDoc {
            language: Some(code.to_string()),
        };
        let content = match toml::to_string_pretty(&doc) {
            Ok(c) => c,
            Err(err) => {
                warn!("could not serialize preference: {err}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    warn!("could not create {}: {err}", parent.display());
                    return;
                }
            }
        }
        if let Err(err) = fs::write(&self.path, content) {
            warn!("could not write {}: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save("de-DE");
        assert_eq!(store.load(), Some("de-DE".to_string()));
    }

    #[test]
    fn memory_store_empty_value_reads_as_absent() {
        let store = MemoryStore::with_choice("");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.toml"));
        assert_eq!(store.load(), None);
        store.save("ja-JP");
        assert_eq!(store.load(), Some("ja-JP".to_string()));

        // A second store at the same path sees the persisted value.
        let reopened = FilePreferenceStore::new(dir.path().join("prefs.toml"));
        assert_eq!(reopened.load(), Some("ja-JP".to_string()));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/app/prefs.toml");
        let store = FilePreferenceStore::new(&path);
        store.save("fr-FR");
        assert_eq!(store.load(), Some("fr-FR".to_string()));
    }

    #[test]
    fn unreadable_path_degrades_to_absent() {
        // A directory at the preference path is a read error that is not
        // NotFound; it must still behave as "no preference".
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_file_degrades_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not = [valid").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn missing_language_key_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "other = \"value\"\n").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.load(), None);
    }
}
