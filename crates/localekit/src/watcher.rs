//! Configuration watcher.
//!
//! The host feeds `(config, loading)` snapshots in whatever rhythm its
//! loader produces them; the watcher applies the config to an [`I18nState`]
//! exactly once per meaningful change.

use std::sync::Arc;

use tracing::debug;

use crate::config::ServerConfig;
use crate::state::I18nState;

/// Applies a loaded [`ServerConfig`] to an [`I18nState`], once per config
/// arrival: first the supported-set restriction, then the default locale.
///
/// A "meaningful change" is a new config identity (a reload allocates a new
/// `Arc`, even for an equal value) or the loading flag flipping back from
/// true to false. Re-observing an unchanged snapshot is a no-op.
#[derive(Default)]
pub struct ConfigWatcher {
    // Holds the last applied config so its address can never be reused by a
    // later allocation; compared with Arc::ptr_eq only.
    last_applied: Option<Arc<ServerConfig>>,
    was_loading: bool,
}

impl ConfigWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        state: &mut I18nState,
        config: Option<&Arc<ServerConfig>>,
        loading: bool,
    ) {
        if loading {
            self.was_loading = true;
            return;
        }
        let Some(config) = config else { return };

        let changed = !matches!(&self.last_applied, Some(last) if Arc::ptr_eq(last, config));
        if !changed && !self.was_loading {
            return;
        }
        self.was_loading = false;
        self.last_applied = Some(Arc::clone(config));

        debug!("applying server config (reloaded: {})", !changed);
        state.restrict(config.languages.as_deref());
        state.apply_default(config.default_locale.as_deref());
    }
}
