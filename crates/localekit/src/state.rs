//! Runtime locale state.
//!
//! `I18nState` is an explicit context object owned by the host: the supported
//! subset of the catalog, the active locale, the preference store, and the
//! change subscribers all live here rather than in process-wide statics, so
//! state never leaks between tests or embedded instances.

use tracing::debug;

use crate::catalog::{self, LocaleEntry, TextDirection, FALLBACK_LOCALE, LOCALES};
use crate::locale::normalize_locale;
use crate::store::{MemoryStore, PreferenceStore};

/// What a server-delivered default locale may do when it falls outside the
/// restricted supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultLocalePolicy {
    /// Apply any catalog-valid default, even one excluded from the supported
    /// set by an earlier restriction.
    #[default]
    OverrideSupported,
    /// Ignore a default that is not a member of the supported set.
    RequireSupported,
}

/// Payload delivered to change subscribers on every active-locale switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChange {
    /// The newly active catalog code.
    pub code: String,
    /// Text direction of the new code, for `dir`/`lang` attribute updates.
    pub direction: TextDirection,
}

type ChangeCallback = Box<dyn Fn(&LocaleChange) + Send + Sync>;

/// Runtime i18n state: supported set, active locale, preference store, and
/// change subscribers.
pub struct I18nState {
    supported: Vec<&'static str>,
    active: String,
    policy: DefaultLocalePolicy,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<ChangeCallback>,
}

impl Default for I18nState {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl I18nState {
    /// State offering the full catalog, active on the fallback locale.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            supported: LOCALES.iter().map(|e| e.code).collect(),
            active: FALLBACK_LOCALE.to_string(),
            policy: DefaultLocalePolicy::default(),
            store,
            subscribers: Vec::new(),
        }
    }

    /// State starting on `initial` instead of the fallback. Non-catalog
    /// codes are ignored and the fallback is used.
    pub fn with_initial_locale(store: Box<dyn PreferenceStore>, initial: &str) -> Self {
        let mut state = Self::new(store);
        if catalog::is_catalog_code(initial) {
            state.active = initial.to_string();
        }
        state
    }

    pub fn set_default_locale_policy(&mut self, policy: DefaultLocalePolicy) {
        self.policy = policy;
    }

    /// The currently active catalog code.
    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// Text direction of the active locale.
    pub fn active_direction(&self) -> TextDirection {
        catalog::direction_of(&self.active)
    }

    /// Codes currently offered, in catalog order.
    pub fn supported_locales(&self) -> &[&'static str] {
        &self.supported
    }

    /// Catalog entries of the supported set, in catalog order.
    pub fn supported_entries(&self) -> impl Iterator<Item = &'static LocaleEntry> + '_ {
        self.supported.iter().filter_map(|code| catalog::entry(code))
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|&c| c == code)
    }

    /// Register a callback fired on every active-locale change, whatever its
    /// origin. Typically called once at startup by the host, which maps the
    /// payload to document `dir`/`lang` attributes.
    pub fn on_locale_change(&mut self, callback: impl Fn(&LocaleChange) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Narrow the supported set to the server-configured languages.
    ///
    /// Absent or empty input is a no-op. Unknown codes are dropped silently;
    /// the fallback is always injected; an entirely invalid request leaves
    /// the previous set untouched. Later calls fully supersede earlier
    /// restrictions. If the active locale falls out of the new set it is
    /// forced to the fallback.
    pub fn restrict(&mut self, requested: Option<&[String]>) {
        let requested = match requested {
            Some(r) if !r.is_empty() => r,
            _ => return,
        };

        let next: Vec<&'static str> = LOCALES
            .iter()
            .map(|e| e.code)
            .filter(|&code| {
                code == FALLBACK_LOCALE || requested.iter().any(|r| r == code)
            })
            .collect();

        let dropped = requested
            .iter()
            .filter(|r| !catalog::is_catalog_code(r))
            .count();
        if dropped > 0 {
            debug!("restrict: dropped {dropped} unknown locale code(s)");
        }

        // The fallback alone means every requested code was unknown; keep
        // the previous restriction rather than collapsing the offering.
        if next.len() == 1 && !requested.iter().any(|r| r == FALLBACK_LOCALE) {
            debug!("restrict: no requested code is in the catalog, keeping previous set");
            return;
        }

        self.supported = next;
        if !self.is_supported(&self.active) {
            self.set_active(FALLBACK_LOCALE.to_string());
        }
    }

    /// Apply a server-delivered default locale.
    ///
    /// No-op when the default is absent, when the user has ever stored an
    /// explicit preference, or when the default does not resolve to a
    /// catalog code. Under [`DefaultLocalePolicy::RequireSupported`] a
    /// default outside the supported set is also ignored.
    pub fn apply_default(&mut self, default_locale: Option<&str>) {
        let Some(raw) = default_locale else { return };

        if self.store.load().is_some() {
            debug!("apply_default: user preference present, keeping it");
            return;
        }

        let code = normalize_locale(raw);
        if !catalog::is_catalog_code(&code) {
            debug!("apply_default: {raw:?} does not resolve to a catalog code");
            return;
        }
        if self.policy == DefaultLocalePolicy::RequireSupported && !self.is_supported(&code) {
            debug!("apply_default: {code} is outside the supported set");
            return;
        }

        self.set_active(code);
    }

    /// The explicit user action: persist the choice and switch to it.
    /// Non-catalog input is a silent no-op and persists nothing.
    pub fn select_locale(&mut self, input: &str) {
        let code = normalize_locale(input);
        if !catalog::is_catalog_code(&code) {
            debug!("select_locale: {input:?} does not resolve to a catalog code");
            return;
        }
        self.store.save(&code);
        self.set_active(code);
    }

    fn set_active(&mut self, code: String) {
        if self.active == code {
            return;
        }
        debug!("locale: {} -> {}", self.active, code);
        self.active = code;

        let change = LocaleChange {
            code: self.active.clone(),
            direction: catalog::direction_of(&self.active),
        };
        for subscriber in &self.subscribers {
            subscriber(&change);
        }
    }
}
