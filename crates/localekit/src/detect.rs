//! Initial-locale detection.
//!
//! Detection order: persisted user preference, then the operating system's
//! reported locale, then the fallback. Every candidate is cleaned of POSIX
//! decorations, normalized, and accepted only if it lands on a catalog code.

use tracing::debug;

use crate::catalog::{self, FALLBACK_LOCALE};
use crate::locale::normalize_locale;
use crate::store::PreferenceStore;

/// Source of the operating system's preferred locale. A trait so hosts and
/// tests can substitute their own.
pub trait SystemLocaleSource {
    fn system_locale(&self) -> Option<String>;
}

/// The real system source, backed by the platform's locale APIs.
#[cfg(feature = "detect")]
#[derive(Debug, Default)]
pub struct SystemLocale;

#[cfg(feature = "detect")]
impl SystemLocaleSource for SystemLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A source with a fixed answer, for tests and the CLI's `--system` flag.
#[derive(Debug, Default)]
pub struct FixedLocale(pub Option<String>);

impl SystemLocaleSource for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

// POSIX locales carry codeset and modifier suffixes (`de_DE.UTF-8`,
// `sr_RS@latin`) that the catalog never contains.
fn strip_posix_suffixes(tag: &str) -> &str {
    let tag = tag.split('.').next().unwrap_or(tag);
    tag.split('@').next().unwrap_or(tag)
}

fn resolve(candidate: &str) -> Option<String> {
    let code = normalize_locale(strip_posix_suffixes(candidate));
    catalog::is_catalog_code(&code).then_some(code)
}

/// Pick the locale to start on.
pub fn initial_locale(store: &dyn PreferenceStore, system: &dyn SystemLocaleSource) -> String {
    if let Some(code) = store.load().as_deref().and_then(resolve) {
        debug!("initial locale from stored preference: {code}");
        return code;
    }
    if let Some(code) = system.system_locale().as_deref().and_then(resolve) {
        debug!("initial locale from system: {code}");
        return code;
    }
    debug!("initial locale: fallback {FALLBACK_LOCALE}");
    FALLBACK_LOCALE.to_string()
}
