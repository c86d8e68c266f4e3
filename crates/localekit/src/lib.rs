//! localekit - locale runtime for client applications
//!
//! Goals:
//! - Fixed, ordered catalog of offered locales with native names and text
//!   direction
//! - Catalog-driven normalization of arbitrary locale tags (never fails,
//!   degrades to pass-through)
//! - An explicit [`I18nState`] context object: supported subset, active
//!   locale, user preference, change subscriptions
//! - Server-config application via [`ConfigWatcher`]: narrow the supported
//!   set, apply a default locale for users without an explicit choice
//! - Initial-locale detection: stored preference, then system locale, then
//!   fallback
//!
//! Translation-string storage and formats stay with the external backend;
//! [`BackendOptions`] only resolves where its resource documents live.

mod backend;
mod catalog;
mod config;
mod error;
mod locale;
mod state;
mod store;
mod watcher;

pub mod detect;

pub use backend::BackendOptions;
pub use catalog::{
    base_tag, direction_of, entry, is_catalog_code, is_rtl, rtl_codes, LocaleEntry, TextDirection,
    FALLBACK_LOCALE, LOCALES,
};
pub use config::ServerConfig;
pub use error::ConfigError;
pub use locale::normalize_locale;
pub use state::{DefaultLocalePolicy, I18nState, LocaleChange};
pub use store::{FilePreferenceStore, MemoryStore, PreferenceStore};
pub use watcher::ConfigWatcher;
