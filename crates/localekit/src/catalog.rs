//! Static locale catalog.
//!
//! The catalog is the single source of truth for which locales the
//! application can offer: an ordered table of canonical codes with their
//! native display names and text direction. Order is significant - it is the
//! order locale pickers list entries in, and it decides which full code a
//! bare base tag resolves to (`"pt"` resolves to the first Portuguese entry).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Text direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right (e.g. English, Japanese).
    Ltr,
    /// Right-to-left (e.g. Arabic, Hebrew).
    Rtl,
}

impl TextDirection {
    /// Value for a document-level direction attribute (`dir="rtl"`).
    pub fn as_attr(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Canonical locale code (hyphen separators).
    pub code: &'static str,
    /// Display name in the locale's own language.
    pub display_name: &'static str,
    /// Text direction of the locale's script.
    pub direction: TextDirection,
}

const fn ltr(code: &'static str, display_name: &'static str) -> LocaleEntry {
    LocaleEntry {
        code,
        display_name,
        direction: TextDirection::Ltr,
    }
}

const fn rtl(code: &'static str, display_name: &'static str) -> LocaleEntry {
    LocaleEntry {
        code,
        display_name,
        direction: TextDirection::Rtl,
    }
}

/// Locale used when nothing else resolves. Always present in [`LOCALES`].
pub const FALLBACK_LOCALE: &str = "en-GB";

/// Every locale the application can offer, in catalog order.
pub const LOCALES: &[LocaleEntry] = &[
    rtl("ar-SA", "العربية"),
    ltr("ca-ES", "Català"),
    ltr("cs-CZ", "Čeština"),
    ltr("da-DK", "Dansk"),
    ltr("de-DE", "Deutsch"),
    ltr("el-GR", "Ελληνικά"),
    ltr("en-GB", "English (UK)"),
    ltr("en-US", "English (US)"),
    ltr("es-ES", "Español"),
    rtl("fa-IR", "فارسی"),
    ltr("fi-FI", "Suomi"),
    ltr("fr-FR", "Français"),
    rtl("he-IL", "עברית"),
    ltr("hu-HU", "Magyar"),
    ltr("it-IT", "Italiano"),
    ltr("ja-JP", "日本語"),
    ltr("ko-KR", "한국어"),
    ltr("nb-NO", "Norsk Bokmål"),
    ltr("nl-NL", "Nederlands"),
    ltr("pl-PL", "Polski"),
    ltr("pt-BR", "Português (Brasil)"),
    ltr("pt-PT", "Português (Portugal)"),
    ltr("ro-RO", "Română"),
    ltr("ru-RU", "Русский"),
    ltr("sr-LATN-RS", "Srpski (Latinica)"),
    ltr("sv-SE", "Svenska"),
    ltr("tr-TR", "Türkçe"),
    ltr("uk-UA", "Українська"),
    ltr("zh-CN", "简体中文"),
    ltr("zh-TW", "繁體中文"),
];

/// Look up a catalog entry by exact code.
pub fn entry(code: &str) -> Option<&'static LocaleEntry> {
    LOCALES.iter().find(|e| e.code == code)
}

/// Whether `code` exactly matches a catalog code.
pub fn is_catalog_code(code: &str) -> bool {
    entry(code).is_some()
}

/// Direction of a code. Unknown codes read as left-to-right.
pub fn direction_of(code: &str) -> TextDirection {
    entry(code).map_or(TextDirection::Ltr, |e| e.direction)
}

/// Whether a code uses right-to-left text direction.
pub fn is_rtl(code: &str) -> bool {
    direction_of(code) == TextDirection::Rtl
}

/// Codes of the right-to-left entries, in catalog order.
pub fn rtl_codes() -> impl Iterator<Item = &'static str> {
    LOCALES
        .iter()
        .filter(|e| e.direction == TextDirection::Rtl)
        .map(|e| e.code)
}

/// Base language tag of a code: the substring before the first `-`,
/// lowercased (`"sr-LATN-RS"` -> `"sr"`).
pub fn base_tag(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_ascii_lowercase()
}

/// Build the base-language index for `entries`: the first entry per base tag
/// wins, except the base tag of `fallback`, which always maps to `fallback`
/// no matter where it sits in the table.
fn build_base_index(
    entries: &[LocaleEntry],
    fallback: &'static str,
) -> FxHashMap<String, &'static str> {
    let mut index = FxHashMap::default();
    for e in entries {
        index.entry(base_tag(e.code)).or_insert(e.code);
    }
    index.insert(base_tag(fallback), fallback);
    index
}

/// Map from lowercase base language tag to the full catalog code it resolves
/// to. Built once; the catalog is static.
pub(crate) fn base_index() -> &'static FxHashMap<String, &'static str> {
    static INDEX: OnceLock<FxHashMap<String, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| build_base_index(LOCALES, FALLBACK_LOCALE))
}
