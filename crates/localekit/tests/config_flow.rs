//! End-to-end configuration-arrival scenarios: detection, watcher-driven
//! config application, and the interplay with explicit user choices.

use std::sync::{Arc, Mutex};

use localekit::detect::{self, FixedLocale};
use localekit::{
    ConfigWatcher, DefaultLocalePolicy, I18nState, LocaleChange, MemoryStore, ServerConfig,
    TextDirection, FALLBACK_LOCALE,
};
use pretty_assertions::assert_eq;

fn arc_config(toml: &str) -> Arc<ServerConfig> {
    Arc::new(ServerConfig::from_toml_str(toml).unwrap())
}

fn change_log(state: &mut I18nState) -> Arc<Mutex<Vec<LocaleChange>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    state.on_locale_change(move |change| sink.lock().unwrap().push(change.clone()));
    log
}

#[test]
fn fresh_session_with_config_arrival() {
    // A user with no preference on a German system; the server narrows the
    // offering and declares a default.
    let store = MemoryStore::new();
    let initial = detect::initial_locale(&store, &FixedLocale(Some("de_DE.UTF-8".into())));
    assert_eq!(initial, "de-DE");

    let mut state = I18nState::with_initial_locale(Box::new(store), &initial);
    let log = change_log(&mut state);
    let mut watcher = ConfigWatcher::new();

    // Loader still in flight: nothing happens.
    watcher.observe(&mut state, None, true);
    assert_eq!(state.active_locale(), "de-DE");
    assert!(log.lock().unwrap().is_empty());

    let cfg = arc_config(
        r#"
        languages = ["de-DE", "fr-FR", "ar-SA"]
        default_locale = "fr_FR"
        "#,
    );
    watcher.observe(&mut state, Some(&cfg), false);

    assert_eq!(state.active_locale(), "fr-FR");
    assert_eq!(
        state.supported_locales(),
        &["ar-SA", "de-DE", "en-GB", "fr-FR"]
    );
    let events = log.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].code, "fr-FR");
    assert_eq!(events[0].direction, TextDirection::Ltr);
}

#[test]
fn user_preference_survives_every_reload() {
    let mut state = I18nState::new(Box::new(MemoryStore::with_choice("ja-JP")));
    let mut watcher = ConfigWatcher::new();

    let cfg = arc_config("default_locale = \"de-DE\"");
    watcher.observe(&mut state, Some(&cfg), false);
    assert_eq!(state.active_locale(), FALLBACK_LOCALE);

    // A reload with a new identity re-applies, and still defers to the user.
    let reload = arc_config("default_locale = \"de-DE\"");
    watcher.observe(&mut state, Some(&reload), false);
    assert_eq!(state.active_locale(), FALLBACK_LOCALE);
}

#[test]
fn selecting_mid_session_blocks_later_defaults() {
    let mut state = I18nState::default();
    let mut watcher = ConfigWatcher::new();

    state.select_locale("ar-SA");
    assert_eq!(state.active_direction(), TextDirection::Rtl);

    let cfg = arc_config("default_locale = \"de-DE\"");
    watcher.observe(&mut state, Some(&cfg), false);
    assert_eq!(state.active_locale(), "ar-SA");
}

#[test]
fn restriction_forces_fallback_and_notifies_direction() {
    let mut state = I18nState::with_initial_locale(Box::new(MemoryStore::new()), "ar-SA");
    let log = change_log(&mut state);
    let mut watcher = ConfigWatcher::new();

    let cfg = arc_config("languages = [\"de-DE\"]");
    watcher.observe(&mut state, Some(&cfg), false);

    assert_eq!(state.active_locale(), FALLBACK_LOCALE);
    let events = log.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].direction, TextDirection::Ltr);
}

#[test]
fn default_outside_restriction_depends_on_policy() {
    let cfg = arc_config(
        r#"
        languages = ["de-DE"]
        default_locale = "ja-JP"
        "#,
    );

    let mut permissive = I18nState::default();
    ConfigWatcher::new().observe(&mut permissive, Some(&cfg), false);
    assert_eq!(permissive.active_locale(), "ja-JP");
    assert!(!permissive.is_supported("ja-JP"));

    let mut strict = I18nState::default();
    strict.set_default_locale_policy(DefaultLocalePolicy::RequireSupported);
    ConfigWatcher::new().observe(&mut strict, Some(&cfg), false);
    assert_eq!(strict.active_locale(), FALLBACK_LOCALE);
}

#[test]
fn rapid_reloads_last_writer_wins() {
    let mut state = I18nState::default();
    let mut watcher = ConfigWatcher::new();

    for languages in [&["de-DE"][..], &["fr-FR"], &["ja-JP", "zh-TW"]] {
        let cfg = Arc::new(ServerConfig {
            languages: Some(languages.iter().map(|c| c.to_string()).collect()),
            default_locale: None,
        });
        watcher.observe(&mut state, Some(&cfg), false);
    }

    assert_eq!(state.supported_locales(), &["en-GB", "ja-JP", "zh-TW"]);
}

#[test]
fn empty_config_changes_nothing() {
    let mut state = I18nState::default();
    let log = change_log(&mut state);
    let mut watcher = ConfigWatcher::new();

    let cfg = Arc::new(ServerConfig::default());
    watcher.observe(&mut state, Some(&cfg), false);

    assert_eq!(state.active_locale(), FALLBACK_LOCALE);
    assert_eq!(state.supported_locales().len(), localekit::LOCALES.len());
    assert!(log.lock().unwrap().is_empty());
}
