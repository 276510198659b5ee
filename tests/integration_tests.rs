//! Integration tests for the client-state core.
//!
//! These exercise the stores over the real SQLite preference backend,
//! including the restart path a returning visitor takes, plus property
//! tests for the degradation contracts (fallback-to-key, no-op on
//! unsupported codes).

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use tabu_core::i18n::{Catalog, CatalogValidator, Language, TranslationStore};
use tabu_core::prefs::{MemoryPreferences, Preferences, SqlitePreferences};
use tabu_core::theme::{ThemeName, ThemeStore, THEME_STORAGE_KEY};

// ==================== Test Helpers ====================

/// Open a SQLite preference backend inside `temp`.
fn sqlite_prefs(temp: &TempDir) -> Arc<SqlitePreferences> {
    Arc::new(SqlitePreferences::open(&temp.path().join("prefs.db")).expect("open preferences"))
}

// ==================== Returning-Visitor Scenarios ====================

#[test]
fn test_language_selection_survives_restart() {
    let temp = TempDir::new().expect("temp dir");

    {
        let store = TranslationStore::new(sqlite_prefs(&temp));
        assert_eq!(store.language(), Language::GERMAN);
        store.set_language(Language::ENGLISH);
    }

    // A new store over the same database plays the role of the next
    // session.
    let next_session = TranslationStore::new(sqlite_prefs(&temp));
    assert_eq!(next_session.language(), Language::ENGLISH);
    assert_eq!(next_session.translate("nav.rooms"), "Rooms");
}

#[test]
fn test_corrupted_persisted_language_falls_back_to_default() {
    let temp = TempDir::new().expect("temp dir");
    let prefs = sqlite_prefs(&temp);
    prefs.set("language", "fr").expect("seed bad value");

    let store = TranslationStore::new(prefs);
    assert_eq!(store.language(), Language::GERMAN);
}

#[test]
fn test_theme_selection_survives_restart() {
    let temp = TempDir::new().expect("temp dir");

    {
        let store = ThemeStore::new(sqlite_prefs(&temp));
        store.set_theme(ThemeName::Emerald);
    }

    let next_session = ThemeStore::new(sqlite_prefs(&temp));
    assert_eq!(next_session.theme(), ThemeName::Emerald);
}

#[test]
fn test_corrupted_persisted_theme_falls_back_to_default() {
    let temp = TempDir::new().expect("temp dir");
    let prefs = sqlite_prefs(&temp);
    prefs.set(THEME_STORAGE_KEY, "neon").expect("seed bad value");

    let store = ThemeStore::new(prefs);
    assert_eq!(store.theme(), ThemeName::Default);
}

#[test]
fn test_language_and_theme_share_one_preference_database() {
    let temp = TempDir::new().expect("temp dir");
    let prefs = sqlite_prefs(&temp);

    let translations = TranslationStore::new(Arc::clone(&prefs) as Arc<dyn Preferences>);
    let themes = ThemeStore::new(Arc::clone(&prefs) as Arc<dyn Preferences>);

    translations.set_language(Language::ENGLISH);
    themes.set_theme(ThemeName::Rose);

    let translations = TranslationStore::new(sqlite_prefs(&temp));
    let themes = ThemeStore::new(sqlite_prefs(&temp));
    assert_eq!(translations.language(), Language::ENGLISH);
    assert_eq!(themes.theme(), ThemeName::Rose);
}

// ==================== Visitor Flow ====================

#[test]
fn test_language_toggle_flow() {
    let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));

    // First visit: German by default.
    assert_eq!(store.language(), Language::GERMAN);
    assert_eq!(store.translate("rooms.title"), "Wählen Sie Ihr");

    // Visitor clicks the language toggle.
    store.set_language_code("en");
    assert_eq!(store.language(), Language::ENGLISH);
    assert_eq!(store.translate("rooms.title"), "Choose Your");

    // Some entries coincide across languages; still served per-table.
    assert_eq!(store.translate("nav.home"), "Home");

    // A key nobody translated renders verbatim instead of crashing a view.
    assert_eq!(store.translate("nonexistent.key"), "nonexistent.key");
}

#[test]
fn test_views_react_to_language_changes() {
    let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));

    // Two mounted views, each re-rendering its heading on change.
    let nav_heading = Arc::new(Mutex::new(String::new()));
    let rooms_heading = Arc::new(Mutex::new(String::new()));

    let nav_clone = Arc::clone(&nav_heading);
    let nav_sub = store.subscribe(move |language| {
        *nav_clone.lock().unwrap() = language.native_name().to_string();
    });
    let rooms_clone = Arc::clone(&rooms_heading);
    let _rooms_sub = store.subscribe(move |language| {
        *rooms_clone.lock().unwrap() = language.code().to_string();
    });

    store.set_language(Language::ENGLISH);
    assert_eq!(*nav_heading.lock().unwrap(), "English");
    assert_eq!(*rooms_heading.lock().unwrap(), "en");

    // First view unmounts; only the second keeps reacting.
    nav_sub.cancel();
    store.set_language(Language::GERMAN);
    assert_eq!(*nav_heading.lock().unwrap(), "English");
    assert_eq!(*rooms_heading.lock().unwrap(), "de");
}

#[test]
fn test_panicking_view_does_not_block_others() {
    let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));
    let delivered = Arc::new(AtomicUsize::new(0));

    let _broken = store.subscribe(|_| panic!("view already torn down"));
    let delivered_clone = Arc::clone(&delivered);
    let _healthy = store.subscribe(move |_| {
        delivered_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.set_language(Language::ENGLISH);

    assert_eq!(delivered.load(Ordering::SeqCst), 1);
    assert_eq!(store.language(), Language::ENGLISH);
}

// ==================== Catalog Contract ====================

#[test]
fn test_shipped_catalog_passes_validation() {
    let report = CatalogValidator::validate(Catalog::get());

    assert!(
        report.is_clean(),
        "errors={:?} warnings={:?}",
        report.errors,
        report.warnings
    );
}

#[test]
fn test_every_catalog_key_resolves_in_every_language() {
    let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));

    for language in [Language::GERMAN, Language::ENGLISH] {
        store.set_language(language);
        for key in Catalog::get().keys(language) {
            // Resolving must never fall back for a shipped key.
            assert_ne!(store.translate(key), "", "empty entry for {key}");
            assert_eq!(
                store.translate(key),
                Catalog::get().lookup(language, key).unwrap()
            );
        }
    }
}

// ==================== Degradation Properties ====================

proptest! {
    // Catalog keys all start with a lowercase letter, so these can never
    // collide with a shipped entry.
    #[test]
    fn prop_unknown_keys_render_as_themselves(key in "[A-Z][A-Za-z0-9_.]{0,30}") {
        let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));
        prop_assert_eq!(store.translate(&key), key);
    }

    // "de" and "en" are two letters; longer codes are never supported.
    #[test]
    fn prop_unsupported_codes_never_change_the_language(code in "[a-z]{3,8}") {
        let store = TranslationStore::new(Arc::new(MemoryPreferences::new()));
        store.set_language_code(&code);
        prop_assert_eq!(store.language(), Language::GERMAN);
    }

    #[test]
    fn prop_unknown_theme_codes_never_change_the_theme(code in "[a-z]{1,12}") {
        let store = ThemeStore::new(Arc::new(MemoryPreferences::new()));
        prop_assume!(ThemeName::from_code(&code).is_none());
        store.set_theme_code(&code);
        prop_assert_eq!(store.theme(), ThemeName::Default);
    }
}
