//! The translation store: current language plus localized lookup.
//!
//! One store is the single source of truth for "which language is active"
//! and "what string does this key render as", shared by every view without
//! prop-drilling. Views read through [`TranslationStore::translate`],
//! change the language through [`TranslationStore::set_language`] (or the
//! string-typed [`TranslationStore::set_language_code`]), and react to
//! changes through [`TranslationStore::subscribe`].
//!
//! Every operation degrades instead of failing. A missing catalog entry
//! renders as the key itself and an unsupported code is ignored; a broken
//! preference backend just leaves the selection in memory for the session.

use crate::i18n::{Catalog, Language, TranslationMetrics};
use crate::prefs::{DisabledPreferences, Preferences, SqlitePreferences};
use crate::subscription::{SubscriberSet, Subscription};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use tracing::{debug, warn};

/// Preference key the current language is persisted under.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Process-wide language selection and translation lookup.
pub struct TranslationStore {
    current: RwLock<Language>,
    // Serializes each language change end to end (state, persistence,
    // fan-out) so notifications from concurrent callers cannot interleave.
    mutation: Mutex<()>,
    subscribers: Arc<SubscriberSet<Language>>,
    prefs: Arc<dyn Preferences>,
}

static STORE: OnceLock<TranslationStore> = OnceLock::new();

impl TranslationStore {
    /// Build a store over the given preference backend.
    ///
    /// The initial language is the persisted one if it is present and
    /// names an enabled language; anything else (absent entry, unreadable
    /// backend, unknown code) falls back to the default language.
    pub fn new(prefs: Arc<dyn Preferences>) -> Self {
        let initial = match prefs.get(LANGUAGE_STORAGE_KEY) {
            Some(code) => match Language::from_code(&code) {
                Ok(language) => {
                    debug!("Restored language '{}' from preferences", language.code());
                    language
                }
                Err(_) => {
                    warn!("Ignoring unrecognized persisted language '{}'", code);
                    Language::fallback()
                }
            },
            None => Language::fallback(),
        };

        Self {
            current: RwLock::new(initial),
            mutation: Mutex::new(()),
            subscribers: Arc::new(SubscriberSet::new()),
            prefs,
        }
    }

    /// The store singleton, constructed on first access over the per-user
    /// preference database. If that database cannot be opened the store
    /// still comes up, with in-memory state only.
    pub fn global() -> &'static TranslationStore {
        STORE.get_or_init(|| {
            let prefs: Arc<dyn Preferences> = match SqlitePreferences::open_default() {
                Ok(prefs) => Arc::new(prefs),
                Err(e) => {
                    warn!(
                        "Preference storage unavailable, keeping language in memory only: {:#}",
                        e
                    );
                    Arc::new(DisabledPreferences)
                }
            };
            TranslationStore::new(prefs)
        })
    }

    /// The currently active language. Never fails.
    pub fn language(&self) -> Language {
        *self.current.read().unwrap()
    }

    /// Switch the active language.
    ///
    /// Persists the selection (best-effort) and synchronously notifies
    /// every subscriber with the new tag, in registration order, before
    /// returning. Callbacks run on the caller's thread and must not call
    /// `set_language` on the same store.
    pub fn set_language(&self, language: Language) {
        let _guard = self.mutation.lock().unwrap();

        *self.current.write().unwrap() = language;
        debug!("Language set to '{}'", language.code());

        match self.prefs.set(LANGUAGE_STORAGE_KEY, language.code()) {
            Ok(()) => TranslationMetrics::global().record_preference_write(),
            Err(e) => {
                TranslationMetrics::global().record_preference_write_failure();
                warn!("Failed to persist language selection: {}", e);
            }
        }

        self.subscribers.notify(language);
    }

    /// Switch the active language by code string.
    ///
    /// An unsupported code is silently dropped, matching what the site
    /// does today; callers that want the failure should go through
    /// [`Language::from_code`] themselves.
    pub fn set_language_code(&self, code: &str) {
        match Language::from_code(code) {
            Ok(language) => self.set_language(language),
            Err(_) => debug!("Ignoring unsupported language code '{}'", code),
        }
    }

    /// Resolve `key` in the active language.
    ///
    /// A key without a catalog entry comes back unchanged, so untranslated
    /// text shows up verbatim in the UI rather than crashing a view.
    pub fn translate(&self, key: &str) -> String {
        let language = self.language();
        match Catalog::get().lookup(language, key) {
            Some(text) => {
                TranslationMetrics::global().record_resolved();
                text.to_string()
            }
            None => {
                TranslationMetrics::global().record_fallback();
                debug!(
                    "No '{}' catalog entry for '{}', rendering the key",
                    language.code(),
                    key
                );
                key.to_string()
            }
        }
    }

    /// Register `callback` for every future language change.
    ///
    /// The returned handle deregisters on [`Subscription::cancel`] or on
    /// drop, so holding it for the lifetime of a view is enough.
    pub fn subscribe(
        &self,
        callback: impl Fn(Language) + Send + Sync + 'static,
    ) -> Subscription {
        Arc::clone(&self.subscribers).add(Box::new(callback))
    }
}
