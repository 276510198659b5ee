//! Theme selection.
//!
//! The site ships a handful of named themes; which one is active is client
//! state with the same shape as the language selection: a closed set with
//! a persisted current value, plus subscribers that restyle on change. Only
//! the selection lives here; palette data stays with the style layer.

use crate::prefs::{DisabledPreferences, Preferences, SqlitePreferences};
use crate::subscription::{SubscriberSet, Subscription};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use tracing::{debug, warn};

/// Preference key the current theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "tabu-theme";

/// A named theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Default,
    Royal,
    Emerald,
    Rose,
    Light,
}

impl ThemeName {
    /// Every theme, in the order the theme picker lists them.
    pub const ALL: &'static [ThemeName] = &[
        ThemeName::Default,
        ThemeName::Royal,
        ThemeName::Emerald,
        ThemeName::Rose,
        ThemeName::Light,
    ];

    /// Parse a theme code. Unknown codes are `None`, which callers treat
    /// the same as an absent selection.
    pub fn from_code(code: &str) -> Option<ThemeName> {
        ThemeName::ALL
            .iter()
            .copied()
            .find(|theme| theme.code() == code)
    }

    /// Stable code, also the persisted representation.
    pub fn code(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Royal => "royal",
            ThemeName::Emerald => "emerald",
            ThemeName::Rose => "rose",
            ThemeName::Light => "light",
        }
    }

    /// Name shown in the theme picker.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeName::Default => "Luxury Gold",
            ThemeName::Royal => "Royal Purple",
            ThemeName::Emerald => "Emerald Luxury",
            ThemeName::Rose => "Rose Gold",
            ThemeName::Light => "Light Elegance",
        }
    }

    /// Short picker description (site copy, German).
    pub fn description(self) -> &'static str {
        match self {
            ThemeName::Default => "Klassisches luxuriöses Gold-Design",
            ThemeName::Royal => "Königliches Violett für VIP-Erlebnisse",
            ThemeName::Emerald => "Luxuriöses Smaragdgrün",
            ThemeName::Rose => "Elegantes Roségold",
            ThemeName::Light => "Helles elegantes Design",
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        ThemeName::Default
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ThemeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ThemeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        ThemeName::from_code(&code)
            .ok_or_else(|| D::Error::custom(format!("unknown theme '{}'", code)))
    }
}

/// Process-wide theme selection.
///
/// Same contracts as the translation store: initialization falls back to
/// [`ThemeName::Default`] on anything invalid, changes persist best-effort
/// and fan out synchronously in registration order, and an unknown code is
/// silently dropped.
pub struct ThemeStore {
    current: RwLock<ThemeName>,
    mutation: Mutex<()>,
    subscribers: Arc<SubscriberSet<ThemeName>>,
    prefs: Arc<dyn Preferences>,
}

static STORE: OnceLock<ThemeStore> = OnceLock::new();

impl ThemeStore {
    /// Build a store over the given preference backend.
    pub fn new(prefs: Arc<dyn Preferences>) -> Self {
        let initial = prefs
            .get(THEME_STORAGE_KEY)
            .and_then(|code| {
                let theme = ThemeName::from_code(&code);
                if theme.is_none() {
                    warn!("Ignoring unrecognized persisted theme '{}'", code);
                }
                theme
            })
            .unwrap_or_default();

        Self {
            current: RwLock::new(initial),
            mutation: Mutex::new(()),
            subscribers: Arc::new(SubscriberSet::new()),
            prefs,
        }
    }

    /// The store singleton over the per-user preference database, with
    /// in-memory fallback when that cannot be opened.
    pub fn global() -> &'static ThemeStore {
        STORE.get_or_init(|| {
            let prefs: Arc<dyn Preferences> = match SqlitePreferences::open_default() {
                Ok(prefs) => Arc::new(prefs),
                Err(e) => {
                    warn!(
                        "Preference storage unavailable, keeping theme in memory only: {:#}",
                        e
                    );
                    Arc::new(DisabledPreferences)
                }
            };
            ThemeStore::new(prefs)
        })
    }

    /// The currently active theme.
    pub fn theme(&self) -> ThemeName {
        *self.current.read().unwrap()
    }

    /// Switch the active theme, persist it, and notify subscribers.
    pub fn set_theme(&self, theme: ThemeName) {
        let _guard = self.mutation.lock().unwrap();

        *self.current.write().unwrap() = theme;
        debug!("Theme set to '{}'", theme.code());

        if let Err(e) = self.prefs.set(THEME_STORAGE_KEY, theme.code()) {
            warn!("Failed to persist theme selection: {}", e);
        }

        self.subscribers.notify(theme);
    }

    /// Switch the active theme by code; unknown codes are dropped.
    pub fn set_theme_code(&self, code: &str) {
        match ThemeName::from_code(code) {
            Some(theme) => self.set_theme(theme),
            None => debug!("Ignoring unknown theme code '{}'", code),
        }
    }

    /// Register `callback` for every future theme change.
    pub fn subscribe(
        &self,
        callback: impl Fn(ThemeName) + Send + Sync + 'static,
    ) -> Subscription {
        Arc::clone(&self.subscribers).add(Box::new(callback))
    }
}
