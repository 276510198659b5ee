//! Language registry: the closed set of display languages.
//!
//! One process-wide registry, initialized lazily behind `OnceLock`, holds
//! every language the site can render together with its metadata. The
//! `Language` type and the translation store validate against it; extending
//! the site to a new language means adding an entry here and a matching
//! catalog table.

use std::sync::OnceLock;

/// Metadata for one supported display language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also the value persisted under the `language` key
    pub code: &'static str,

    /// English name, e.g. "German"
    pub name: &'static str,

    /// Name in the language itself, shown by the language toggle
    pub native_name: &'static str,

    /// Whether this is the fallback language adopted when nothing valid is
    /// persisted (exactly one entry sets this)
    pub is_default: bool,

    /// Whether the language is currently offered to visitors
    pub enabled: bool,
}

/// Process-wide registry of supported languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// The registry singleton, built on first access.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Look up a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Every enabled language, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Every registered language, enabled or not.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The default language, adopted whenever no valid selection is
    /// persisted.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default entry;
    /// that is a configuration error, not a runtime condition.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language configured in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages configured in registry"),
        }
    }

    /// Whether `code` names a language that exists and is enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The languages the site ships with: German (default) and English.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
