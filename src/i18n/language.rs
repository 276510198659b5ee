//! Validated language tag.
//!
//! `Language` can only hold a code that the registry knows and has enabled,
//! so every value of this type is a member of the supported set by
//! construction. String input from persisted storage or UI callers goes
//! through [`Language::from_code`], which is where unsupported tags are
//! rejected.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// German, the site's default.
    pub const GERMAN: Language = Language { code: "de" };

    /// English.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Build a `Language` from a code string, validating it against the
    /// registry.
    ///
    /// Returns an error if the code is unknown or the language is disabled.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unsupported language code: '{}'", code),
        }
    }

    /// The language adopted when nothing valid is persisted.
    pub fn fallback() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// ISO 639-1 code, e.g. "de".
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry metadata for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed `Language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("constructed Language has a registry entry")
    }

    /// English name, e.g. "German".
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name, e.g. "Deutsch". This is what the language toggle shows.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::fallback()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(D::Error::custom)
    }
}
