//! Catalog validation.
//!
//! The catalog contract says every key exists in every language's table.
//! Nothing at lookup time enforces that (a diverged table just means
//! visitors in one language see raw keys), so this check is how the defect
//! is caught in tests and tooling instead of production.

use crate::i18n::{Catalog, Language, LanguageRegistry};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Outcome of a catalog validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Contract violations: keys missing from some language's table
    pub errors: Vec<String>,

    /// Suspicious but renderable entries
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

static KEY_FORMAT_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Check `catalog` against every enabled language.
    ///
    /// Errors: a key present in one language's table but absent from
    /// another's. Warnings: keys that are not dot-namespaced
    /// lower_snake segments, and entries whose localized string is empty.
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        let languages: Vec<Language> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .filter_map(|config| Language::from_code(config.code).ok())
            .collect();

        // Union of all keys across languages, ordered for stable output.
        let mut all_keys: BTreeSet<&'static str> = BTreeSet::new();
        for language in &languages {
            all_keys.extend(catalog.keys(*language));
        }

        for key in &all_keys {
            for language in &languages {
                match catalog.lookup(*language, key) {
                    None => report.errors.push(format!(
                        "Key '{}' is missing from the '{}' table",
                        key,
                        language.code()
                    )),
                    Some(value) if value.is_empty() => report.warnings.push(format!(
                        "Key '{}' has an empty value in the '{}' table",
                        key,
                        language.code()
                    )),
                    Some(_) => {}
                }
            }

            if !Self::key_is_well_formed(key) {
                report
                    .warnings
                    .push(format!("Key '{}' is not dot-namespaced", key));
            }
        }

        report
    }

    /// Whether `key` is a dot-separated sequence of lower_snake segments.
    fn key_is_well_formed(key: &str) -> bool {
        let regex = KEY_FORMAT_REGEX
            .get_or_init(|| Regex::new(r"^[a-z0-9_]+(\.[a-z0-9_]+)*$").unwrap());
        regex.is_match(key)
    }
}
