#![forbid(unsafe_code)]

//! Key-based string storage with a locale fallback chain.
//!
//! A [`StringCatalog`] maps locale tags to [`LocaleStrings`] tables. Lookup
//! walks exact locale → primary language subtag → default locale and returns
//! the first hit. Missing keys are `None`; nothing in this module panics for
//! arbitrary locale or key strings.

use std::collections::BTreeMap;

use crate::locale::Locale;

/// Key → text table for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    entries: BTreeMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the text for a key.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Text for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-locale coverage against the union of all catalog keys.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// The locale tag this row describes.
    pub locale: String,
    /// Keys present in this locale.
    pub present: usize,
    /// Keys missing from this locale, sorted.
    pub missing: Vec<String>,
    /// `present / total_keys`, in percent. 100 when the catalog has no keys.
    pub coverage_percent: f64,
}

/// Coverage summary across every locale in a catalog.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Size of the union of keys across all locales.
    pub total_keys: usize,
    /// One row per registered locale, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

/// Locale → strings mapping with fallback lookup.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: BTreeMap<String, LocaleStrings>,
    default_locale: String,
}

impl StringCatalog {
    /// Create an empty catalog with `"en"` as the default locale.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_locale("en")
    }

    /// Create an empty catalog with the given default locale.
    #[must_use]
    pub fn with_default_locale(default_locale: impl Into<String>) -> Self {
        Self {
            locales: BTreeMap::new(),
            default_locale: Locale::new(default_locale.into()).tag().to_owned(),
        }
    }

    /// The locale consulted last in every lookup.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Register (or replace) the string table for a locale.
    pub fn add_locale(&mut self, tag: impl Into<String>, strings: LocaleStrings) {
        let locale = Locale::new(tag.into());
        self.locales.insert(locale.tag().to_owned(), strings);
    }

    /// Registered locale tags, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Resolve `key` under `locale`, walking the fallback chain.
    ///
    /// Chain: exact locale tag → primary language subtag → default locale,
    /// deduplicated in order. Returns the first table that has the key;
    /// `None` when the key is absent everywhere on the chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        let locale = Locale::new(locale);
        let exact = locale.tag();
        let language = locale.language();
        let default = self.default_locale.as_str();

        let mut steps = [Some(exact), None, None];
        if language != exact {
            steps[1] = Some(language);
        }
        if default != exact && default != language {
            steps[2] = Some(default);
        }

        for tag in steps.into_iter().flatten() {
            if let Some(text) = self.locales.get(tag).and_then(|table| table.get(key)) {
                return Some(text);
            }
        }
        None
    }

    /// Compute per-locale key coverage against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let mut all_keys: Vec<&str> = Vec::new();
        for table in self.locales.values() {
            for key in table.keys() {
                if !all_keys.contains(&key) {
                    all_keys.push(key);
                }
            }
        }
        all_keys.sort_unstable();
        let total_keys = all_keys.len();

        let locales = self
            .locales
            .iter()
            .map(|(tag, table)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|key| table.get(key).is_none())
                    .map(|key| (*key).to_owned())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 / total_keys as f64 * 100.0
                };
                LocaleCoverage {
                    locale: tag.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys,
            locales,
        }
    }
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> StringCatalog {
        let mut en = LocaleStrings::new();
        en.insert("walrus", "walrus");
        en.insert("greeting", "Welcome!");

        let mut en_us = LocaleStrings::new();
        en_us.insert("greeting", "Howdy!");

        let mut fr = LocaleStrings::new();
        fr.insert("walrus", "morse");

        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        catalog.add_locale("en-US", en_us);
        catalog.add_locale("fr", fr);
        catalog
    }

    // ── Lookup and fallback ─────────────────────────────────────────

    #[test]
    fn exact_locale_wins() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("en-US", "greeting"), Some("Howdy!"));
    }

    #[test]
    fn falls_back_to_language() {
        let catalog = sample_catalog();
        // en-US has no "walrus"; the language table does.
        assert_eq!(catalog.get("en-US", "walrus"), Some("walrus"));
    }

    #[test]
    fn falls_back_to_default() {
        let catalog = sample_catalog();
        // fr has no "greeting"; the default locale does.
        assert_eq!(catalog.get("fr", "greeting"), Some("Welcome!"));
    }

    #[test]
    fn unknown_locale_uses_default() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("de-AT", "walrus"), Some("walrus"));
    }

    #[test]
    fn missing_key_is_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("en", "no-such-key"), None);
    }

    #[test]
    fn locale_tags_are_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("FR", "walrus"), Some("morse"));
        assert_eq!(catalog.get("EN-us", "greeting"), Some("Howdy!"));
    }

    #[test]
    fn empty_catalog_returns_none() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.get("en", "anything"), None);
        assert_eq!(catalog.get("", ""), None);
    }

    #[test]
    fn custom_default_locale() {
        let mut ro = LocaleStrings::new();
        ro.insert("walrus", "mors\u{0103}");
        let mut catalog = StringCatalog::with_default_locale("ro");
        catalog.add_locale("ro", ro);
        assert_eq!(catalog.get("ja", "walrus"), Some("mors\u{0103}"));
        assert_eq!(catalog.default_locale(), "ro");
    }

    // ── LocaleStrings ───────────────────────────────────────────────

    #[test]
    fn insert_replaces_existing() {
        let mut table = LocaleStrings::new();
        table.insert("k", "old");
        table.insert("k", "new");
        assert_eq!(table.get("k"), Some("new"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let mut table = LocaleStrings::new();
        table.insert("b", "2");
        table.insert("a", "1");
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    // ── Coverage ────────────────────────────────────────────────────

    #[test]
    fn coverage_counts_missing_keys() {
        let catalog = sample_catalog();
        let report = catalog.coverage_report();
        assert_eq!(report.total_keys, 2);

        let fr = report
            .locales
            .iter()
            .find(|c| c.locale == "fr")
            .expect("fr coverage row");
        assert_eq!(fr.present, 1);
        assert_eq!(fr.missing, ["greeting"]);
        assert!((fr.coverage_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_of_empty_catalog() {
        let report = StringCatalog::new().coverage_report();
        assert_eq!(report.total_keys, 0);
        assert!(report.locales.is_empty());
    }

    #[test]
    fn full_coverage_is_hundred_percent() {
        let mut en = LocaleStrings::new();
        en.insert("only", "text");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        let report = catalog.coverage_report();
        assert!((report.locales[0].coverage_percent - 100.0).abs() < f64::EPSILON);
        assert!(report.locales[0].missing.is_empty());
    }
}
