#![forbid(unsafe_code)]

//! Lenient locale tags.
//!
//! A [`Locale`] wraps any caller-supplied tag (`"en"`, `"fr-CA"`, `"ro_RO"`).
//! Parsing never fails; unknown or malformed tags simply fall through the
//! catalog's fallback chain. Only the primary language subtag participates
//! in fallback, and all addressing is case-normalized to lowercase.

use std::fmt;

/// A BCP-47-ish locale tag, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Wrap a tag, lowercasing it for catalog addressing.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_lowercase();
        Self { tag }
    }

    /// The full lowercased tag, e.g. `"en-us"`.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The primary language subtag: everything before the first `-` or `_`.
    ///
    /// `"en-US"` and `"en_US"` both yield `"en"`; a bare `"en"` yields
    /// itself; the empty tag yields the empty string.
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.tag)
    }

    /// Whether the tag carries a region or script subtag beyond the language.
    #[must_use]
    pub fn has_subtags(&self) -> bool {
        self.language().len() < self.tag.len()
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
