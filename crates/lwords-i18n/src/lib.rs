#![forbid(unsafe_code)]

//! Localized string storage for LocalizedWords.
//!
//! Provides in-memory, key-based string lookup with a locale fallback chain.
//! Catalogs are constructed programmatically by the caller; there is no
//! resource-file loading and no runtime dependency.
//!
//! # Role in LocalizedWords
//! `lwords-i18n` is the "already-resolved input" side of the word-matching
//! contract: the challenge screen asks it for the accepted words of the
//! active locale, and the notification scheduler asks it for the greeting
//! body. It does not depend on matching or scheduling, keeping the
//! localization layer reusable and testable.
//!
//! # How it fits in the system
//! A [`StringCatalog`] is built once at startup, shared immutably, and
//! queried by locale tag and key. Missing keys are `None`, never errors.

pub mod catalog;
pub mod locale;

pub use catalog::{CoverageReport, LocaleCoverage, LocaleStrings, StringCatalog};
pub use locale::Locale;
