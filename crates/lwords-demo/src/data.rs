#![forbid(unsafe_code)]

//! Built-in string catalog for the demo.
//!
//! English is the default locale; French exercises the fallback chain and
//! gives the matcher a diacritic to chew on (`cône`). Keys follow the
//! `<word>` / `<word>_value` pairing the challenge screen expects, plus the
//! onboarding greeting used by the notification scheduler.

use lwords_i18n::{LocaleStrings, StringCatalog};

/// Localization key for the onboarding greeting.
pub const GREETING_KEY: &str = "main.onboarding.title.label";

/// Build the demo catalog with its English and French tables.
#[must_use]
pub fn builtin_catalog() -> StringCatalog {
    let mut en = LocaleStrings::new();
    en.insert(GREETING_KEY, "Welcome to Localized Words!");
    en.insert("walrus", "walrus");
    en.insert("walrus_value", "The walrus naps on the ice all day.");
    en.insert("cone", "cone");
    en.insert("cone_value", "Ice cream always needs a cone.");
    en.insert("banana", "banana");
    en.insert("banana_value", "A banana a day keeps the walrus away.");

    let mut fr = LocaleStrings::new();
    fr.insert(GREETING_KEY, "Bienvenue dans Localized Words !");
    fr.insert("walrus", "morse");
    fr.insert("walrus_value", "Le morse fait la sieste sur la glace.");
    fr.insert("cone", "c\u{00F4}ne");
    fr.insert("cone_value", "Une glace sans c\u{00F4}ne n'est pas une glace.");
    fr.insert("banana", "banane");
    fr.insert("banana_value", "Une banane par jour \u{00E9}loigne le morse.");

    let mut catalog = StringCatalog::new();
    catalog.add_locale("en", en);
    catalog.add_locale("fr", fr);
    catalog
}
