//! Locale type: a validated handle into the global registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A locale known to be registered.
///
/// Only constructible from registered codes, so every accessor can rely on
/// the registry entry being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// Spanish, the default locale.
    pub const SPANISH: Locale = Locale { code: "es" };

    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const BULGARIAN: Locale = Locale { code: "bg" };

    /// Create a Locale from a code string.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "en", "bg")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` otherwise
    ///
    /// Callers on the rendering path should prefer [`Locale::parse`], which
    /// treats an unknown code as absent instead of an error.
    pub fn from_code(code: &str) -> Result<Locale> {
        match Self::parse(code) {
            Some(locale) => Ok(locale),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Look up a code, yielding `None` for anything unregistered.
    ///
    /// # Arguments
    /// * `code` - Untrusted value; matched exactly, case-sensitive
    ///
    /// # Returns
    /// * `Some(Locale)` if the code is registered
    /// * `None` otherwise
    pub fn parse(code: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
    }

    /// The registry's default locale.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_code(),
        }
    }

    /// All registered locales in selector order.
    ///
    /// # Returns
    /// A vector with one `Locale` per registry entry, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .locales()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        let registry = LocaleRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.default_locale())
    }

    /// English name (e.g., "Bulgarian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name (e.g., "Български").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    /// Whether this locale renders without a URL prefix.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_spanish_constant_is_default() {
        let spanish = Locale::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Spanish");
        assert!(spanish.is_default());
    }

    #[test]
    fn test_bulgarian_constant() {
        let bulgarian = Locale::BULGARIAN;
        assert_eq!(bulgarian.code(), "bg");
        assert_eq!(bulgarian.native_name(), "Български");
        assert_eq!(bulgarian.flag(), "/flags/bg.svg");
        assert!(!bulgarian.is_default());
    }

    // ==================== from_code / parse Tests ====================

    #[test]
    fn test_from_code_english() {
        let locale = Locale::from_code("en").expect("Should succeed");
        assert_eq!(locale, Locale::ENGLISH);
        assert_eq!(locale.name(), "English");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Locale::parse("EN").is_none());
        assert!(Locale::parse("").is_none());
        assert_eq!(Locale::parse("bg"), Some(Locale::BULGARIAN));
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(Locale::default_locale(), Locale::SPANISH);
        assert_eq!(Locale::default(), Locale::SPANISH);
    }

    #[test]
    fn test_all_in_registry_order() {
        assert_eq!(
            Locale::all(),
            vec![Locale::SPANISH, Locale::ENGLISH, Locale::BULGARIAN]
        );
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Locale::BULGARIAN.to_string(), "bg");
    }

    #[test]
    fn test_locale_inequality() {
        assert_ne!(Locale::ENGLISH, Locale::BULGARIAN);
    }
}
