//! Locale registry: Single source of truth for all supported locales.
//!
//! The built-in registry is initialized once through `OnceLock` and stays
//! immutable for the lifetime of the process. Additional registries can be
//! built with [`LocaleRegistry::new`], which enforces the same invariants.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    /// Short stable code used in URLs, storage and content lookups (e.g., "es")
    pub code: &'static str,

    /// English name of the locale (e.g., "Bulgarian")
    pub name: &'static str,

    /// Name of the locale in its own language (e.g., "Български")
    pub native_name: &'static str,

    /// Flag asset shown next to the native name
    pub flag: &'static str,

    /// Whether this is the default locale (the only one without a URL prefix)
    pub is_default: bool,
}

/// Reasons a set of locale configurations cannot form a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("locale registry must contain at least one locale")]
    Empty,

    #[error("duplicate locale code '{0}'")]
    DuplicateCode(&'static str),

    #[error("locale registry has no default locale")]
    MissingDefault,

    #[error("locale registry has more than one default locale ({0:?})")]
    MultipleDefaults(Vec<&'static str>),
}

/// Ordered set of supported locales with exactly one default.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry, validating that codes are unique and exactly one
    /// locale is the default.
    ///
    /// # Arguments
    /// * `locales` - Locale configurations in selector order
    ///
    /// # Returns
    /// * `Ok(LocaleRegistry)` if the set is non-empty with unique codes and one default
    /// * `Err(RegistryError)` naming the first violated invariant
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, RegistryError> {
        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for locale in &locales {
            if !seen.insert(locale.code) {
                return Err(RegistryError::DuplicateCode(locale.code));
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, locale)| locale.is_default)
            .map(|(index, _)| index)
            .collect();

        match defaults.as_slice() {
            [] => Err(RegistryError::MissingDefault),
            [index] => Ok(Self {
                default_index: *index,
                locales,
            }),
            _ => Err(RegistryError::MultipleDefaults(
                defaults.iter().map(|&i| locales[i].code).collect(),
            )),
        }
    }

    /// Get the global locale registry instance.
    ///
    /// The built-in table is known to be valid, so initialization cannot fail.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| {
            let locales = default_locales();
            let default_index = locales
                .iter()
                .position(|locale| locale.is_default)
                .unwrap_or(0);
            LocaleRegistry {
                locales,
                default_index,
            }
        })
    }

    /// All locales, in selector order.
    pub fn locales(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The default locale configuration.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    /// Code of the default locale.
    pub fn default_code(&self) -> &'static str {
        self.default_locale().code
    }

    /// Get a locale configuration by its exact code.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "es", "bg")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale is registered
    /// * `None` if the code is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check whether `candidate` is exactly one of the registered codes.
    ///
    /// Case-sensitive, no trimming, no fallback to a primary subtag.
    ///
    /// # Arguments
    /// * `candidate` - Untrusted value (stored preference, query value, path segment)
    ///
    /// # Returns
    /// `true` if the value is a registered code, `false` otherwise.
    pub fn is_supported(&self, candidate: &str) -> bool {
        self.get_by_code(candidate).is_some()
    }

    /// Registered code that owns a URL prefix (every locale but the default).
    ///
    /// # Arguments
    /// * `segment` - First path segment, without slashes
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` for a non-default locale's code
    /// * `None` for the default code or anything unregistered
    pub fn prefix_owner(&self, segment: &str) -> Option<&LocaleConfig> {
        self.get_by_code(segment).filter(|locale| !locale.is_default)
    }
}

/// Built-in locales: Spanish (default), English and Bulgarian.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            flag: "/flags/es.svg",
            is_default: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "/flags/en.svg",
            is_default: false,
        },
        LocaleConfig {
            code: "bg",
            name: "Bulgarian",
            native_name: "Български",
            flag: "/flags/bg.svg",
            is_default: false,
        },
    ]
}
