//! Internationalization (i18n): locale resolution and localized routing.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales
//! - `locale`: Validated `Locale` handle into the registry
//! - `path`: Base path / localized path mapping
//! - `query`: The alternate `?lang=` link convention
//! - `location`: Current URL split into path, query and fragment
//! - `strategy`: Path-prefix vs query-param convention
//! - `preference`: Persisted locale preference
//! - `resolver`: Effective locale for a page view
//! - `switch`: Explicit language switch
//!
//! # Example
//!
//! ```rust,ignore
//! use scouting_landing::i18n::{delocalize, localize, Locale};
//!
//! let base = delocalize("/bg/talento"); // "/talento"
//! let english = localize(Locale::ENGLISH, base.as_str()); // "/en/talento"
//! ```

mod locale;
mod location;
mod path;
mod preference;
mod query;
mod registry;
mod resolver;
mod strategy;
mod switch;

pub use locale::Locale;
pub use location::Location;
pub use path::{
    compose_with_query_and_fragment, delocalize, localize, normalize_path, BasePath,
    LocalizedPath,
};
pub use preference::{
    validate_code, MemoryPreference, PreferenceError, PreferenceStore, DEFAULT_PREFERENCE_KEY,
};
pub use query::{
    append_locale_query_param, explicit_locale_signal, without_locale_query_param,
    LOCALE_QUERY_PARAM,
};
pub use registry::{LocaleConfig, LocaleRegistry, RegistryError};
pub use resolver::{LocaleResolver, Resolution, ResolverOutcome};
pub use strategy::LocalizationStrategy;
pub use switch::switch_locale;
