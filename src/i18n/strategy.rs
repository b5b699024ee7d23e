//! How a locale is carried in site URLs.
//!
//! A deployment picks one strategy and uses it for every link it emits;
//! the two conventions are not mixed within one link set.

use crate::i18n::location::Location;
use crate::i18n::path::{compose_with_query_and_fragment, localize};
use crate::i18n::query::{
    append_locale_query_param, explicit_locale_signal, is_external, without_locale_query_param,
    LOCALE_QUERY_PARAM,
};
use crate::i18n::{Locale, LocaleRegistry};
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalizationStrategy {
    /// `/` for the default locale, `/{code}/...` for the others.
    #[default]
    PathPrefix,
    /// Unprefixed paths with `?lang={code}`.
    QueryParam,
}

impl LocalizationStrategy {
    /// Locale the visitor actually landed on, according to the URL alone.
    pub fn route_locale(&self, location: &Location) -> Locale {
        match self {
            Self::PathPrefix => {
                let first = location
                    .path
                    .trim_start_matches('/')
                    .split('/')
                    .next()
                    .unwrap_or_default();
                LocaleRegistry::get()
                    .prefix_owner(first)
                    .and_then(|config| Locale::parse(config.code))
                    .unwrap_or_default()
            }
            Self::QueryParam => explicit_locale_signal(&location.query).unwrap_or_default(),
        }
    }

    /// URL showing the same page as `location` in `locale`.
    ///
    /// Query parameters and fragment are carried over; under the query
    /// convention any previous `lang` pair is replaced.
    pub fn href_for(&self, locale: Locale, location: &Location) -> String {
        match self {
            Self::PathPrefix => location.with_path(localize(locale, &location.path).as_str()),
            Self::QueryParam => {
                let mut query = without_locale_query_param(&location.query);
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(LOCALE_QUERY_PARAM);
                query.push('=');
                query.push_str(locale.code());
                compose_with_query_and_fragment(&location.path, &query, &location.fragment)
            }
        }
    }

    /// Rewrite an internal navigation href for `locale`.
    ///
    /// External hrefs, placeholders and in-page anchors are returned unchanged
    /// under the path convention.
    pub fn link(&self, href: &str, locale: Locale) -> String {
        match self {
            Self::PathPrefix => {
                if href.is_empty() || href.starts_with('#') || is_external(href) {
                    return href.to_string();
                }
                let location = Location::parse(href);
                location.with_path(localize(locale, &location.path).as_str())
            }
            Self::QueryParam => append_locale_query_param(href, locale.code()),
        }
    }
}

impl FromStr for LocalizationStrategy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "path" | "path-prefix" => Ok(Self::PathPrefix),
            "query" | "query-param" => Ok(Self::QueryParam),
            other => bail!("Unknown locale strategy: '{}' (expected 'path' or 'query')", other),
        }
    }
}

impl fmt::Display for LocalizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathPrefix => f.write_str("path"),
            Self::QueryParam => f.write_str("query"),
        }
    }
}
