//! The `?lang={code}` convention: link rewriting and signal detection.

use crate::i18n::Locale;
use regex::Regex;
use std::sync::OnceLock;

/// Query parameter carrying an explicit locale choice.
pub const LOCALE_QUERY_PARAM: &str = "lang";

static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("Invalid scheme regex")
    })
}

/// Whether `href` leaves the site (`https:`, `mailto:`, `tel:`, `//host`).
pub(crate) fn is_external(href: &str) -> bool {
    href.starts_with("//") || scheme_regex().is_match(href)
}

fn query_keys(query: &str) -> impl Iterator<Item = &str> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
}

/// Add `lang={code}` to an internal href, ahead of any fragment.
///
/// Left untouched: empty hrefs, the `#` placeholder, external URLs, and hrefs
/// that already carry a `lang` parameter with any value.
pub fn append_locale_query_param(href: &str, code: &str) -> String {
    if href.is_empty() || href == "#" || is_external(href) {
        return href.to_string();
    }

    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (href, None),
    };

    let existing_query = path.split_once('?').map(|(_, query)| query);
    if existing_query
        .map(|query| query_keys(query).any(|key| key == LOCALE_QUERY_PARAM))
        .unwrap_or(false)
    {
        return href.to_string();
    }

    let separator = match existing_query {
        None => "?",
        Some(query) if query.is_empty() || query.ends_with('&') => "",
        Some(_) => "&",
    };

    let mut result = format!("{path}{separator}{LOCALE_QUERY_PARAM}={code}");
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

/// Locale explicitly requested by the query string, if any.
///
/// The first `lang` pair decides; an unregistered value counts as no signal.
pub fn explicit_locale_signal(query: &str) -> Option<Locale> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOCALE_QUERY_PARAM)
        .and_then(|(_, value)| Locale::parse(value))
}

/// Drop every `lang` pair from a query string, keeping the rest verbatim.
pub fn without_locale_query_param(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split_once('=').map_or(*pair, |(key, _)| key) != LOCALE_QUERY_PARAM)
        .collect::<Vec<_>>()
        .join("&")
}
