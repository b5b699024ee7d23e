//! Path localization: mapping between base paths and localized paths.
//!
//! Convention: the default locale owns no prefix (`/talento`), every other
//! locale owns `/{code}` (`/bg/talento`). All functions here are pure and
//! never fail; malformed input is normalized instead.

use crate::i18n::{Locale, LocaleConfig, LocaleRegistry};
use std::fmt;

/// A normalized path with no locale prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

/// A base path combined with a locale's prefix convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedPath(String);

impl BasePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl LocalizedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LocalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BasePath> for String {
    fn from(path: BasePath) -> Self {
        path.0
    }
}

impl From<LocalizedPath> for String {
    fn from(path: LocalizedPath) -> Self {
        path.0
    }
}

impl PartialEq<&str> for BasePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<&str> for LocalizedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ensure a single leading slash and collapse runs of slashes.
///
/// An empty path becomes `/`. A trailing slash is kept.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);
    normalized.push('/');
    for ch in path.chars() {
        if ch == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(ch);
    }
    normalized
}

impl LocaleRegistry {
    /// Strip a non-default locale prefix from `path`.
    ///
    /// Only the first segment is inspected and only once. A first segment
    /// equal to the default code is left alone.
    pub fn delocalize(&self, path: &str) -> BasePath {
        let normalized = normalize_path(path);
        let rest = &normalized[1..];
        let (first, remainder) = match rest.find('/') {
            Some(index) => (&rest[..index], &rest[index..]),
            None => (rest, ""),
        };

        if self.prefix_owner(first).is_none() {
            return BasePath(normalized);
        }

        if remainder.is_empty() {
            BasePath("/".to_string())
        } else {
            BasePath(remainder.to_string())
        }
    }

    /// Build the path for `locale` from any path, delocalizing it first.
    pub fn localize(&self, locale: &LocaleConfig, path: &str) -> LocalizedPath {
        let base = self.delocalize(path);
        if locale.code == self.default_code() {
            return LocalizedPath(base.0);
        }

        if base.is_root() {
            LocalizedPath(format!("/{}", locale.code))
        } else {
            LocalizedPath(format!("/{}{}", locale.code, base.0))
        }
    }
}

/// [`LocaleRegistry::delocalize`] against the global registry.
pub fn delocalize(path: &str) -> BasePath {
    LocaleRegistry::get().delocalize(path)
}

/// [`LocaleRegistry::localize`] against the global registry.
pub fn localize(locale: Locale, path: &str) -> LocalizedPath {
    LocaleRegistry::get().localize(locale.config(), path)
}

/// Reattach a query string and fragment to a recomputed path, verbatim.
///
/// Both parts may be given with or without their leading `?` / `#`, as they
/// come from a parsed URL; empty parts are dropped.
pub fn compose_with_query_and_fragment(path: &str, query: &str, fragment: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut composed = String::with_capacity(path.len() + query.len() + fragment.len() + 2);
    composed.push_str(path);
    if !query.is_empty() {
        composed.push('?');
        composed.push_str(query);
    }
    if !fragment.is_empty() {
        composed.push('#');
        composed.push_str(fragment);
    }
    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== normalize_path Tests ====================

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_path("talento"), "/talento");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_collapses_slashes() {
        assert_eq!(normalize_path("//bg///talento//"), "/bg/talento/");
        assert_eq!(normalize_path("///"), "/");
    }

    // ==================== delocalize Tests ====================

    #[test]
    fn test_delocalize_strips_non_default_prefix() {
        assert_eq!(delocalize("/bg/talento"), "/talento");
        assert_eq!(delocalize("/en/a/b"), "/a/b");
    }

    #[test]
    fn test_delocalize_keeps_default_prefix() {
        assert_eq!(delocalize("/es/talento"), "/es/talento");
        assert_eq!(delocalize("/es"), "/es");
    }

    #[test]
    fn test_delocalize_bare_prefix_is_root() {
        assert_eq!(delocalize("/bg"), "/");
        assert_eq!(delocalize("/bg/"), "/");
        assert_eq!(delocalize("bg"), "/");
    }

    #[test]
    fn test_delocalize_only_matches_whole_segment() {
        assert_eq!(delocalize("/bgx/talento"), "/bgx/talento");
        assert_eq!(delocalize("/BG/talento"), "/BG/talento");
    }

    #[test]
    fn test_delocalize_strips_once() {
        assert_eq!(delocalize("/bg/en/talento"), "/en/talento");
    }

    #[test]
    fn test_delocalize_normalizes_malformed() {
        assert_eq!(delocalize("//en//contacto"), "/contacto");
        assert_eq!(delocalize("privacy"), "/privacy");
    }

    // ==================== localize Tests ====================

    #[test]
    fn test_localize_root() {
        assert_eq!(localize(Locale::SPANISH, "/"), "/");
        assert_eq!(localize(Locale::BULGARIAN, "/"), "/bg");
        assert_eq!(localize(Locale::ENGLISH, ""), "/en");
    }

    #[test]
    fn test_localize_non_root() {
        assert_eq!(localize(Locale::SPANISH, "/talento"), "/talento");
        assert_eq!(localize(Locale::ENGLISH, "/talento"), "/en/talento");
    }

    #[test]
    fn test_localize_is_idempotent_over_prefixed_input() {
        assert_eq!(localize(Locale::ENGLISH, "/bg/talento"), "/en/talento");
        assert_eq!(localize(Locale::SPANISH, "/bg/talento"), "/talento");
        assert_eq!(localize(Locale::BULGARIAN, "/bg"), "/bg");
    }

    #[test]
    fn test_localize_custom_registry() {
        let registry = LocaleRegistry::new(vec![
            LocaleConfig {
                code: "en",
                name: "English",
                native_name: "English",
                flag: "",
                is_default: true,
            },
            LocaleConfig {
                code: "es",
                name: "Spanish",
                native_name: "Español",
                flag: "",
                is_default: false,
            },
        ])
        .unwrap();
        let spanish = registry.get_by_code("es").unwrap().clone();
        assert_eq!(registry.localize(&spanish, "/talento"), "/es/talento");
        assert_eq!(registry.delocalize("/es/talento"), "/talento");
        assert_eq!(registry.delocalize("/bg/talento"), "/bg/talento");
    }

    // ==================== compose Tests ====================

    #[test]
    fn test_compose_with_query_and_fragment() {
        assert_eq!(
            compose_with_query_and_fragment("/bg/talento", "?a=1&b=2", "#contacto"),
            "/bg/talento?a=1&b=2#contacto"
        );
        assert_eq!(
            compose_with_query_and_fragment("/bg", "a=1", "contacto"),
            "/bg?a=1#contacto"
        );
    }

    #[test]
    fn test_compose_omits_empty_parts() {
        assert_eq!(compose_with_query_and_fragment("/en", "", ""), "/en");
        assert_eq!(compose_with_query_and_fragment("/en", "?", "#"), "/en");
        assert_eq!(compose_with_query_and_fragment("/", "", "#impacto"), "/#impacto");
    }

    // ==================== Property Tests ====================

    fn base_path() -> impl Strategy<Value = String> {
        (
            prop::collection::vec("[a-z0-9-]{1,8}", 0..4),
            any::<bool>(),
        )
            .prop_filter("first segment must not be a locale code", |(segments, _)| {
                segments
                    .first()
                    .map(|first| !LocaleRegistry::get().is_supported(first))
                    .unwrap_or(true)
            })
            .prop_map(|(segments, trailing)| {
                let mut path = format!("/{}", segments.join("/"));
                if trailing && !segments.is_empty() {
                    path.push('/');
                }
                path
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip(path in base_path()) {
            for locale in Locale::all() {
                prop_assert_eq!(delocalize(localize(locale, &path).as_str()), delocalize(&path));
            }
        }

        #[test]
        fn prop_localize_injective(path in base_path()) {
            prop_assume!(path != "/");
            let localized: Vec<String> = Locale::all()
                .into_iter()
                .map(|locale| localize(locale, &path).into())
                .collect();
            for (i, a) in localized.iter().enumerate() {
                for b in &localized[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }

        #[test]
        fn prop_delocalize_never_panics(path in ".{0,40}") {
            let base = delocalize(&path);
            prop_assert!(base.as_str().starts_with('/'));
            prop_assert!(!base.as_str().contains("//"));
        }
    }
}
