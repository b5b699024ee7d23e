//! The current URL split into the parts locale routing cares about.

use crate::i18n::path::{compose_with_query_and_fragment, delocalize, normalize_path, BasePath};

/// Path, query and fragment of a same-origin URL.
///
/// `query` and `fragment` are stored without their leading `?` / `#` and are
/// never decoded or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl Location {
    pub fn new(path: &str, query: &str, fragment: &str) -> Self {
        Self {
            path: normalize_path(path),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
            fragment: fragment.strip_prefix('#').unwrap_or(fragment).to_string(),
        }
    }

    /// Split `path?query#fragment`. Anything before the path (scheme, host)
    /// is not expected and is treated as part of the path.
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = url.split_once('#').unwrap_or((url, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::new(path, query, fragment)
    }

    pub fn base_path(&self) -> BasePath {
        delocalize(&self.path)
    }

    /// Same query and fragment on a different path.
    pub fn with_path(&self, path: &str) -> String {
        compose_with_query_and_fragment(path, &self.query, &self.fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let location = Location::parse("/bg/talento?a=1&b=2#contacto");
        assert_eq!(location.path, "/bg/talento");
        assert_eq!(location.query, "a=1&b=2");
        assert_eq!(location.fragment, "contacto");
        assert_eq!(location.base_path(), "/talento");
    }

    #[test]
    fn test_parse_fragment_with_question_mark() {
        let location = Location::parse("/x#a?b");
        assert_eq!(location.path, "/x");
        assert_eq!(location.query, "");
        assert_eq!(location.fragment, "a?b");
    }

    #[test]
    fn test_parse_normalizes_path() {
        let location = Location::parse("//en//contacto?");
        assert_eq!(location.path, "/en/contacto");
        assert_eq!(location.query, "");
    }

    #[test]
    fn test_with_path_keeps_query_and_fragment() {
        let location = Location::parse("/talento?ref=mail#impacto");
        assert_eq!(location.with_path("/en/talento"), "/en/talento?ref=mail#impacto");
    }
}
