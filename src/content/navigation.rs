//! Navigation model: header, footer and language selector links.

use crate::i18n::{Locale, LocalizationStrategy, Location};
use url::form_urlencoded;

/// Path of the language switch endpoint; the locale code follows it.
pub const SWITCH_PATH: &str = "/_locale";

/// In-page anchors of the landing sections, matching `PageStrings::nav_labels`.
pub const HEADER_ANCHORS: [&str; 5] = [
    "#programa",
    "#infraestructura",
    "#talento",
    "#impacto",
    "#contacto",
];

pub const CONTACT_EMAIL: &str = "hola@sportsscouting.bg";
pub const CONTACT_PHONE: &str = "+359 000 000 000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub active: bool,
    /// Same page in this locale, for crawlers and non-script navigation
    pub href: String,
    /// Switch endpoint that also stores the preference
    pub switch_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub home_href: String,
    pub header: Vec<NavLink>,
    pub footer: Vec<NavLink>,
    pub languages: Vec<LanguageOption>,
}

/// Switch endpoint URL for `locale`, returning to `location` afterwards.
///
/// The fragment travels inside `from` when `location` carries one. A page
/// rendered on the server never sees its own fragment, so links built there
/// return to the page top.
pub fn switch_href(locale: Locale, location: &Location) -> String {
    let from = location.with_path(&location.path);
    let encoded: String = form_urlencoded::byte_serialize(from.as_bytes()).collect();
    format!("{SWITCH_PATH}/{}?from={encoded}", locale.code())
}

/// Build the navigation for a page rendered in `locale` at `location`.
pub fn navigation(locale: Locale, strategy: LocalizationStrategy, location: &Location) -> Navigation {
    let strings = super::strings_for(locale);

    let header = HEADER_ANCHORS
        .iter()
        .zip(strings.nav_labels.iter())
        .map(|(anchor, label)| NavLink {
            text: label.to_string(),
            href: strategy.link(anchor, locale),
        })
        .collect();

    let footer = vec![
        NavLink {
            text: CONTACT_EMAIL.to_string(),
            href: strategy.link(&format!("mailto:{CONTACT_EMAIL}"), locale),
        },
        NavLink {
            text: CONTACT_PHONE.to_string(),
            href: strategy.link(&format!("tel:{}", CONTACT_PHONE.replace(' ', "")), locale),
        },
        NavLink {
            text: strings.privacy_title.to_string(),
            href: strategy.link("/privacy", locale),
        },
        NavLink {
            text: strings.terms_title.to_string(),
            href: strategy.link("/terms", locale),
        },
    ];

    let languages = Locale::all()
        .into_iter()
        .map(|option| LanguageOption {
            code: option.code(),
            native_name: option.native_name(),
            flag: option.flag(),
            active: option == locale,
            href: strategy.href_for(option, location),
            switch_href: switch_href(option, location),
        })
        .collect();

    Navigation {
        home_href: strategy.link("/", locale),
        header,
        footer,
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_href_per_locale() {
        let location = Location::parse("/");
        let strategy = LocalizationStrategy::PathPrefix;
        assert_eq!(navigation(Locale::SPANISH, strategy, &location).home_href, "/");
        assert_eq!(navigation(Locale::BULGARIAN, strategy, &location).home_href, "/bg");
        assert_eq!(
            navigation(Locale::ENGLISH, LocalizationStrategy::QueryParam, &location).home_href,
            "/?lang=en"
        );
    }

    #[test]
    fn test_header_labels_and_anchors() {
        let location = Location::parse("/en");
        let nav = navigation(Locale::ENGLISH, LocalizationStrategy::PathPrefix, &location);
        assert_eq!(nav.header.len(), 5);
        assert_eq!(nav.header[0].text, "Comprehensive Program");
        assert_eq!(nav.header[0].href, "#programa");
        assert_eq!(nav.header[4].href, "#contacto");
    }

    #[test]
    fn test_footer_leaves_external_links() {
        let location = Location::parse("/bg");
        let nav = navigation(Locale::BULGARIAN, LocalizationStrategy::QueryParam, &location);
        assert_eq!(nav.footer[0].href, "mailto:hola@sportsscouting.bg");
        assert_eq!(nav.footer[1].href, "tel:+359000000000");
        assert_eq!(nav.footer[2].href, "/privacy?lang=bg");
    }

    #[test]
    fn test_language_options() {
        let location = Location::parse("/bg/privacy?ref=x");
        let nav = navigation(Locale::BULGARIAN, LocalizationStrategy::PathPrefix, &location);
        let codes: Vec<_> = nav.languages.iter().map(|o| o.code).collect();
        assert_eq!(codes, vec!["es", "en", "bg"]);

        let active: Vec<_> = nav.languages.iter().filter(|o| o.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].code, "bg");

        assert_eq!(nav.languages[0].href, "/privacy?ref=x");
        assert_eq!(nav.languages[1].href, "/en/privacy?ref=x");
    }

    #[test]
    fn test_switch_href_encodes_return_url() {
        let location = Location::parse("/bg/privacy?ref=x&y=1");
        assert_eq!(
            switch_href(Locale::ENGLISH, &location),
            "/_locale/en?from=%2Fbg%2Fprivacy%3Fref%3Dx%26y%3D1"
        );
    }

    #[test]
    fn test_switch_href_carries_known_fragment() {
        let location = Location::parse("/privacy#cookies");
        assert_eq!(
            switch_href(Locale::BULGARIAN, &location),
            "/_locale/bg?from=%2Fprivacy%23cookies"
        );
    }
}
