//! Static per-locale site content.
//!
//! The content table is keyed by locale only; locale routing never looks
//! inside it.

mod navigation;
mod strings;

pub use navigation::{
    navigation, switch_href, LanguageOption, NavLink, Navigation, CONTACT_EMAIL, HEADER_ANCHORS,
    SWITCH_PATH,
};
pub use strings::{PageStrings, BULGARIAN_STRINGS, ENGLISH_STRINGS, SPANISH_STRINGS};

use crate::i18n::Locale;

/// Copy for `locale`. Unknown codes fall back to the default locale's copy.
pub fn strings_for(locale: Locale) -> &'static PageStrings {
    match locale.code() {
        "en" => &ENGLISH_STRINGS,
        "bg" => &BULGARIAN_STRINGS,
        _ => &SPANISH_STRINGS,
    }
}
