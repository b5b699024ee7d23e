//! Explicit language switch from the selector.

use crate::i18n::location::Location;
use crate::i18n::preference::PreferenceStore;
use crate::i18n::strategy::LocalizationStrategy;
use crate::i18n::Locale;
use tracing::{info, warn};

/// Compute where to navigate when the visitor picks `target`.
///
/// Returns `None` when `target` is already the effective locale. Otherwise
/// the preference is updated (best effort; a failed write never blocks the
/// switch) and the caller performs a full navigation to the returned URL,
/// which keeps the current query string and fragment.
pub fn switch_locale(
    current: Locale,
    target: Locale,
    location: &Location,
    strategy: LocalizationStrategy,
    store: &mut dyn PreferenceStore,
) -> Option<String> {
    if target == current {
        return None;
    }

    let href = strategy.href_for(target, location);

    if let Err(e) = store.write(target.code()) {
        warn!(locale = %target, "Could not persist locale preference: {}", e);
    }

    info!(from = %current, to = %target, href = %href, "Switching locale");
    Some(href)
}
