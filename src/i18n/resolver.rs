//! Locale resolution for a single page view.
//!
//! The resolver is a pure function of the route locale, the stored
//! preference and the locale the request names explicitly, if any. Persisting
//! the outcome is a separate, best-effort step ([`Resolution::apply`]).

use crate::i18n::location::Location;
use crate::i18n::preference::PreferenceStore;
use crate::i18n::query::{explicit_locale_signal, without_locale_query_param};
use crate::i18n::strategy::LocalizationStrategy;
use crate::i18n::Locale;
use tracing::{debug, warn};

/// What the page view should do, decided exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverOutcome {
    /// Stored preference already matches the route.
    RenderAsIs,
    /// Render the route and store its locale (first visit or explicit signal).
    RenderAndStore,
    /// The stored preference or an explicit signal wins: navigate to `target`
    /// instead of rendering.
    RedirectAndStore { target: String },
}

/// Effective locale for the view plus the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub effective: Locale,
    pub outcome: ResolverOutcome,
}

impl Resolution {
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.outcome {
            ResolverOutcome::RedirectAndStore { target } => Some(target),
            _ => None,
        }
    }

    /// Whether this outcome writes the preference.
    pub fn stores_preference(&self) -> bool {
        !matches!(self.outcome, ResolverOutcome::RenderAsIs)
    }

    /// Persist the effective locale when the outcome calls for it.
    ///
    /// Storage failures are logged and dropped; returns whether a value was
    /// written.
    pub fn apply(&self, store: &mut dyn PreferenceStore) -> bool {
        if !self.stores_preference() {
            return false;
        }
        match store.write(self.effective.code()) {
            Ok(()) => true,
            Err(e) => {
                warn!(locale = %self.effective, "Dropping preference write: {}", e);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleResolver {
    strategy: LocalizationStrategy,
}

impl LocaleResolver {
    pub fn new(strategy: LocalizationStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> LocalizationStrategy {
        self.strategy
    }

    /// Decide the effective locale for one page view.
    ///
    /// * `route` - locale of the URL that matched
    /// * `stored` - raw persisted preference, if any
    /// * `explicit_signal` - locale the request named explicitly (`?lang=`)
    /// * `location` - current URL, used to build a redirect target
    ///
    /// A signal that disagrees with the route (only possible under the path
    /// convention) sends the visitor to the signalled locale's URL with the
    /// `lang` pair dropped.
    pub fn resolve(
        &self,
        route: Locale,
        stored: Option<&str>,
        explicit_signal: Option<Locale>,
        location: &Location,
    ) -> Resolution {
        if let Some(signal) = explicit_signal.filter(|signal| *signal != route) {
            let stripped = Location {
                query: without_locale_query_param(&location.query),
                ..location.clone()
            };
            let target = self.strategy.href_for(signal, &stripped);
            debug!(route = %route, signal = %signal, target = %target, "Redirecting to signalled locale");
            return Resolution {
                effective: signal,
                outcome: ResolverOutcome::RedirectAndStore { target },
            };
        }

        let Some(preferred) = stored.and_then(Locale::parse) else {
            debug!(route = %route, stored = ?stored, "No usable stored preference, bootstrapping");
            return Resolution {
                effective: route,
                outcome: ResolverOutcome::RenderAndStore,
            };
        };

        if preferred == route {
            return Resolution {
                effective: route,
                outcome: ResolverOutcome::RenderAsIs,
            };
        }

        if explicit_signal.is_none() {
            let target = self.strategy.href_for(preferred, location);
            debug!(route = %route, preferred = %preferred, target = %target, "Redirecting to stored preference");
            return Resolution {
                effective: preferred,
                outcome: ResolverOutcome::RedirectAndStore { target },
            };
        }

        debug!(route = %route, preferred = %preferred, "Explicit locale signal overrides stored preference");
        Resolution {
            effective: route,
            outcome: ResolverOutcome::RenderAndStore,
        }
    }

    /// [`resolve`](Self::resolve) with the route locale and explicit signal
    /// read from `location` under this resolver's strategy.
    pub fn resolve_location(&self, location: &Location, stored: Option<&str>) -> Resolution {
        let route = self.strategy.route_locale(location);
        let explicit_signal = explicit_locale_signal(&location.query);
        self.resolve(route, stored, explicit_signal, location)
    }
}
