//! HTTP layer: renders localized pages and hosts the language switch.

mod cookie;
mod render;

pub use cookie::CookiePreference;
pub use render::{escape_html, render_page, PageKind};

use crate::config::Config;
use crate::content::SWITCH_PATH;
use crate::i18n::{
    switch_locale, Locale, LocaleConfig, LocaleRegistry, LocaleResolver, LocalizationStrategy,
    Location, PreferenceStore,
};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{
        header::{CONTENT_TYPE, LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode, Uri,
    },
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Immutable state shared by all requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: LocaleResolver,
    pub preference_key: String,
    pub preference_max_age_secs: u64,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolver: LocaleResolver::new(config.locale_strategy),
            preference_key: config.preference_key.clone(),
            preference_max_age_secs: u64::from(config.preference_max_age_days) * 24 * 60 * 60,
        }
    }

    fn strategy(&self) -> LocalizationStrategy {
        self.resolver.strategy()
    }

    fn preference(&self, headers: &HeaderMap) -> CookiePreference {
        CookiePreference::from_headers(headers, &self.preference_key, self.preference_max_age_secs)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locales", get(list_locales))
        .route(&format!("{SWITCH_PATH}/:code"), get(switch))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config));
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        "Serving on {} (locale strategy: {}, default locale: {})",
        address,
        config.locale_strategy,
        LocaleRegistry::get().default_code()
    );

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct LocalesResponse {
    default: &'static str,
    strategy: String,
    locales: &'static [LocaleConfig],
}

async fn list_locales(State(state): State<Arc<AppState>>) -> Json<LocalesResponse> {
    let registry = LocaleRegistry::get();
    Json(LocalesResponse {
        default: registry.default_code(),
        strategy: state.strategy().to_string(),
        locales: registry.locales(),
    })
}

#[derive(Debug, Deserialize)]
struct SwitchParams {
    from: Option<String>,
}

/// Only same-site paths are accepted as a return target.
///
/// Browsers drop tabs and newlines from URLs, so any control character is
/// refused along with `//` and `\`.
fn safe_return_path(from: Option<&str>) -> &str {
    match from {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(|c| c.is_control()) =>
        {
            path
        }
        _ => "/",
    }
}

async fn switch(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(params): Query<SwitchParams>,
    headers: HeaderMap,
) -> Response {
    let from = safe_return_path(params.from.as_deref());
    let location = Location::parse(from);

    let Some(target) = Locale::parse(&code) else {
        debug!(code = %code, "Ignoring switch to unsupported locale");
        return redirect(StatusCode::SEE_OTHER, from, None);
    };

    let current = state.strategy().route_locale(&location);
    let mut store = state.preference(&headers);

    match switch_locale(current, target, &location, state.strategy(), &mut store) {
        Some(href) => redirect(StatusCode::SEE_OTHER, &href, store.pending_cookie()),
        None => redirect(StatusCode::SEE_OTHER, from, None),
    }
}

async fn page(State(state): State<Arc<AppState>>, uri: Uri, headers: HeaderMap) -> Response {
    let location = Location::new(uri.path(), uri.query().unwrap_or_default(), "");
    let mut store = state.preference(&headers);
    let stored = store.read();

    let resolution = state.resolver.resolve_location(&location, stored.as_deref());
    resolution.apply(&mut store);

    if let Some(target) = resolution.redirect_target() {
        return redirect(StatusCode::FOUND, target, store.pending_cookie());
    }

    let kind = PageKind::from_base_path(location.base_path().as_str());
    let status = if kind == PageKind::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let body = render_page(kind, resolution.effective, state.strategy(), &location);
    let mut response = (status, Html(body)).into_response();
    if let Some(cookie) = store.pending_cookie() {
        response.headers_mut().insert(SET_COOKIE, cookie.clone());
    }
    response
}

fn redirect(status: StatusCode, target: &str, cookie: Option<&HeaderValue>) -> Response {
    let location = HeaderValue::from_str(target).unwrap_or_else(|_| HeaderValue::from_static("/"));
    let mut response = (status, [(LOCATION, location)]).into_response();
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    if let Some(cookie) = cookie {
        headers.insert(SET_COOKIE, cookie.clone());
    }
    response
}
