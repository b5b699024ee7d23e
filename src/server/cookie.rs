//! Cookie-backed locale preference.

use crate::i18n::{validate_code, PreferenceError, PreferenceStore};
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

/// Preference read from the request's `Cookie` header.
///
/// Writes are staged as a `Set-Cookie` value for the response. The cookie is
/// deliberately readable by page scripts, since the language selector runs
/// client-side as well.
#[derive(Debug, Clone)]
pub struct CookiePreference {
    key: String,
    current: Option<String>,
    max_age_secs: u64,
    pending: Option<HeaderValue>,
}

impl CookiePreference {
    pub fn from_headers(headers: &HeaderMap, key: &str, max_age_secs: u64) -> Self {
        let current = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|raw| cookie_value(raw, key));

        Self {
            key: key.to_string(),
            current,
            max_age_secs,
            pending: None,
        }
    }

    /// `Set-Cookie` value produced by the last successful write.
    pub fn pending_cookie(&self) -> Option<&HeaderValue> {
        self.pending.as_ref()
    }
}

impl PreferenceStore for CookiePreference {
    fn read(&self) -> Option<String> {
        self.current.clone()
    }

    fn write(&mut self, code: &str) -> Result<(), PreferenceError> {
        validate_code(code)?;
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.key, code, self.max_age_secs
        );
        let value = HeaderValue::from_str(&cookie).map_err(|_| PreferenceError::Unavailable)?;
        self.current = Some(code.to_string());
        self.pending = Some(value);
        Ok(())
    }
}

/// Value of cookie `needle` in a `Cookie` header line.
pub(crate) fn cookie_value(raw: &str, needle: &str) -> Option<String> {
    for entry in raw.split(';') {
        let mut parts = entry.splitn(2, '=');
        let name = parts.next().map(str::trim).unwrap_or_default();
        if name != needle {
            continue;
        }
        if let Some(value) = parts.next().map(str::trim) {
            if value.is_empty() {
                return None;
            }
            return Some(value.trim_matches('"').to_string());
        }
        return None;
    }
    None
}
