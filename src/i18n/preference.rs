//! Persisted locale preference.
//!
//! The preference is a single key holding one locale code. Stores expose only
//! read and write; callers treat writes as best effort.

use crate::i18n::LocaleRegistry;
use thiserror::Error;

/// Storage key used when none is configured.
pub const DEFAULT_PREFERENCE_KEY: &str = "preferredLanguage";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("'{0}' is not a registered locale code")]
    InvalidValue(String),
}

/// Read/write access to the visitor's stored locale code.
pub trait PreferenceStore {
    /// Raw stored value. Unavailable storage reads as absent.
    fn read(&self) -> Option<String>;

    fn write(&mut self, code: &str) -> Result<(), PreferenceError>;
}

/// Reject anything outside the registry before it reaches storage.
pub fn validate_code(code: &str) -> Result<(), PreferenceError> {
    if LocaleRegistry::get().is_supported(code) {
        Ok(())
    } else {
        Err(PreferenceError::InvalidValue(code.to_string()))
    }
}

/// In-process store, also used to model unavailable storage in tests.
#[derive(Debug, Clone)]
pub struct MemoryPreference {
    value: Option<String>,
    available: bool,
}

impl MemoryPreference {
    pub fn new() -> Self {
        Self {
            value: None,
            available: true,
        }
    }

    /// Store pre-populated with a raw value (which may be invalid).
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            available: true,
        }
    }

    /// Storage that reads absent and rejects every write.
    pub fn unavailable() -> Self {
        Self {
            value: None,
            available: false,
        }
    }
}

impl Default for MemoryPreference {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPreference {
    fn read(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        self.value.clone()
    }

    fn write(&mut self, code: &str) -> Result<(), PreferenceError> {
        if !self.available {
            return Err(PreferenceError::Unavailable);
        }
        validate_code(code)?;
        self.value = Some(code.to_string());
        Ok(())
    }
}
