use crate::i18n::{LocalizationStrategy, DEFAULT_PREFERENCE_KEY};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Locale routing
    pub locale_strategy: LocalizationStrategy,
    pub preference_key: String,
    pub preference_max_age_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            // Locale routing
            locale_strategy: match std::env::var("LOCALE_STRATEGY") {
                Ok(v) => v.parse().context("Invalid LOCALE_STRATEGY")?,
                Err(_) => LocalizationStrategy::default(),
            },
            preference_key: std::env::var("PREFERENCE_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PREFERENCE_KEY.to_string()),
            preference_max_age_days: std::env::var("PREFERENCE_MAX_AGE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(365),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            locale_strategy: LocalizationStrategy::default(),
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            preference_max_age_days: 365,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "HOST",
        "PORT",
        "LOCALE_STRATEGY",
        "PREFERENCE_KEY",
        "PREFERENCE_MAX_AGE_DAYS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.locale_strategy, LocalizationStrategy::PathPrefix);
        assert_eq!(config.preference_key, "preferredLanguage");
        assert_eq!(config.preference_max_age_days, 365);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("LOCALE_STRATEGY", "query");
        std::env::set_var("PREFERENCE_KEY", "siteLang");
        std::env::set_var("PREFERENCE_MAX_AGE_DAYS", "30");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.locale_strategy, LocalizationStrategy::QueryParam);
        assert_eq!(config.preference_key, "siteLang");
        assert_eq!(config.preference_max_age_days, 30);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_strategy() {
        clear_env();
        std::env::set_var("LOCALE_STRATEGY", "cookie");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LOCALE_STRATEGY"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_preference_key_falls_back() {
        clear_env();
        std::env::set_var("PREFERENCE_KEY", "  ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.preference_key, "preferredLanguage");
        clear_env();
    }
}
