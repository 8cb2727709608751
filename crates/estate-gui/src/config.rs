//! Application configuration.
//!
//! Values are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `settings.toml` in the platform config directory
//! 3. environment variables (`ESTATE_GRAPHQL_API_URL`, `ESTATE_APP_URL`,
//!    and the `VITE_*` names used by the web build)
//! 4. command-line flags
//!
//! The result is built once in `main` and handed to the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use estate_client::{ClientConfig, DEFAULT_CACHE_TTL, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, Transport};
use estate_core::DEFAULT_DEBOUNCE;
use estate_model::PROPERTY_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::GuiError;
use crate::theme::ThemeMode;

/// Default public address of the web catalog.
pub const DEFAULT_APP_URL: &str = "http://localhost:5173";

/// Environment variables holding the API endpoint, in lookup order.
pub const API_URL_VARS: [&str; 2] = ["ESTATE_GRAPHQL_API_URL", "VITE_GRAPHQL_API_URL"];

/// Environment variables holding the public app address, in lookup order.
pub const APP_URL_VARS: [&str; 2] = ["ESTATE_APP_URL", "VITE_APP_URL"];

// =============================================================================
// APP CONFIG
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL endpoint.
    pub api_url: String,
    /// Public address of the web catalog, used for "Open in browser".
    pub app_url: String,
    /// HTTP method for queries.
    pub transport: Transport,
    /// Search debounce delay in milliseconds.
    pub debounce_ms: u64,
    /// Properties per page.
    pub page_size: u32,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Response cache lifetime in seconds (0 disables the cache).
    pub cache_ttl_secs: u64,
    /// Default log level when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
    /// Appearance.
    pub theme_mode: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_ENDPOINT.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            transport: Transport::default(),
            debounce_ms: duration_millis(DEFAULT_DEBOUNCE),
            page_size: PROPERTY_PAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
            log_level: "info".to_string(),
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--api-url`
    pub api_url: Option<String>,
    /// `--app-url`
    pub app_url: Option<String>,
    /// `--transport`
    pub transport: Option<Transport>,
}

impl AppConfig {
    /// Load the configuration from every layer.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, GuiError> {
        let mut config = Self::load_from(&Self::config_path());
        config.apply_env(|name| std::env::var(name).ok());
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a specific path. A missing or malformed file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "Ignoring malformed settings file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Apply environment variables through `lookup`. Blank values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };
        if let Some(api_url) = first(&API_URL_VARS) {
            self.api_url = api_url;
        }
        if let Some(app_url) = first(&APP_URL_VARS) {
            self.app_url = app_url;
        }
    }

    /// Apply command-line values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_url) = &overrides.api_url {
            self.api_url.clone_from(api_url);
        }
        if let Some(app_url) = &overrides.app_url {
            self.app_url.clone_from(app_url);
        }
        if let Some(transport) = overrides.transport {
            self.transport = transport;
        }
    }

    /// Reject values the application cannot run with.
    pub fn validate(&self) -> Result<(), GuiError> {
        if !is_http_url(&self.api_url) {
            return Err(GuiError::config(format!(
                "API URL must be an http(s) address: {}",
                self.api_url
            )));
        }
        if !is_http_url(&self.app_url) {
            return Err(GuiError::config(format!(
                "app URL must be an http(s) address: {}",
                self.app_url
            )));
        }
        if self.page_size == 0 {
            return Err(GuiError::config("page size must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(GuiError::config("request timeout must be at least 1 second"));
        }
        Ok(())
    }

    /// Write the default settings to `path` unless a file is already there.
    ///
    /// Returns whether a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, GuiError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {e}"),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {e}"),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "EstateStudio", "Estate Studio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Settings for the data-fetch client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_transport(self.transport)
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_cache_ttl(Duration::from_secs(self.cache_ttl_secs))
    }

    /// Search debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Configured log level, falling back to `info` when unparseable.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}

fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:5189/graphql");
        assert_eq!(config.app_url, DEFAULT_APP_URL);
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert_eq!(config.page_size, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_precedence_and_blank_values() {
        let mut config = AppConfig::default();
        config.apply_env(|name| match name {
            "ESTATE_GRAPHQL_API_URL" => Some("  ".to_string()),
            "VITE_GRAPHQL_API_URL" => Some("https://api.example.com/graphql".to_string()),
            "ESTATE_APP_URL" => Some("https://homes.example.com".to_string()),
            "VITE_APP_URL" => Some("https://ignored.example.com".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "https://api.example.com/graphql");
        assert_eq!(config.app_url, "https://homes.example.com");
    }

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::default();
        config.apply_env(|_| Some("https://env.example.com".to_string()));
        config.apply_overrides(&ConfigOverrides {
            api_url: Some("https://cli.example.com/graphql".to_string()),
            transport: Some(Transport::Post),
            ..Default::default()
        });
        assert_eq!(config.api_url, "https://cli.example.com/graphql");
        assert_eq!(config.app_url, "https://env.example.com");
        assert_eq!(config.client_config().transport, Transport::Post);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig {
            api_url: "localhost:5189".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GuiError::Config { .. })));

        let config = AppConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_filter() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);

        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::INFO);
    }
}
