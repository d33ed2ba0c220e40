//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.trivia-query/config.toml` (user)
//! 3. `/etc/trivia-query/config.toml` (system)
//!
//! Every section and field is optional. The endpoint origin can also be
//! overridden with the `TRIVIA_BASE_URL` environment variable.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::CacheConfig;
use crate::client::EndpointConfig;
use crate::controller::BypassPolicy;
use crate::{Result, TriviaError};

/// Environment variable overriding `[endpoint] base_url`.
pub const BASE_URL_ENV_VAR: &str = "TRIVIA_BASE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Controller behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControllerConfig {
    /// `"sticky"` (default) or `"one-shot"`.
    #[serde(default)]
    pub bypass: BypassPolicy,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.trivia-query/config.toml`
    /// 3. `/etc/trivia-query/config.toml`
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit_path)?.ok_or_else(|| {
            TriviaError::Configuration(
                "No config file found. Create ~/.trivia-query/config.toml or /etc/trivia-query/config.toml"
                    .to_string(),
            )
        })?;
        Self::load_from_file(&path)
    }

    /// Like [`load()`](Self::load), but falls back to defaults when no file
    /// exists in the standard locations. An explicit path must still exist.
    ///
    /// Applies the `TRIVIA_BASE_URL` override.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };
        Ok(config.with_base_url_override(std::env::var(BASE_URL_ENV_VAR).ok()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TriviaError::Configuration(format!("Failed to parse config: {e}")))
    }

    /// Replace the endpoint origin when `base_url` is set and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.endpoint.base_url = url;
        }
        self
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TriviaError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            TriviaError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path; `None` when no standard file exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(TriviaError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".trivia-query").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/trivia-query/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.endpoint.path, "/api/trivia");
        assert!(config.cache.enabled);
        assert_eq!(config.cache.max_entries, 1_000);
        assert_eq!(config.controller.bypass, BypassPolicy::Sticky);
    }

    #[test]
    fn parse_minimal_config() {
        let config = Config::from_toml(
            r#"
            [endpoint]
            base_url = "https://trivia.example.com"
        "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.base_url, "https://trivia.example.com");
        // Defaults preserved
        assert_eq!(config.endpoint.path, "/api/trivia");
        assert!(config.cache.enabled);
    }

    #[test]
    fn parse_full_config() {
        let config = Config::from_toml(
            r#"
            [endpoint]
            base_url = "http://localhost:8080"
            path = "/v2/trivia"
            user_agent = "quiz-night/1.0"

            [cache]
            enabled = false
            max_entries = 50

            [controller]
            bypass = "one-shot"
        "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.path, "/v2/trivia");
        assert_eq!(config.endpoint.user_agent.as_deref(), Some("quiz-night/1.0"));
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, 50);
        assert_eq!(config.controller.bypass, BypassPolicy::OneShot);
    }

    #[test]
    fn unknown_bypass_policy_is_rejected() {
        let result = Config::from_toml(
            r#"
            [controller]
            bypass = "sometimes"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn base_url_override_ignores_blank_values() {
        let config = Config::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:3000");

        let config = Config::default().with_base_url_override(Some("http://x:1".to_string()));
        assert_eq!(config.endpoint.base_url, "http://x:1");
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }
}
