//! HTTP client for `GET /api/trivia`.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::TriviaEndpoint;
use crate::key::QueryKey;
use crate::telemetry;
use crate::types::TriviaResponse;
use crate::{Result, TriviaError};

/// Default endpoint origin.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default endpoint path.
pub const DEFAULT_PATH: &str = "/api/trivia";

/// Where to find the trivia endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Origin, without trailing slash (default: http://127.0.0.1:3000).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the trivia resource (default: /api/trivia).
    #[serde(default = "default_path")]
    pub path: String,
    /// User-Agent header; defaults to `trivia-query/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            user_agent: None,
        }
    }
}

impl EndpointConfig {
    /// Config pointing at `base_url` with the default path.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full request URL for `key`.
    pub fn url_for(&self, key: &QueryKey) -> String {
        format!(
            "{}{}?{}",
            self.base_url.trim_end_matches('/'),
            self.path,
            key
        )
    }
}

/// `reqwest`-backed [`TriviaEndpoint`].
///
/// No timeout is configured: a request that never resolves stays pending
/// until its session is cancelled.
#[derive(Clone)]
pub struct HttpTriviaClient {
    http: Client,
    config: EndpointConfig,
}

impl HttpTriviaClient {
    /// Create a client for the endpoint at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(EndpointConfig::with_base_url(base_url))
    }

    /// Create a client from a full endpoint configuration.
    pub fn from_config(config: EndpointConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("trivia-query/{}", crate::PKG_VERSION));
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TriviaError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    async fn request(&self, url: &str) -> Result<TriviaResponse> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TriviaEndpoint for HttpTriviaClient {
    async fn fetch(&self, key: &QueryKey) -> Result<TriviaResponse> {
        let url = self.config.url_for(key);
        debug!(%url, "fetching trivia page");
        let start = Instant::now();

        let result = self.request(&url).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;

    #[test]
    fn url_joins_base_path_and_key() {
        let config = EndpointConfig::with_base_url("http://localhost:8080/");
        let key = QueryKey::new(Difficulty::Easy, 0, Some(5));
        assert_eq!(
            config.url_for(&key),
            "http://localhost:8080/api/trivia?difficulty=easy&offset=0&limit=5"
        );
    }

    #[test]
    fn default_config() {
        let config = EndpointConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.path, "/api/trivia");
        assert!(config.user_agent.is_none());
    }
}
