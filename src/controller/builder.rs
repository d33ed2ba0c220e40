//! Builder for configuring controller instances

use std::sync::Arc;

use tokio::runtime::Handle;

use super::{BypassPolicy, TriviaController};
use crate::cache::{CacheConfig, TriviaCache};
use crate::client::{EndpointConfig, HttpTriviaClient, TriviaEndpoint};
use crate::config::Config;
use crate::types::TriviaOptions;
use crate::{Result, TriviaError};

/// Main entry point for creating controllers.
pub struct TriviaQuery;

impl TriviaQuery {
    /// Create a new builder for configuring a controller.
    pub fn builder() -> TriviaQueryBuilder {
        TriviaQueryBuilder::new()
    }
}

/// Builder for configuring controller instances.
///
/// An endpoint is required: either a ready [`TriviaEndpoint`] via
/// [`endpoint()`](Self::endpoint) or an HTTP endpoint via
/// [`base_url()`](Self::base_url) / [`endpoint_config()`](Self::endpoint_config).
pub struct TriviaQueryBuilder {
    endpoint: Option<Arc<dyn TriviaEndpoint>>,
    endpoint_config: Option<EndpointConfig>,
    cache: Option<TriviaCache>,
    cache_config: CacheConfig,
    options: TriviaOptions,
    bypass: BypassPolicy,
}

impl TriviaQueryBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            endpoint_config: None,
            cache: None,
            cache_config: CacheConfig::default(),
            options: TriviaOptions::default(),
            bypass: BypassPolicy::default(),
        }
    }

    /// Apply a loaded configuration file (endpoint, cache, bypass policy).
    pub fn config(mut self, config: &Config) -> Self {
        self.endpoint_config = Some(config.endpoint.clone());
        self.cache_config = config.cache.clone();
        self.bypass = config.controller.bypass;
        self
    }

    /// Use a custom endpoint implementation.
    pub fn endpoint(mut self, endpoint: impl TriviaEndpoint + 'static) -> Self {
        self.endpoint = Some(Arc::new(endpoint));
        self
    }

    /// Use an already shared endpoint implementation.
    pub fn shared_endpoint(mut self, endpoint: Arc<dyn TriviaEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Fetch over HTTP from the endpoint at `base_url`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let config = self.endpoint_config.take().unwrap_or_default();
        self.endpoint_config = Some(EndpointConfig {
            base_url: base_url.into(),
            ..config
        });
        self
    }

    /// Fetch over HTTP using a full endpoint configuration.
    pub fn endpoint_config(mut self, config: EndpointConfig) -> Self {
        self.endpoint_config = Some(config);
        self
    }

    /// Share an existing session cache (e.g. between controllers).
    pub fn cache(mut self, cache: TriviaCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Allocate a fresh session cache from configuration.
    ///
    /// Ignored when a cache was supplied via [`cache()`](Self::cache).
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Initial query options. `enabled` here fixes the initial loading flag.
    pub fn options(mut self, options: TriviaOptions) -> Self {
        self.options = options;
        self
    }

    /// How refetches bypass the cache (default: [`BypassPolicy::Sticky`]).
    pub fn bypass_policy(mut self, policy: BypassPolicy) -> Self {
        self.bypass = policy;
        self
    }

    /// Build the controller and run its first session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<TriviaController> {
        let runtime = Handle::try_current().map_err(|e| {
            TriviaError::Configuration(format!("trivia controller requires a tokio runtime: {e}"))
        })?;

        let endpoint: Arc<dyn TriviaEndpoint> = match (self.endpoint, self.endpoint_config) {
            (Some(endpoint), _) => endpoint,
            (None, Some(config)) => Arc::new(HttpTriviaClient::from_config(config)?),
            (None, None) => {
                return Err(TriviaError::Configuration(
                    "no trivia endpoint configured".to_string(),
                ));
            }
        };

        let cache = self
            .cache
            .unwrap_or_else(|| TriviaCache::new(&self.cache_config));

        let controller = TriviaController::new(endpoint, cache, self.options, self.bypass, runtime);
        controller.mount();
        Ok(controller)
    }
}

impl Default for TriviaQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
