//! Session cache for trivia responses.
//!
//! [`TriviaCache`] maps a [`QueryKey`] to the last response successfully
//! fetched for it during this session. Entries are stored as JSON text under
//! `trivia-cache:<key>` in a [`SessionStorage`] backend.
//!
//! The cache is best-effort throughout:
//!
//! - a stored value that fails to parse is evicted and reported as a miss;
//! - write failures are logged and swallowed;
//! - without a backend ([`TriviaCache::unavailable()`]) every read misses and
//!   every write is a no-op.

pub mod storage;

pub use storage::{MemoryStorage, SessionStorage};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::key::QueryKey;
use crate::telemetry;
use crate::types::TriviaResponse;

/// Configuration for the session cache.
///
/// ```rust
/// # use trivia_query::CacheConfig;
/// let config = CacheConfig::new().max_entries(200);
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CacheConfig {
    /// Whether a storage backend is allocated at all. Default: true.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Maximum number of cached pages. Default: 1,000.
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_max_entries() -> u64 {
    storage::DEFAULT_MAX_ENTRIES
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached pages.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Enable or disable the cache backend.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Session cache of trivia responses keyed on [`QueryKey`].
///
/// Cheap to clone; clones share the same backend, so several controllers
/// handed the same cache see each other's entries.
#[derive(Clone)]
pub struct TriviaCache {
    storage: Option<Arc<dyn SessionStorage>>,
}

impl TriviaCache {
    /// Create a cache from configuration, backed by [`MemoryStorage`].
    pub fn new(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::with_storage(MemoryStorage::with_max_entries(config.max_entries))
        } else {
            Self::unavailable()
        }
    }

    /// Create a cache over a custom storage backend.
    pub fn with_storage(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Some(Arc::new(storage)),
        }
    }

    /// A cache with no backend: reads always miss, writes do nothing.
    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Look up the cached response for `key`.
    ///
    /// A present but unparseable entry is evicted and treated as a miss.
    pub fn read(&self, key: &QueryKey) -> Option<TriviaResponse> {
        let storage = self.storage.as_ref()?;
        let cache_key = key.cache_key();

        let Some(raw) = storage.get_item(&cache_key) else {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
            return None;
        };

        match serde_json::from_str::<TriviaResponse>(&raw) {
            Ok(response) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                debug!(%key, items = response.items.len(), "trivia cache hit");
                Some(response)
            }
            Err(e) => {
                warn!(%key, error = %e, "evicting corrupt trivia cache entry");
                storage.remove_item(&cache_key);
                metrics::counter!(telemetry::CACHE_CORRUPT_TOTAL).increment(1);
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Store `response` under `key`, replacing any prior entry.
    pub fn write(&self, key: &QueryKey, response: &TriviaResponse) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };

        let json = match serde_json::to_string(response) {
            Ok(json) => json,
            Err(e) => {
                warn!(%key, error = %e, "failed to serialize trivia response for cache");
                return;
            }
        };

        if let Err(e) = storage.set_item(&key.cache_key(), &json) {
            warn!(%key, error = %e, "failed to write trivia cache entry");
        }
    }

    /// Whether a raw entry exists for `key` (parseable or not).
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.storage
            .as_ref()
            .is_some_and(|s| s.get_item(&key.cache_key()).is_some())
    }

    /// Remove the entry for `key`.
    pub fn evict(&self, key: &QueryKey) {
        if let Some(storage) = &self.storage {
            storage.remove_item(&key.cache_key());
        }
    }

    /// Remove every entry.
    pub fn clear(&self) {
        if let Some(storage) = &self.storage {
            storage.clear();
        }
    }
}

impl Default for TriviaCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
