//! Session-scoped key/value text storage backends.
//!
//! [`SessionStorage`] mirrors a browser session store: string keys, string
//! values, entries live until the session ends or they are removed. The
//! default backend, [`MemoryStorage`], keeps entries in process memory for
//! the lifetime of the process.

use moka::sync::Cache;

use crate::Result;

/// Default maximum number of entries held by [`MemoryStorage`].
pub const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// Text key/value store backing the trivia cache.
///
/// Implementations must be safe to share between controllers; operations on
/// different keys are independent.
pub trait SessionStorage: Send + Sync {
    /// Stored value for `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any prior value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str);

    /// Remove every entry.
    fn clear(&self);
}

/// In-memory session storage.
///
/// Entries never expire; capacity is bounded so a long-lived process cannot
/// grow without limit. Clones share the same underlying store.
#[derive(Clone)]
pub struct MemoryStorage {
    entries: Cache<String, String>,
}

impl MemoryStorage {
    /// Create an empty store with the default max capacity (1,000).
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a store with a custom max capacity.
    pub fn with_max_entries(max: u64) -> Self {
        Self {
            entries: Cache::new(max),
        }
    }

    /// Number of entries currently stored.
    ///
    /// Moka counts lazily; call after pending maintenance for exact numbers.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.invalidate(key);
    }

    fn clear(&self) {
        self.entries.invalidate_all();
    }
}
