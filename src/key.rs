//! Canonical query keys.
//!
//! A [`QueryKey`] identifies the cacheable identity of a request. Its text
//! doubles as the URL query string sent to the endpoint, so field order is
//! fixed: `difficulty`, `offset`, then `limit` only when one was requested.

use std::fmt;

use crate::types::{Difficulty, TriviaOptions};

/// Prefix for session cache entries.
pub const CACHE_KEY_PREFIX: &str = "trivia-cache:";

/// Deterministic text key derived from `(difficulty, offset, limit)`.
///
/// ```rust
/// # use trivia_query::{Difficulty, QueryKey};
/// let key = QueryKey::new(Difficulty::Easy, 0, Some(5));
/// assert_eq!(key.as_str(), "difficulty=easy&offset=0&limit=5");
/// assert_eq!(key.cache_key(), "trivia-cache:difficulty=easy&offset=0&limit=5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(difficulty: Difficulty, offset: u32, limit: Option<u32>) -> Self {
        let mut key = format!("difficulty={difficulty}&offset={offset}");
        if let Some(limit) = limit {
            key.push_str(&format!("&limit={limit}"));
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key for this query in the session cache.
    pub fn cache_key(&self) -> String {
        format!("{CACHE_KEY_PREFIX}{}", self.0)
    }
}

impl From<&TriviaOptions> for QueryKey {
    fn from(options: &TriviaOptions) -> Self {
        QueryKey::new(options.difficulty, options.offset, options.limit)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_all_at_zero() {
        let key = QueryKey::from(&TriviaOptions::default());
        assert_eq!(key.as_str(), "difficulty=all&offset=0");
    }

    #[test]
    fn field_order_is_fixed() {
        let key = QueryKey::new(Difficulty::Hard, 20, Some(10));
        assert_eq!(key.as_str(), "difficulty=hard&offset=20&limit=10");
    }

    #[test]
    fn absent_limit_is_omitted_however_expressed() {
        let never_set = TriviaOptions::default().difficulty(Difficulty::Medium);
        let cleared = TriviaOptions::default()
            .difficulty(Difficulty::Medium)
            .limit(7)
            .no_limit();
        let explicit = QueryKey::new(Difficulty::Medium, 0, None);

        assert_eq!(QueryKey::from(&never_set), explicit);
        assert_eq!(QueryKey::from(&cleared), explicit);
        assert!(!explicit.as_str().contains("limit"));
    }

    #[test]
    fn limit_zero_is_still_a_limit() {
        let key = QueryKey::new(Difficulty::All, 0, Some(0));
        assert_eq!(key.as_str(), "difficulty=all&offset=0&limit=0");
    }

    #[test]
    fn enabled_does_not_affect_key() {
        let on = TriviaOptions::default().limit(3);
        let off = TriviaOptions::default().limit(3).enabled(false);
        assert_eq!(QueryKey::from(&on), QueryKey::from(&off));
    }
}
