//! Query options

use serde::{Deserialize, Serialize};

use super::question::Difficulty;

/// Options for a trivia query. All fields are optional on the wire.
///
/// ```rust
/// # use trivia_query::{Difficulty, TriviaOptions};
/// let options = TriviaOptions::default()
///     .difficulty(Difficulty::Easy)
///     .limit(5);
/// assert!(options.enabled);
/// assert_eq!(options.offset, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaOptions {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub offset: u32,
    /// Page size; `None` lets the server decide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// When false, the controller neither reads the cache nor fetches.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for TriviaOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            offset: 0,
            limit: None,
            enabled: default_enabled(),
        }
    }
}

impl TriviaOptions {
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Clear any explicit limit so the server default applies.
    pub fn no_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
