//! Endpoint response types

use serde::{Deserialize, Serialize};

use super::question::{Difficulty, TriviaQuestion};

/// One page of trivia questions as returned by `GET /api/trivia`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaResponse {
    pub difficulty: Difficulty,
    pub offset: u32,
    /// Requested page size; `None` when the server default applied.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total matching items server-side.
    pub total: u32,
    pub items: Vec<TriviaQuestion>,
}

impl TriviaResponse {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more items exist beyond this page.
    pub fn has_more(&self) -> bool {
        (self.offset as u64 + self.items.len() as u64) < self.total as u64
    }
}
