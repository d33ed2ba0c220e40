//! Trivia endpoint clients.
//!
//! The controller talks to the network only through [`TriviaEndpoint`], so
//! tests and embedders can substitute their own transport. [`HttpTriviaClient`]
//! is the production implementation over `reqwest`.

mod http;

pub use http::{DEFAULT_BASE_URL, DEFAULT_PATH, EndpointConfig, HttpTriviaClient};

use async_trait::async_trait;

use crate::Result;
use crate::key::QueryKey;
use crate::types::TriviaResponse;

/// Source of trivia pages.
///
/// Implementations must be cancel-safe: the controller drops the returned
/// future when a session is superseded, and expects that to abort the
/// underlying request.
#[async_trait]
pub trait TriviaEndpoint: Send + Sync {
    /// Fetch the page identified by `key`.
    ///
    /// Non-2xx answers map to [`TriviaError::Http`](crate::TriviaError::Http);
    /// transport and decode failures to their own variants.
    async fn fetch(&self, key: &QueryKey) -> Result<TriviaResponse>;
}
