//! trivia-query - session-cached, cancellable trivia fetching
//!
//! This crate provides a [`TriviaController`] that fetches one page of trivia
//! questions from `GET /api/trivia`, caches successful responses for the
//! lifetime of the session, and publishes `{data, is_loading, error}` state
//! to callers. Changing options or calling `refetch()` supersedes the
//! in-flight request; a superseded request never publishes.
//!
//! # Example
//!
//! ```rust,no_run
//! use trivia_query::{Difficulty, TriviaOptions, TriviaQuery};
//!
//! #[tokio::main]
//! async fn main() -> trivia_query::Result<()> {
//!     let controller = TriviaQuery::builder()
//!         .base_url("http://localhost:3000")
//!         .options(TriviaOptions::default().difficulty(Difficulty::Easy).limit(5))
//!         .build()?;
//!
//!     let state = controller.settled().await;
//!     if let Some(page) = state.data {
//!         for item in &page.items {
//!             println!("{}", item.question);
//!         }
//!     }
//!
//!     // Bypass the session cache.
//!     controller.refetch();
//!     let state = controller.settled().await;
//!     println!("error: {:?}", state.error);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod key;
pub mod telemetry;
pub mod types;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types at crate root
pub use cache::{CacheConfig, MemoryStorage, SessionStorage, TriviaCache};
pub use client::{EndpointConfig, HttpTriviaClient, TriviaEndpoint};
pub use config::Config;
pub use controller::{BypassPolicy, TriviaController, TriviaQuery, TriviaQueryBuilder};
pub use error::{Result, TriviaError};
pub use key::QueryKey;

pub use types::{
    Difficulty, QuestionDifficulty, RequestState, TriviaOptions, TriviaQuestion, TriviaResponse,
};
