//! A single in-flight request session.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::TriviaCache;
use crate::client::TriviaEndpoint;
use crate::key::QueryKey;
use crate::telemetry;
use crate::types::RequestState;
use crate::{Result, TriviaError};

/// State shared between a controller and its session tasks.
pub(super) struct Shared {
    pub(super) state: watch::Sender<RequestState>,
    /// Id of the only session allowed to publish.
    pub(super) active_session: AtomicU64,
}

impl Shared {
    pub(super) fn new(state: watch::Sender<RequestState>) -> Self {
        Self {
            state,
            active_session: AtomicU64::new(0),
        }
    }

    /// Apply `update` if `session` is still the active one.
    ///
    /// The check runs under the channel's write lock, so a session superseded
    /// between its check and its write cannot land after the newer session.
    pub(super) fn publish(&self, session: u64, update: impl FnOnce(&mut RequestState)) -> bool {
        self.state.send_if_modified(|state| {
            if self.active_session.load(Ordering::Acquire) != session {
                return false;
            }
            update(state);
            true
        })
    }
}

/// Network half of a session, run on the tokio runtime.
pub(super) struct Session {
    pub(super) id: u64,
    pub(super) key: QueryKey,
    pub(super) token: CancellationToken,
    pub(super) shared: Arc<Shared>,
    pub(super) endpoint: Arc<dyn TriviaEndpoint>,
    pub(super) cache: TriviaCache,
}

impl Session {
    pub(super) async fn run(self) {
        let result: Result<_> = tokio::select! {
            biased;
            () = self.token.cancelled() => Err(TriviaError::Cancelled),
            result = self.endpoint.fetch(&self.key) => result,
        };

        // A fetch that completed after cancellation is treated as cancelled.
        let result = match result {
            Ok(_) if self.token.is_cancelled() => Err(TriviaError::Cancelled),
            other => other,
        };

        match result {
            Ok(response) => {
                let published = self.shared.publish(self.id, |state| {
                    state.data = Some(response.clone());
                    state.is_loading = false;
                    state.error = None;
                });
                if published {
                    self.cache.write(&self.key, &response);
                    debug!(
                        session = self.id,
                        key = %self.key,
                        items = response.items.len(),
                        "trivia request succeeded"
                    );
                } else {
                    self.discard();
                }
            }
            Err(e) if e.is_cancelled() => self.discard(),
            Err(e) => {
                warn!(session = self.id, key = %self.key, error = %e, "trivia request failed");
                let message = e.to_string();
                if !self.shared.publish(self.id, |state| {
                    state.is_loading = false;
                    state.error = Some(message);
                }) {
                    self.discard();
                }
            }
        }
    }

    fn discard(&self) {
        metrics::counter!(telemetry::SESSIONS_CANCELLED_TOTAL).increment(1);
        debug!(session = self.id, key = %self.key, "trivia request superseded, discarding");
    }
}
