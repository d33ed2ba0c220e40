//! Request controller.
//!
//! [`TriviaController`] drives the request lifecycle for one logical query:
//! cache lookup, network fetch, cancellation, state publication and
//! cache-bypassing refetch.
//!
//! # Sessions
//!
//! A session is one attempt to satisfy the current `(options, bypass)`
//! combination. A new session starts when `enabled` or the derived
//! [`QueryKey`] changes (via [`TriviaController::set_options()`]) or when
//! [`TriviaController::refetch()`] is called. Starting a session cancels the
//! previous session's request before the cache is consulted, so at most one
//! request is live per controller and a superseded session never publishes.
//!
//! ```text
//! disabled ──────────────────────────────▶ (state untouched)
//! enabled ─▶ cache check ─ hit ──────────▶ success
//!                 │ miss / corrupt / bypass
//!                 ▼
//!              loading ─ 2xx ─────────────▶ success (+ cache write)
//!                 ├── non-2xx / failure ──▶ error
//!                 └── cancelled ──────────▶ (silent)
//! ```

mod builder;
mod session;

pub use builder::{TriviaQuery, TriviaQueryBuilder};

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::TriviaCache;
use crate::client::TriviaEndpoint;
use crate::key::QueryKey;
use crate::types::{RequestState, TriviaOptions};

use session::{Session, Shared};

/// When a session skips the cache read and goes straight to the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BypassPolicy {
    /// Once [`TriviaController::refetch()`] has been called, every later
    /// session bypasses the cache, including ones started by option changes.
    #[default]
    Sticky,
    /// Only the session started by a `refetch()` call bypasses the cache.
    OneShot,
}

impl BypassPolicy {
    fn bypasses(self, refetch_count: u64, started_by_refetch: bool) -> bool {
        match self {
            BypassPolicy::Sticky => refetch_count > 0,
            BypassPolicy::OneShot => started_by_refetch,
        }
    }
}

/// Mutable driver state, guarded by the controller's mutex.
struct Driver {
    options: TriviaOptions,
    key: QueryKey,
    refetch_count: u64,
    session_id: u64,
    token: Option<CancellationToken>,
    disposed: bool,
}

/// Reactive trivia query.
///
/// Publishes [`RequestState`] snapshots through a `watch` channel. All
/// methods take `&self`; wrap in an `Arc` to share between tasks. Dropping
/// the controller disposes it.
pub struct TriviaController {
    shared: Arc<Shared>,
    driver: Mutex<Driver>,
    endpoint: Arc<dyn TriviaEndpoint>,
    cache: TriviaCache,
    bypass: BypassPolicy,
    runtime: Handle,
}

impl TriviaController {
    pub(crate) fn new(
        endpoint: Arc<dyn TriviaEndpoint>,
        cache: TriviaCache,
        options: TriviaOptions,
        bypass: BypassPolicy,
        runtime: Handle,
    ) -> Self {
        let (state, _) = watch::channel(RequestState::initial(options.enabled));
        let key = QueryKey::from(&options);
        Self {
            shared: Arc::new(Shared::new(state)),
            driver: Mutex::new(Driver {
                options,
                key,
                refetch_count: 0,
                session_id: 0,
                token: None,
                disposed: false,
            }),
            endpoint,
            cache,
            bypass,
            runtime,
        }
    }

    /// Run the first session. Called once by the builder.
    pub(crate) fn mount(&self) {
        let mut driver = self.lock();
        self.start_session(&mut driver, false);
    }

    /// Replace the query options.
    ///
    /// Starts a new session only if `enabled` or the derived key changed.
    pub fn set_options(&self, options: TriviaOptions) {
        let mut driver = self.lock();
        if driver.disposed {
            return;
        }

        let key = QueryKey::from(&options);
        let changed = key != driver.key || options.enabled != driver.options.enabled;
        driver.options = options;
        driver.key = key;

        if changed {
            self.start_session(&mut driver, false);
        }
    }

    /// Force a cache-bypassing fetch cycle.
    ///
    /// Always starts a new session. With [`BypassPolicy::Sticky`] every later
    /// session bypasses the cache as well.
    pub fn refetch(&self) {
        let mut driver = self.lock();
        if driver.disposed {
            return;
        }

        driver.refetch_count += 1;
        self.start_session(&mut driver, true);
    }

    /// Cancel the live session and stop publishing.
    ///
    /// Later calls to [`set_options()`](Self::set_options) and
    /// [`refetch()`](Self::refetch) are ignored.
    pub fn dispose(&self) {
        let mut driver = self.lock();
        if driver.disposed {
            return;
        }

        driver.disposed = true;
        if let Some(token) = driver.token.take() {
            token.cancel();
        }
        // No session owns id 0 after mount, so nothing can publish again.
        self.shared.active_session.store(0, Ordering::Release);
        debug!(session = driver.session_id, "trivia controller disposed");
    }

    /// Current state snapshot.
    pub fn state(&self) -> RequestState {
        self.shared.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.shared.state.subscribe()
    }

    /// Wait until the state is no longer loading and return it.
    ///
    /// Returns immediately if nothing is loading. A session left loading by
    /// [`dispose()`](Self::dispose) or by disabling mid-request never settles.
    pub async fn settled(&self) -> RequestState {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    pub fn options(&self) -> TriviaOptions {
        self.lock().options.clone()
    }

    pub fn query_key(&self) -> QueryKey {
        self.lock().key.clone()
    }

    pub fn refetch_count(&self) -> u64 {
        self.lock().refetch_count
    }

    /// Id of the most recently started session (0 before mount).
    pub fn session_id(&self) -> u64 {
        self.lock().session_id
    }

    pub fn bypass_policy(&self) -> BypassPolicy {
        self.bypass
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    fn lock(&self) -> MutexGuard<'_, Driver> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Begin a new session, superseding the previous one.
    fn start_session(&self, driver: &mut Driver, started_by_refetch: bool) {
        if let Some(previous) = driver.token.take() {
            previous.cancel();
        }

        driver.session_id += 1;
        let session_id = driver.session_id;
        self.shared
            .active_session
            .store(session_id, Ordering::Release);

        if !driver.options.enabled {
            debug!(session = session_id, "trivia query disabled, skipping");
            return;
        }

        let key = driver.key.clone();
        let bypass = self.bypass.bypasses(driver.refetch_count, started_by_refetch);

        if !bypass {
            if let Some(data) = self.cache.read(&key) {
                self.shared.publish(session_id, |state| {
                    state.data = Some(data);
                    state.is_loading = false;
                    state.error = None;
                });
                return;
            }
        }

        debug!(session = session_id, %key, bypass, "starting trivia request");
        self.shared.publish(session_id, |state| {
            state.is_loading = true;
            state.error = None;
        });

        let token = CancellationToken::new();
        driver.token = Some(token.clone());

        let session = Session {
            id: session_id,
            key,
            token,
            shared: Arc::clone(&self.shared),
            endpoint: Arc::clone(&self.endpoint),
            cache: self.cache.clone(),
        };
        self.runtime.spawn(session.run());
    }
}

impl Drop for TriviaController {
    fn drop(&mut self) {
        self.dispose();
    }
}
