//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `trivia_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status`: outcome: "ok" or "error"

/// Total network requests issued to the trivia endpoint.
///
/// Labels: `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "trivia_requests_total";

/// Network request duration in seconds (completed requests only).
pub const REQUEST_DURATION_SECONDS: &str = "trivia_request_duration_seconds";

/// Total session cache hits.
pub const CACHE_HITS_TOTAL: &str = "trivia_cache_hits_total";

/// Total session cache misses (including evicted corrupt entries).
pub const CACHE_MISSES_TOTAL: &str = "trivia_cache_misses_total";

/// Total cache entries evicted because they failed to parse.
pub const CACHE_CORRUPT_TOTAL: &str = "trivia_cache_corrupt_total";

/// Total sessions whose in-flight request was cancelled.
pub const SESSIONS_CANCELLED_TOTAL: &str = "trivia_sessions_cancelled_total";
