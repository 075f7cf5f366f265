//! Process-wide request metrics.
//!
//! One mutable record for the whole process, owned by the application state
//! and shared by handle. Every processing request writes to it; the liveness
//! endpoint reads a derived snapshot. The mutex is held only across the
//! read-modify-write of the record itself, never across image decoding, so
//! slow extractions do not serialize each other.
//!
//! The raw body of the most recent failed request and the payload of the
//! most recent processed request are retained verbatim, last-one-wins, for
//! operator diagnostics. Retention is unbounded and unredacted; the liveness
//! endpoint is a trusted-operator surface.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MetricsInner {
    last_processed_time: Option<DateTime<Utc>>,
    last_message_time: Option<DateTime<Utc>>,
    total_processing_time_ms: f64,
    total_processed_requests: u64,
    max_processing_time_ms: f64,
    last_error_request: Option<String>,
    last_successful_request: Option<serde_json::Value>,
}

/// Shared handle to the process metrics record.
#[derive(Debug, Clone, Default)]
pub struct ProcessMetrics {
    inner: Arc<Mutex<MetricsInner>>,
}

/// Read-only view of the metrics record plus derived quantities, shaped for
/// the liveness payload.
///
/// `None` fields serialize as explicit `null`s: "nothing processed yet" is a
/// meaningful state the wire format must show.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    /// Start time of the most recent processed request.
    pub last_processed_time: Option<DateTime<Utc>>,
    /// Arrival time of the most recent `/process` message, recorded before
    /// any parsing or validation.
    pub last_message_time: Option<DateTime<Utc>>,
    /// Milliseconds elapsed between `last_processed_time` and the snapshot.
    pub millis_since_last_processed: Option<f64>,
    /// Mean processing duration in milliseconds over all processed requests.
    pub average_processing_time: Option<f64>,
    /// Largest single processing duration in milliseconds seen so far.
    pub max_processing_time: f64,
    /// Raw body of the most recent request rejected before extraction.
    pub last_error_request: Option<String>,
    /// Parsed payload of the most recent processed request.
    pub last_successful_request: Option<serde_json::Value>,
}

impl ProcessMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned mutex only means another thread panicked mid-update; the
    /// record is still usable, so recover the guard instead of propagating.
    fn lock(&self) -> MutexGuard<'_, MetricsInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Note that a processing message arrived. Called before any parsing or
    /// validation, so even rejected requests leave a trace here.
    pub fn record_message(&self, now: DateTime<Utc>) {
        self.lock().last_message_time = Some(now);
    }

    /// Fold one processed request into the record.
    ///
    /// "Processed" covers both extraction outcomes, a feature payload and an
    /// extractor error body alike: the request made it through validation and
    /// the extractor ran to completion.
    pub fn record_processed(
        &self,
        started_at: DateTime<Utc>,
        elapsed_ms: f64,
        request: serde_json::Value,
    ) {
        let mut inner = self.lock();
        inner.last_successful_request = Some(request);
        inner.last_processed_time = Some(started_at);
        inner.total_processing_time_ms += elapsed_ms;
        inner.total_processed_requests += 1;
        if elapsed_ms > inner.max_processing_time_ms {
            inner.max_processing_time_ms = elapsed_ms;
        }
    }

    /// Retain the raw body of a request that failed validation or crashed
    /// the handler. Counters are left untouched.
    pub fn record_error(&self, raw_body: String) {
        self.lock().last_error_request = Some(raw_body);
    }

    /// Number of requests folded in via [`record_processed`].
    ///
    /// [`record_processed`]: ProcessMetrics::record_processed
    pub fn total_processed_requests(&self) -> u64 {
        self.lock().total_processed_requests
    }

    /// Produce the derived view served by the liveness endpoint.
    pub fn snapshot(&self, now: DateTime<Utc>) -> MetricsSnapshot {
        let inner = self.lock();

        let millis_since_last_processed = inner
            .last_processed_time
            .map(|t| (now - t).num_milliseconds() as f64);

        let average_processing_time = (inner.total_processed_requests > 0)
            .then(|| inner.total_processing_time_ms / inner.total_processed_requests as f64);

        MetricsSnapshot {
            last_processed_time: inner.last_processed_time,
            last_message_time: inner.last_message_time,
            millis_since_last_processed,
            average_processing_time,
            max_processing_time: inner.max_processing_time_ms,
            last_error_request: inner.last_error_request.clone(),
            last_successful_request: inner.last_successful_request.clone(),
        }
    }
}
