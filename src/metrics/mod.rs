//! Basic metrics instrumentation for the stdio service.
//!
//! Provides counters for handled requests and the fields, tokens and
//! predicates they produced.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for service activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of requests handled
    requests_total: Arc<AtomicU64>,

    /// Total number of requests answered with an error
    request_errors_total: Arc<AtomicU64>,

    /// Number of searchable fields built
    fields_built_total: Arc<AtomicU64>,

    /// Number of tokens generated across all fields
    tokens_generated_total: Arc<AtomicU64>,

    /// Number of predicates built
    predicates_built_total: Arc<AtomicU64>,

    /// Number of requested mode names that were not recognized
    ignored_modes_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            request_errors_total: Arc::new(AtomicU64::new(0)),
            fields_built_total: Arc::new(AtomicU64::new(0)),
            tokens_generated_total: Arc::new(AtomicU64::new(0)),
            predicates_built_total: Arc::new(AtomicU64::new(0)),
            ignored_modes_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a handled request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that failed.
    pub fn record_request_error(&self) {
        self.request_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record built fields and the tokens they hold.
    pub fn record_fields_built(&self, fields: usize, tokens: usize) {
        self.fields_built_total
            .fetch_add(fields as u64, Ordering::Relaxed);
        self.tokens_generated_total
            .fetch_add(tokens as u64, Ordering::Relaxed);
    }

    /// Record tokens produced outside of field building.
    pub fn record_tokens_generated(&self, tokens: usize) {
        self.tokens_generated_total
            .fetch_add(tokens as u64, Ordering::Relaxed);
    }

    /// Record a built predicate.
    pub fn record_predicate_built(&self) {
        self.predicates_built_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record unrecognized mode names.
    pub fn record_ignored_modes(&self, count: usize) {
        self.ignored_modes_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get total requests.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Get total request errors.
    pub fn request_errors_total(&self) -> u64 {
        self.request_errors_total.load(Ordering::Relaxed)
    }

    /// Get total fields built.
    pub fn fields_built_total(&self) -> u64 {
        self.fields_built_total.load(Ordering::Relaxed)
    }

    /// Get total tokens generated.
    pub fn tokens_generated_total(&self) -> u64 {
        self.tokens_generated_total.load(Ordering::Relaxed)
    }

    /// Get total predicates built.
    pub fn predicates_built_total(&self) -> u64 {
        self.predicates_built_total.load(Ordering::Relaxed)
    }

    /// Get total ignored mode names.
    pub fn ignored_modes_total(&self) -> u64 {
        self.ignored_modes_total.load(Ordering::Relaxed)
    }

    /// Get the fraction of requests that failed.
    pub fn error_rate(&self) -> f64 {
        let errors = self.request_errors_total();
        let total = self.requests_total();
        if total == 0 {
            0.0
        } else {
            errors as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.requests_total.store(0, Ordering::Relaxed);
        self.request_errors_total.store(0, Ordering::Relaxed);
        self.fields_built_total.store(0, Ordering::Relaxed);
        self.tokens_generated_total.store(0, Ordering::Relaxed);
        self.predicates_built_total.store(0, Ordering::Relaxed);
        self.ignored_modes_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total(),
            request_errors_total: self.request_errors_total(),
            fields_built_total: self.fields_built_total(),
            tokens_generated_total: self.tokens_generated_total(),
            predicates_built_total: self.predicates_built_total(),
            ignored_modes_total: self.ignored_modes_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub request_errors_total: u64,
    pub fields_built_total: u64,
    pub tokens_generated_total: u64,
    pub predicates_built_total: u64,
    pub ignored_modes_total: u64,
}
