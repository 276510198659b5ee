//! Lookup observability.
//!
//! Counts how often `translate` resolved a key against how often it fell
//! back to the key itself, plus preference-write outcomes. A rising
//! fallback count is how missing catalog entries show up outside of QA
//! eyeballing the UI.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups that resolved to a catalog entry
    resolved: AtomicUsize,

    /// Lookups that fell back to returning the key itself
    fallbacks: AtomicUsize,

    /// Preference writes that succeeded
    preference_writes: AtomicUsize,

    /// Preference writes that failed (selection kept in memory only)
    preference_write_failures: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// The metrics singleton, initialized on first access.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            resolved: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            preference_writes: AtomicUsize::new(0),
            preference_write_failures: AtomicUsize::new(0),
        })
    }

    /// Record a lookup that found its key in the catalog.
    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that returned the key itself.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful preference write.
    pub fn record_preference_write(&self) {
        self.preference_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed preference write.
    pub fn record_preference_write_failure(&self) {
        self.preference_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn preference_writes(&self) -> usize {
        self.preference_writes.load(Ordering::Relaxed)
    }

    pub fn preference_write_failures(&self) -> usize {
        self.preference_write_failures.load(Ordering::Relaxed)
    }

    /// Snapshot the counters into a report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let fallbacks = self.fallbacks();
        let lookups = resolved + fallbacks;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolved,
            fallbacks,
            fallback_rate,
            preference_writes: self.preference_writes(),
            preference_write_failures: self.preference_write_failures(),
        }
    }

    /// Reset all counters to zero (test isolation).
    #[cfg(test)]
    pub fn reset(&self) {
        self.resolved.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.preference_writes.store(0, Ordering::Relaxed);
        self.preference_write_failures.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Lookups that resolved to a catalog entry
    pub resolved: usize,

    /// Lookups that fell back to the key
    pub fallbacks: usize,

    /// Fallback share of all lookups, as a percentage (0-100)
    pub fallback_rate: f64,

    /// Successful preference writes
    pub preference_writes: usize,

    /// Failed preference writes
    pub preference_write_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ==================== Counter Tests ====================

    #[test]
    #[serial(metrics)]
    fn test_record_resolved() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        metrics.record_resolved();
        metrics.record_resolved();

        assert_eq!(metrics.resolved(), 2);
        assert_eq!(metrics.fallbacks(), 0);
    }

    #[test]
    #[serial(metrics)]
    fn test_record_fallback() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        metrics.record_fallback();

        assert_eq!(metrics.fallbacks(), 1);
    }

    #[test]
    #[serial(metrics)]
    fn test_record_preference_writes() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        metrics.record_preference_write();
        metrics.record_preference_write();
        metrics.record_preference_write_failure();

        assert_eq!(metrics.preference_writes(), 2);
        assert_eq!(metrics.preference_write_failures(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    #[serial(metrics)]
    fn test_report_empty() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        let report = metrics.report();

        assert_eq!(report.resolved, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    #[serial(metrics)]
    fn test_report_fallback_rate() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        // 3 resolved, 1 fallback = 25% fallback rate
        metrics.record_resolved();
        metrics.record_resolved();
        metrics.record_resolved();
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.resolved, 3);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.fallback_rate, 25.0);
    }

    #[test]
    #[serial(metrics)]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::global();
        metrics.reset();
        metrics.record_resolved();

        let json = serde_json::to_string(&metrics.report()).expect("serialize");
        assert!(json.contains("\"resolved\":1"));
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        assert!(std::ptr::eq(
            TranslationMetrics::global(),
            TranslationMetrics::global()
        ));
    }
}
