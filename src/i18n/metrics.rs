//! Fallback metrics and observability module.
//!
//! The locale and field resolvers are pure; when they silently fall back
//! (unknown locale token, untranslated field, empty resolution) the page
//! handlers record it here so degraded content is visible in operations
//! instead of disappearing quietly.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global fallback metrics singleton.
pub struct FallbackMetrics {
    /// Number of requests whose raw locale token did not match a supported
    /// locale and was resolved to the baseline
    locale_fallbacks: AtomicUsize,

    /// Number of localized fields resolved without a dedicated translation
    /// for the requested locale
    field_fallbacks: AtomicUsize,

    /// Number of localized fields that resolved to the empty string
    empty_fields: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<FallbackMetrics> = OnceLock::new();

impl FallbackMetrics {
    /// Get the global fallback metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static FallbackMetrics {
        METRICS.get_or_init(|| FallbackMetrics {
            locale_fallbacks: AtomicUsize::new(0),
            field_fallbacks: AtomicUsize::new(0),
            empty_fields: AtomicUsize::new(0),
        })
    }

    /// Record a locale token that fell back to the baseline locale.
    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a field resolved without a dedicated translation.
    pub fn record_field_fallback(&self) {
        self.field_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a field that resolved to the empty string.
    pub fn record_empty_field(&self) {
        self.empty_fields.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a snapshot of the current counters.
    pub fn report(&self) -> FallbackReport {
        FallbackReport {
            locale_fallbacks: self.locale_fallbacks.load(Ordering::Relaxed),
            field_fallbacks: self.field_fallbacks.load(Ordering::Relaxed),
            empty_fields: self.empty_fields.load(Ordering::Relaxed),
        }
    }
}

/// Serializable snapshot of the fallback counters, exposed on the health
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackReport {
    pub locale_fallbacks: usize,
    pub field_fallbacks: usize,
    pub empty_fields: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-global and other tests record into them, so
    // assertions compare before/after snapshots instead of absolute values.

    #[test]
    fn test_global_returns_singleton() {
        let metrics1 = FallbackMetrics::global();
        let metrics2 = FallbackMetrics::global();
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_record_locale_fallback_increments() {
        let metrics = FallbackMetrics::global();
        let before = metrics.report();
        metrics.record_locale_fallback();
        let after = metrics.report();
        assert!(after.locale_fallbacks > before.locale_fallbacks);
    }

    #[test]
    fn test_record_field_fallback_increments() {
        let metrics = FallbackMetrics::global();
        let before = metrics.report();
        metrics.record_field_fallback();
        let after = metrics.report();
        assert!(after.field_fallbacks > before.field_fallbacks);
    }

    #[test]
    fn test_record_empty_field_increments() {
        let metrics = FallbackMetrics::global();
        let before = metrics.report();
        metrics.record_empty_field();
        let after = metrics.report();
        assert!(after.empty_fields > before.empty_fields);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(FallbackMetrics::global().report()).unwrap();
        assert!(json.get("locale_fallbacks").is_some());
        assert!(json.get("field_fallbacks").is_some());
        assert!(json.get("empty_fields").is_some());
    }
}
