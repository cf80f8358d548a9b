//! Prediction outcome counters

use newscat_core::{PredictionError, PredictionResult};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters for classification outcomes
#[derive(Default)]
pub struct PredictionStats {
    succeeded: AtomicU64,
    empty_input: AtomicU64,
    unknown_model: AtomicU64,
    transform_failures: AtomicU64,
    classifier_failures: AtomicU64,
    timeouts: AtomicU64,
    total_latency_us: AtomicU64,
}

impl PredictionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished classification and how long it took
    pub fn record(&self, result: &PredictionResult, latency_us: u64) {
        let counter = match result {
            Ok(_) => &self.succeeded,
            Err(PredictionError::EmptyInput) => &self.empty_input,
            Err(PredictionError::UnknownModel { .. }) => &self.unknown_model,
            Err(PredictionError::TransformFailure { .. }) => &self.transform_failures,
            Err(PredictionError::ClassifierFailure { .. }) => &self.classifier_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.total_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    /// Record a classification abandoned after the request timeout
    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current counters
    pub fn snapshot(&self) -> StatsSnapshot {
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let empty_input = self.empty_input.load(Ordering::Relaxed);
        let unknown_model = self.unknown_model.load(Ordering::Relaxed);
        let transform_failures = self.transform_failures.load(Ordering::Relaxed);
        let classifier_failures = self.classifier_failures.load(Ordering::Relaxed);
        let timeouts = self.timeouts.load(Ordering::Relaxed);
        let completed =
            succeeded + empty_input + unknown_model + transform_failures + classifier_failures;
        let total_latency_us = self.total_latency_us.load(Ordering::Relaxed);

        StatsSnapshot {
            total_requests: completed + timeouts,
            succeeded,
            empty_input,
            unknown_model,
            transform_failures,
            classifier_failures,
            timeouts,
            avg_latency_us: if completed == 0 {
                0
            } else {
                total_latency_us / completed
            },
        }
    }
}

/// Snapshot of current counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub succeeded: u64,
    pub empty_input: u64,
    pub unknown_model: u64,
    pub transform_failures: u64,
    pub classifier_failures: u64,
    pub timeouts: u64,
    pub avg_latency_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use newscat_core::Prediction;

    #[test]
    fn test_outcomes_are_counted_separately() {
        let stats = PredictionStats::new();

        stats.record(&Ok(Prediction::new("Sports", 2, "LR")), 300);
        stats.record(&Ok(Prediction::new("Business", 0, "LR")), 100);
        stats.record(&Err(PredictionError::EmptyInput), 0);
        stats.record(
            &Err(PredictionError::UnknownModel {
                model: "XGBoost".to_string(),
            }),
            0,
        );
        stats.record_timeout();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_requests, 5);
        assert_eq!(snapshot.succeeded, 2);
        assert_eq!(snapshot.empty_input, 1);
        assert_eq!(snapshot.unknown_model, 1);
        assert_eq!(snapshot.timeouts, 1);
        assert_eq!(snapshot.avg_latency_us, 100);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = PredictionStats::new().snapshot();
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.avg_latency_us, 0);
    }
}
