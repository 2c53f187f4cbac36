//! Batch evaluation metrics.
//!
//! Uses atomics so every worker can record without locking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counters shared by the workers of one [`crate::BatchEvaluator`].
#[derive(Debug, Default)]
pub struct BatchMetrics {
    resolved: AtomicU64,
    failed: AtomicU64,
    strikes: AtomicU64,
    /// Sum of resolution times, in nanoseconds.
    total_time_nanos: AtomicU64,
}

impl BatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, strikes: usize, elapsed: Duration) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
        self.strikes.fetch_add(strikes as u64, Ordering::Relaxed);
        self.total_time_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> u64 {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn strikes(&self) -> u64 {
        self.strikes.load(Ordering::Relaxed)
    }

    /// Mean resolution time, `None` before the first success.
    pub fn average_time(&self) -> Option<Duration> {
        let resolved = self.resolved();
        (resolved > 0).then(|| {
            Duration::from_nanos(self.total_time_nanos.load(Ordering::Relaxed) / resolved)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_successes_only() {
        let metrics = BatchMetrics::new();
        assert_eq!(metrics.average_time(), None);

        metrics.record_success(4, Duration::from_millis(2));
        metrics.record_success(6, Duration::from_millis(4));
        metrics.record_failure();

        assert_eq!(metrics.resolved(), 2);
        assert_eq!(metrics.failed(), 1);
        assert_eq!(metrics.strikes(), 10);
        assert_eq!(metrics.average_time(), Some(Duration::from_millis(3)));
    }
}
