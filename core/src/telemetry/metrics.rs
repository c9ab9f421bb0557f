use std::sync::Mutex;

/// Counters for completed and failed products.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

struct Counters {
    products: usize,
    failures: usize,
}

/// Point-in-time copy of the recorded counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub products: usize,
    pub failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                products: 0,
                failures: 0,
            }),
        }
    }

    pub fn record_product(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.products += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failures += 1;
        }
    }

    /// Reads the counters; a poisoned lock degrades to zeros rather than
    /// panicking.
    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(counters) = self.inner.lock() {
            MetricsSnapshot {
                products: counters.products,
                failures: counters.failures,
            }
        } else {
            MetricsSnapshot {
                products: 0,
                failures: 0,
            }
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_outcomes() {
        let recorder = MetricsRecorder::new();
        recorder.record_product();
        recorder.record_product();
        recorder.record_failure();
        assert_eq!(
            recorder.snapshot(),
            MetricsSnapshot {
                products: 2,
                failures: 1
            }
        );
    }
}
