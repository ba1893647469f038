//! Running success/failure statistics for the downstream CRC validator.

use tracing::info;

/// Counts checksum pass/fail events and reports a running error rate.
///
/// Two monotonically increasing counters, nothing else. Counter growth is
/// unbounded; `u64` does not wrap at realistic event volumes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorCounter {
    ok: u64,
    fail: u64,
}

impl ErrorCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checksum-pass event.
    pub fn record_ok(&mut self) {
        self.ok += 1;
        self.report();
    }

    /// Record a checksum-fail event.
    pub fn record_fail(&mut self) {
        self.fail += 1;
        self.report();
    }

    pub fn ok_count(&self) -> u64 {
        self.ok
    }

    pub fn fail_count(&self) -> u64 {
        self.fail
    }

    pub fn total(&self) -> u64 {
        self.ok + self.fail
    }

    /// Fraction of events that failed, `0.0` when no events were recorded.
    pub fn error_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.fail as f64 / self.total() as f64
        }
    }

    fn report(&self) {
        info!(
            ok = self.ok,
            fail = self.fail,
            error_rate = self.error_rate(),
            "crc statistics"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let counter = ErrorCounter::new();
        assert_eq!(counter.total(), 0);
        assert_eq!(counter.error_rate(), 0.0);
    }

    #[test]
    fn counts_events() {
        let mut counter = ErrorCounter::new();
        counter.record_ok();
        counter.record_ok();
        counter.record_fail();
        assert_eq!(counter.ok_count(), 2);
        assert_eq!(counter.fail_count(), 1);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn rate_is_fail_over_total() {
        let mut counter = ErrorCounter::new();
        counter.record_fail();
        assert_eq!(counter.error_rate(), 1.0);

        counter.record_ok();
        counter.record_ok();
        counter.record_fail();
        assert_eq!(counter.error_rate(), 0.5);
    }
}
