use super::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// The system wall clock, truncated to milliseconds.
///
/// Unlike a monotonic timer this follows wall-clock adjustments (NTP steps,
/// manual changes). Identifiers minted after a backwards step simply draw
/// fresh randomness for the earlier millisecond. A clock reading before the
/// Unix epoch is reported as `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.current_millis() > 1_577_836_800_000);
    }
}
