// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Clock adapter used to bracket the measured phase.

use std::time::Instant;

/// A monotonic time source with a fixed native resolution.
pub trait Clock {
    /// Opaque point in time.
    type Timestamp: Copy;

    /// Native ticks in one millisecond.
    const TICKS_PER_MS: f64;

    /// Read the clock. Must not block.
    fn now(&self) -> Self::Timestamp;

    /// Ticks between two readings, `start` taken first.
    fn elapsed(&self, start: Self::Timestamp, end: Self::Timestamp) -> u64;

    /// Convert a tick count to milliseconds.
    fn ticks_to_ms(ticks: u64) -> f64 {
        ticks as f64 / Self::TICKS_PER_MS
    }
}

/// Wall-independent clock backed by [`Instant`], ticking in nanoseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    type Timestamp = Instant;

    const TICKS_PER_MS: f64 = 1_000_000.0;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, start: Instant, end: Instant) -> u64 {
        end.saturating_duration_since(start).as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_monotonic_elapsed() {
        let clock = MonotonicClock::new();
        let start = clock.now();
        thread::sleep(Duration::from_millis(5));
        let end = clock.now();

        let ticks = clock.elapsed(start, end);
        assert!(ticks >= 5_000_000, "Elapsed {} < 5ms", ticks);
        assert!(MonotonicClock::ticks_to_ms(ticks) >= 5.0);
    }

    #[test]
    fn test_reversed_readings_saturate() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(clock.elapsed(second, first), 0);
    }

    #[test]
    fn test_ticks_to_ms() {
        assert_eq!(MonotonicClock::ticks_to_ms(1_500_000), 1.5);
        assert_eq!(MonotonicClock::ticks_to_ms(0), 0.0);
    }
}
