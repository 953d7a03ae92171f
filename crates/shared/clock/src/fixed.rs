use chrono::Duration;
use horologe_core::Timestamp;
use horologe_ports::Clock;
use std::sync::RwLock;

/// Frozen clock for deterministic tests
///
/// Time only moves when explicitly advanced or set, so a test can pin the
/// displayed timestamp to a known value.
pub struct FixedClock {
    current: RwLock<Timestamp>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn new(initial: Timestamp) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write().expect("clock lock poisoned");
        *current += duration;
    }

    /// Explicitly set the time
    pub fn set(&self, time: Timestamp) {
        let mut current = self.current.write().expect("clock lock poisoned");
        *current = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read().expect("clock lock poisoned")
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
