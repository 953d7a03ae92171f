use chrono::Local;
use horologe_core::Timestamp;
use horologe_ports::Clock;

/// Real system clock for production use
///
/// This simply returns the current wall-clock time in the local timezone.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
