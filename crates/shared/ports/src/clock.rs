use horologe_core::Timestamp;

/// Port for time abstraction
///
/// This allows the refresher to run against different time sources:
/// - Real local time for production
/// - Frozen time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
