//! Horologe Clock Adapters
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`] - real local wall time, for production
//! - [`FixedClock`] - frozen time that only moves when explicitly advanced,
//!   for deterministic tests

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use horologe_ports::Clock;
