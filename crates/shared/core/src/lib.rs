//! Horologe Core Domain
//!
//! Pure domain types for the Horologe terminal clock.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod banner;
pub mod time;

// Re-export commonly used items at crate root
pub use banner::{EXPANSION_NOTE, READY_BANNER};
pub use time::{TIMESTAMP_FORMAT, Timestamp, format_timestamp};
