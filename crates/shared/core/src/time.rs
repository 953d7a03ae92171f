//! Timestamp value type and display formatting

use chrono::{DateTime, Local};

/// Timestamp in the local timezone
///
/// The clock renders wall time as a user would read it off their machine,
/// so local time rather than UTC.
pub type Timestamp = DateTime<Local>;

/// strftime pattern for the display: `YYYY.MM.DD HH:MM:SS`
///
/// Every field below the year is zero-padded to two digits, so formatted
/// strings sort lexicographically in the same order as the timestamps
/// they were formatted from.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Format a timestamp for the display surface
///
/// Pure and total: defined for every valid timestamp.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
