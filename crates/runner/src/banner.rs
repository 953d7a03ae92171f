//! Startup banner
//!
//! Emits the two static console lines once at startup. Informational only.

use horologe_core::{EXPANSION_NOTE, READY_BANNER};
use log::info;

/// Log the startup banner
pub fn announce_ready() {
    info!("{}", READY_BANNER);
    info!("{}", EXPANSION_NOTE);
}
