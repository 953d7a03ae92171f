//! Horologe Runner - clock refresh orchestration
//!
//! Ties together the clock and display adapters:
//!
//! - **Refresher**: the periodic tick loop that formats the current time and
//!   overwrites the display surface
//! - **Config**: JSON runner configuration (surface id, tick interval)
//! - **Banner**: the two static console lines emitted at startup
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐     now()      ┌──────────────────┐
//!   │    Clock     │ ─────────────▶ │  ClockRefresher  │
//!   │ (SystemClock)│                │  (1 s interval)  │
//!   └──────────────┘                └────────┬─────────┘
//!                                            │ set_text("YYYY.MM.DD HH:MM:SS")
//!                                            ▼
//!                                   ┌──────────────────┐
//!                                   │     Surface      │
//!                                   │ (TerminalSurface)│
//!                                   └──────────────────┘
//! ```

pub mod banner;
pub mod config;
pub mod refresher;

// Re-export main types
pub use config::{ConfigError, RunnerConfig};
pub use refresher::{ClockRefresher, RefresherConfig};
