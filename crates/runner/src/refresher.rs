//! Clock Refresher - the periodic display refresh loop
//!
//! On each tick: read the current time from the [`Clock`], format it as
//! `YYYY.MM.DD HH:MM:SS`, and overwrite the display surface. The first tick
//! fires immediately, then once per interval for the life of the process.

use horologe_core::format_timestamp;
use horologe_ports::{Clock, DisplayResult, Surface};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Refresher configuration
#[derive(Debug, Clone)]
pub struct RefresherConfig {
    /// Interval between display refreshes
    pub tick_interval: Duration,
}

impl Default for RefresherConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
        }
    }
}

/// Periodic display refresh routine
///
/// Single task, single suspend point (the interval tick). Each tick's work
/// completes well within the period, so ticks never overlap.
pub struct ClockRefresher {
    clock: Arc<dyn Clock>,
    surface: Arc<dyn Surface>,
    config: RefresherConfig,
}

impl ClockRefresher {
    /// Create a refresher with the default 1 s interval
    pub fn new(clock: Arc<dyn Clock>, surface: Arc<dyn Surface>) -> Self {
        Self::with_config(clock, surface, RefresherConfig::default())
    }

    /// Create a refresher with a custom configuration
    pub fn with_config(
        clock: Arc<dyn Clock>,
        surface: Arc<dyn Surface>,
        config: RefresherConfig,
    ) -> Self {
        Self {
            clock,
            surface,
            config,
        }
    }

    /// One refresh: read the clock, format, overwrite the surface
    pub fn tick(&self) -> DisplayResult<()> {
        self.surface.set_text(&format_timestamp(&self.clock.now()))
    }

    /// Run a bounded number of ticks (the first fires immediately)
    ///
    /// Useful for tests and demos; production uses [`run`](Self::run).
    pub async fn run_ticks(&self, num_ticks: usize) -> DisplayResult<()> {
        let mut interval = tokio::time::interval(self.config.tick_interval);
        for _ in 0..num_ticks {
            interval.tick().await;
            self.tick()?;
        }
        Ok(())
    }

    /// Run until the process terminates or a surface write fails
    pub async fn run(&self) -> DisplayResult<()> {
        let mut interval = tokio::time::interval(self.config.tick_interval);
        // A stalled host should not burst-fire stale ticks afterwards
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            self.tick()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};
    use horologe_clock::{FixedClock, SystemClock};
    use horologe_core::Timestamp;
    use horologe_display::MemorySurface;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap();
        Local.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn test_tick_writes_formatted_time() {
        let clock = Arc::new(FixedClock::new(local(2024, 1, 5, 1, 2, 3)));
        let surface = Arc::new(MemorySurface::new("timestamp"));
        let refresher = ClockRefresher::new(clock, surface.clone());

        refresher.tick().unwrap();

        assert_eq!(surface.text(), "2024.01.05 01:02:03");
    }

    #[test]
    fn test_successive_ticks_never_go_backward() {
        let surface = Arc::new(MemorySurface::new("timestamp"));
        let refresher = ClockRefresher::new(Arc::new(SystemClock::new()), surface.clone());

        refresher.tick().unwrap();
        refresher.tick().unwrap();

        let history = surface.history();
        assert_eq!(history.len(), 2);
        assert!(history[0] <= history[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_immediate() {
        let clock = Arc::new(FixedClock::new(local(2024, 6, 1, 12, 0, 0)));
        let surface = Arc::new(MemorySurface::new("timestamp"));
        let refresher = ClockRefresher::new(clock, surface.clone());

        let start = tokio::time::Instant::now();
        refresher.run_ticks(1).await.unwrap();

        assert_eq!(surface.write_count(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_the_interval() {
        let clock = Arc::new(FixedClock::new(local(2024, 6, 1, 12, 0, 0)));
        let surface = Arc::new(MemorySurface::new("timestamp"));
        let refresher = ClockRefresher::new(clock.clone(), surface.clone());

        let start = tokio::time::Instant::now();
        refresher.run_ticks(5).await.unwrap();

        // Immediate first tick plus four full intervals
        assert_eq!(surface.write_count(), 5);
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_display_tracks_advancing_clock() {
        let clock = Arc::new(FixedClock::new(local(2024, 6, 1, 12, 0, 0)));
        let surface = Arc::new(MemorySurface::new("timestamp"));
        let refresher = ClockRefresher::new(clock.clone(), surface.clone());

        refresher.run_ticks(1).await.unwrap();
        assert_eq!(surface.text(), "2024.06.01 12:00:00");

        clock.advance(chrono::Duration::seconds(1));
        refresher.run_ticks(1).await.unwrap();
        assert_eq!(surface.text(), "2024.06.01 12:00:01");
    }

    #[test]
    fn test_write_failure_propagates() {
        struct BrokenSurface;

        impl Surface for BrokenSurface {
            fn id(&self) -> &str {
                "timestamp"
            }

            fn set_text(&self, _text: &str) -> DisplayResult<()> {
                Err(std::io::Error::other("display gone").into())
            }
        }

        let refresher = ClockRefresher::new(Arc::new(SystemClock::new()), Arc::new(BrokenSurface));

        assert!(refresher.tick().is_err());
    }
}
