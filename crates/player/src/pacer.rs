//! Frame pacing: converts a frame rate into a frame interval.

use std::time::Duration;

use crate::error::PlayerError;
use crate::types::MIN_FRAME_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    interval_ms: u64,
}

impl FramePacer {
    /// Pacer for `fps` frames per second.
    ///
    /// Zero or negative rates are rejected. The interval is `1000 / fps`
    /// milliseconds, never less than [`MIN_FRAME_INTERVAL_MS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use swears_player::FramePacer;
    ///
    /// assert_eq!(FramePacer::new(20).unwrap().interval_ms(), 50);
    /// assert_eq!(FramePacer::new(1000).unwrap().interval_ms(), 10);
    /// assert!(FramePacer::new(0).is_err());
    /// ```
    pub fn new(fps: i64) -> Result<Self, PlayerError> {
        if fps <= 0 {
            return Err(PlayerError::InvalidFrameRate(fps));
        }
        let interval_ms = (1000 / fps as u64).max(MIN_FRAME_INTERVAL_MS);
        Ok(Self { interval_ms })
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// How long to wait after a frame that took `elapsed`.
    ///
    /// Frames that overrun the interval are followed immediately.
    pub fn next_delay(&self, elapsed: Duration) -> Duration {
        self.interval().saturating_sub(elapsed)
    }
}
