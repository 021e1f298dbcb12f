//! Per-session state and the per-frame processing step.
//!
//! [`SessionState`] owns every piece of state the pipeline carries across
//! frames (blink cooldowns, calibration accumulator, smoothed cursor, last
//! reported proximity zone) so the frame step is an explicit function of
//! signals and time, with no process-wide state and no I/O. The application
//! loop turns the returned [`FrameEvents`] into cursor moves, clicks, and
//! overlay text.

use crate::{
    blink::{BlinkDetector, MouseButton},
    config::Config,
    head_tracking::{HeadTracker, TrackerUpdate},
    proximity::{ProximityMonitor, Zone},
    signals::FrameSignals,
};
use std::time::{Duration, Instant};

/// Everything the pipeline asks the outside world to do after one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvents {
    /// Clicks to inject, in firing order
    pub clicks: Vec<MouseButton>,
    /// Smoothed cursor position to move to, absent while calibrating
    pub cursor: Option<(f64, f64)>,
    /// Calibration progress as (done, total), absent once tracking
    pub calibration: Option<(u32, u32)>,
    /// Proximity zone, present only on the frame the zone changes
    pub zone_change: Option<Zone>,
}

/// All cross-frame pipeline state for one run
pub struct SessionState {
    blink: BlinkDetector,
    proximity: ProximityMonitor,
    tracker: HeadTracker,
}

impl SessionState {
    /// Build session state from the configuration and screen dimensions
    #[must_use]
    pub fn new(config: &Config, screen_width: f64, screen_height: f64) -> Self {
        Self {
            blink: BlinkDetector::new(
                config.blink.ear_threshold,
                Duration::from_secs_f64(config.blink.cooldown_secs),
            ),
            proximity: ProximityMonitor::new(config.proximity.too_far, config.proximity.too_close),
            tracker: HeadTracker::new(
                config.calibration.frames,
                config.cursor.sensitivity_x,
                config.cursor.sensitivity_y,
                config.cursor.smoothing,
                screen_width,
                screen_height,
            ),
        }
    }

    /// Run all per-frame state machines over one frame's signals
    pub fn process_frame(&mut self, signals: &FrameSignals, now: Instant) -> FrameEvents {
        let clicks = self.blink.update(signals.left_ear, signals.right_ear, now);
        let zone_change = self.proximity.update(signals.iris_distance);

        let (cursor, calibration) = match self.tracker.update(signals.nose) {
            TrackerUpdate::Calibrating { progress, total } => (None, Some((progress, total))),
            TrackerUpdate::Cursor { x, y } => (Some((x, y)), None),
        };

        FrameEvents {
            clicks,
            cursor,
            calibration,
            zone_change,
        }
    }

    /// The most recently reported proximity zone
    #[must_use]
    pub const fn current_zone(&self) -> Zone {
        self.proximity.current_zone()
    }
}
