//! Head calibration and head-to-cursor mapping.
//!
//! The tracker starts in a calibration phase that averages the nose-tip
//! position over a fixed number of frames to establish the neutral pose.
//! The transition to tracking is one-way; there is no re-calibration within
//! a session. While tracking, the nose-tip delta from neutral is mapped to a
//! screen position around the screen center, clamped to the screen bounds,
//! and exponentially smoothed before being emitted.

/// Calibration state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationState {
    /// Accumulating nose-tip samples toward the neutral pose
    Calibrating {
        /// Samples accumulated so far
        count: u32,
        /// Running sum of normalized x
        sum_x: f64,
        /// Running sum of normalized y
        sum_y: f64,
    },
    /// Neutral pose fixed; deltas map to cursor positions
    Tracking {
        /// Mean nose-tip position over the calibration window
        neutral: (f64, f64),
    },
}

/// Result of feeding one nose-tip sample to the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerUpdate {
    /// Still calibrating; carries progress out of the total frame count
    Calibrating {
        /// Frames accumulated so far
        progress: u32,
        /// Frames required
        total: u32,
    },
    /// Smoothed cursor position in screen pixels
    Cursor {
        /// Horizontal position, within [0, `screen_width`]
        x: f64,
        /// Vertical position, within [0, `screen_height`]
        y: f64,
    },
}

/// One exponential smoothing step toward a target value
#[must_use]
pub fn smooth_toward(current: f64, target: f64, alpha: f64) -> f64 {
    current * (1.0 - alpha) + target * alpha
}

/// Head tracker: calibration accumulator plus delta-to-screen mapper
pub struct HeadTracker {
    calibration_frames: u32,
    sensitivity_x: f64,
    sensitivity_y: f64,
    smoothing: f64,
    screen_width: f64,
    screen_height: f64,
    state: CalibrationState,
    smoothed: (f64, f64),
}

impl HeadTracker {
    /// Create a tracker for a screen of the given pixel dimensions.
    ///
    /// `smoothing` is the exponential filter alpha in (0, 1];
    /// `calibration_frames` must be nonzero (enforced by config validation).
    #[must_use]
    pub fn new(
        calibration_frames: u32,
        sensitivity_x: f64,
        sensitivity_y: f64,
        smoothing: f64,
        screen_width: f64,
        screen_height: f64,
    ) -> Self {
        Self {
            calibration_frames,
            sensitivity_x,
            sensitivity_y,
            smoothing,
            screen_width,
            screen_height,
            state: CalibrationState::Calibrating {
                count: 0,
                sum_x: 0.0,
                sum_y: 0.0,
            },
            // Cursor starts at the screen center, where a zero delta maps to
            smoothed: (screen_width / 2.0, screen_height / 2.0),
        }
    }

    /// Feed one frame's normalized nose-tip position
    pub fn update(&mut self, nose: (f64, f64)) -> TrackerUpdate {
        match self.state {
            CalibrationState::Calibrating { count, sum_x, sum_y } => {
                let count = count + 1;
                let sum_x = sum_x + nose.0;
                let sum_y = sum_y + nose.1;

                if count >= self.calibration_frames {
                    let n = f64::from(count);
                    self.state = CalibrationState::Tracking {
                        neutral: (sum_x / n, sum_y / n),
                    };
                } else {
                    self.state = CalibrationState::Calibrating { count, sum_x, sum_y };
                }

                TrackerUpdate::Calibrating {
                    progress: count,
                    total: self.calibration_frames,
                }
            }
            CalibrationState::Tracking { neutral } => {
                let (tx, ty) = self.target_for(nose, neutral);
                self.smoothed = (
                    smooth_toward(self.smoothed.0, tx, self.smoothing),
                    smooth_toward(self.smoothed.1, ty, self.smoothing),
                );
                TrackerUpdate::Cursor {
                    x: self.smoothed.0,
                    y: self.smoothed.1,
                }
            }
        }
    }

    /// Map a nose-tip delta from neutral to a clamped screen target
    fn target_for(&self, nose: (f64, f64), neutral: (f64, f64)) -> (f64, f64) {
        let dx = nose.0 - neutral.0;
        let dy = nose.1 - neutral.1;
        let tx = (self.screen_width / 2.0 + dx * self.screen_width * self.sensitivity_x).clamp(0.0, self.screen_width);
        let ty =
            (self.screen_height / 2.0 + dy * self.screen_height * self.sensitivity_y).clamp(0.0, self.screen_height);
        (tx, ty)
    }

    /// Current calibration state
    #[must_use]
    pub const fn state(&self) -> CalibrationState {
        self.state
    }
}
