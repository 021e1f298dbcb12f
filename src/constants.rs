//! Constants used throughout the application

/// Number of landmarks in the refined face mesh (468 mesh points + 10 iris points)
pub const NUM_FACE_MESH_LANDMARKS: usize = 478;

/// Epsilon added to the horizontal eye width when computing the eye aspect
/// ratio, to avoid division by zero on degenerate landmark sets
pub const EAR_EPSILON: f64 = 1e-6;

/// Default eye-aspect-ratio threshold below which an eye counts as closed
pub const DEFAULT_EAR_THRESHOLD: f64 = 0.20;

/// Default minimum time between two clicks from the same eye, in seconds
pub const DEFAULT_BLINK_COOLDOWN_SECS: f64 = 1.0;

/// Default inter-iris pixel distance above which the face is too close
pub const DEFAULT_TOO_CLOSE: f64 = 150.0;

/// Default inter-iris pixel distance below which the face is too far
pub const DEFAULT_TOO_FAR: f64 = 70.0;

/// Default exponential smoothing factor for the cursor position
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Default number of frames averaged to find the neutral head pose
pub const DEFAULT_CALIBRATION_FRAMES: u32 = 30;

/// Default horizontal head-to-cursor sensitivity multiplier
pub const DEFAULT_SENSITIVITY_X: f64 = 6.0;

/// Default vertical head-to-cursor sensitivity multiplier
pub const DEFAULT_SENSITIVITY_Y: f64 = 8.0;
