//! Per-frame signal extraction from a face landmark set.
//!
//! Pure arithmetic only: no side effects, no state. Everything downstream
//! (blink detection, proximity classification, cursor mapping) works off the
//! [`FrameSignals`] produced here.

use crate::{
    constants::EAR_EPSILON,
    landmarks::{EyeIndices, FaceLandmarks, NormalizedLandmark, NOSE_TIP, VISUAL_LEFT_EYE, VISUAL_RIGHT_EYE},
};

/// Euclidean distance in pixel space between two normalized landmarks.
///
/// Each coordinate is first rounded to whole pixels, matching how the
/// landmarks are drawn on the preview.
#[must_use]
pub fn pixel_distance(p1: NormalizedLandmark, p2: NormalizedLandmark, frame_width: i32, frame_height: i32) -> f64 {
    let (x1, y1) = p1.to_pixel(frame_width, frame_height);
    let (x2, y2) = p2.to_pixel(frame_width, frame_height);
    f64::from(x2 - x1).hypot(f64::from(y2 - y1))
}

/// Eye aspect ratio: vertical eyelid opening over horizontal eye width.
///
/// A small epsilon keeps the ratio finite when the corner landmarks coincide.
#[must_use]
pub fn eye_aspect_ratio(vertical_dist: f64, horizontal_dist: f64) -> f64 {
    vertical_dist / (horizontal_dist + EAR_EPSILON)
}

/// Signals computed from one frame's landmark set
#[derive(Debug, Clone, Copy)]
pub struct FrameSignals {
    /// Aspect ratio of the eye on the visual left of the preview
    pub left_ear: f64,
    /// Aspect ratio of the eye on the visual right of the preview
    pub right_ear: f64,
    /// Pixel distance between the two iris centers (distance-from-camera proxy)
    pub iris_distance: f64,
    /// Normalized nose-tip position
    pub nose: (f64, f64),
}

/// Aspect ratio for one eye given its landmark indices
#[must_use]
pub fn eye_ear(landmarks: &FaceLandmarks, eye: EyeIndices, frame_width: i32, frame_height: i32) -> f64 {
    let vertical = pixel_distance(
        landmarks.get(eye.upper_lid),
        landmarks.get(eye.lower_lid),
        frame_width,
        frame_height,
    );
    let horizontal = pixel_distance(
        landmarks.get(eye.inner_corner),
        landmarks.get(eye.outer_corner),
        frame_width,
        frame_height,
    );
    eye_aspect_ratio(vertical, horizontal)
}

/// Extract all per-frame signals from a landmark set
#[must_use]
pub fn extract_signals(landmarks: &FaceLandmarks, frame_width: i32, frame_height: i32) -> FrameSignals {
    let iris_distance = pixel_distance(
        landmarks.get(VISUAL_LEFT_EYE.iris),
        landmarks.get(VISUAL_RIGHT_EYE.iris),
        frame_width,
        frame_height,
    );

    let nose = landmarks.get(NOSE_TIP);

    FrameSignals {
        left_ear: eye_ear(landmarks, VISUAL_LEFT_EYE, frame_width, frame_height),
        right_ear: eye_ear(landmarks, VISUAL_RIGHT_EYE, frame_width, frame_height),
        iris_distance,
        nose: (nose.x, nose.y),
    }
}
