//! Face-mesh landmark types and the fixed indices this application consumes.
//!
//! Indices follow the 478-point refined face mesh topology (468 mesh points
//! plus 10 iris points). Only a handful of them are used: the nose tip and,
//! per eye, the iris center, one upper/lower eyelid pair, and the two eye
//! corners.

use crate::{constants::NUM_FACE_MESH_LANDMARKS, Error, Result};

/// A single landmark, normalized to the frame dimensions (each coordinate in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedLandmark {
    /// Horizontal position as a fraction of frame width
    pub x: f64,
    /// Vertical position as a fraction of frame height
    pub y: f64,
    /// Depth relative to the face, same scale as x (unused by the pipeline)
    pub z: f64,
}

impl NormalizedLandmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to pixel coordinates for a frame of the given dimensions
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Normalized inputs keep the product in range
    pub fn to_pixel(&self, frame_width: i32, frame_height: i32) -> (i32, i32) {
        (
            (self.x * f64::from(frame_width)).round() as i32,
            (self.y * f64::from(frame_height)).round() as i32,
        )
    }
}

/// One detected face's full landmark set for a single frame
#[derive(Debug, Clone)]
pub struct FaceLandmarks {
    points: Vec<NormalizedLandmark>,
}

impl FaceLandmarks {
    /// Wrap a full landmark set
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not contain exactly 478 points
    pub fn new(points: Vec<NormalizedLandmark>) -> Result<Self> {
        if points.len() == NUM_FACE_MESH_LANDMARKS {
            Ok(Self { points })
        } else {
            Err(Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                NUM_FACE_MESH_LANDMARKS,
                points.len()
            )))
        }
    }

    /// Get a landmark by mesh index
    #[must_use]
    pub fn get(&self, index: usize) -> NormalizedLandmark {
        self.points[index]
    }

    /// Number of landmarks (always 478)
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty (never, for a valid set)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Mesh index of the nose tip
pub const NOSE_TIP: usize = 1;

/// Mesh indices for one eye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeIndices {
    /// Iris center point
    pub iris: usize,
    /// Upper eyelid point above the pupil
    pub upper_lid: usize,
    /// Lower eyelid point below the pupil
    pub lower_lid: usize,
    /// Eye corner nearest the nose
    pub inner_corner: usize,
    /// Eye corner nearest the temple
    pub outer_corner: usize,
}

/// Eye shown on the LEFT side of the mirrored preview.
///
/// The preview mirrors the camera feed, so the eye the user sees on the left
/// of the window is the mesh's RIGHT eye. These are raw right-eye indices.
/// This table is the single place the inversion is recorded; a blink of this
/// eye fires a LEFT click.
pub const VISUAL_LEFT_EYE: EyeIndices = EyeIndices {
    iris: 468,
    upper_lid: 159,
    lower_lid: 145,
    inner_corner: 133,
    outer_corner: 33,
};

/// Eye shown on the RIGHT side of the mirrored preview (the mesh's LEFT eye).
/// A blink of this eye fires a RIGHT click.
pub const VISUAL_RIGHT_EYE: EyeIndices = EyeIndices {
    iris: 473,
    upper_lid: 386,
    lower_lid: 374,
    inner_corner: 362,
    outer_corner: 263,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> Vec<NormalizedLandmark> {
        (0..NUM_FACE_MESH_LANDMARKS)
            .map(|i| NormalizedLandmark::new(i as f64 / 1000.0, 0.5, 0.0))
            .collect()
    }

    #[test]
    fn test_landmark_set_size_enforced() {
        assert!(FaceLandmarks::new(full_set()).is_ok());
        assert!(FaceLandmarks::new(vec![NormalizedLandmark::new(0.5, 0.5, 0.0)]).is_err());
    }

    #[test]
    fn test_to_pixel_rounds() {
        let lm = NormalizedLandmark::new(0.1004, 0.2996, 0.0);
        assert_eq!(lm.to_pixel(1000, 1000), (100, 300));
    }

    #[test]
    fn test_eye_tables_are_mirrored() {
        // The visual-left table must carry raw right-eye mesh indices and
        // vice versa; all indices must fit the 478-point mesh.
        assert_eq!(VISUAL_LEFT_EYE.iris, 468);
        assert_eq!(VISUAL_RIGHT_EYE.iris, 473);
        for eye in [VISUAL_LEFT_EYE, VISUAL_RIGHT_EYE] {
            for idx in [eye.iris, eye.upper_lid, eye.lower_lid, eye.inner_corner, eye.outer_corner] {
                assert!(idx < NUM_FACE_MESH_LANDMARKS);
            }
        }
    }
}
