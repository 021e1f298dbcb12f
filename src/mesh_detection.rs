//! Face-mesh landmark detection using `ONNX` Runtime.
//!
//! Runs a 478-point refined face mesh model over the full camera frame and
//! returns landmarks normalized to the frame dimensions. The model also
//! emits a face presence score; frames scoring below the configured minimum
//! are reported as "no face" rather than as an error.

use crate::{
    constants::NUM_FACE_MESH_LANDMARKS,
    landmarks::{FaceLandmarks, NormalizedLandmark},
    Result,
};
use ndarray::{Array1, Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Face-mesh model input size (square)
const MESH_INPUT_SIZE: i32 = 192;

/// Coordinates per landmark in the model output (x, y, z)
const COORDS_PER_LANDMARK: usize = 3;

/// 478-point face-mesh detector backed by `ONNX` Runtime
pub struct FaceMeshDetector {
    session: Session,
    min_face_score: f32,
}

impl FaceMeshDetector {
    /// Create a detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(model_path: P, min_face_score: f32) -> Result<Self> {
        log::info!(
            "Initializing FaceMeshDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("face_mesh")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        if session.inputs.is_empty() {
            return Err(crate::Error::ModelError("Model has no inputs".to_string()));
        }
        if session.outputs.is_empty() {
            return Err(crate::Error::ModelOutputError("Model has no outputs".to_string()));
        }

        Ok(Self {
            session,
            min_face_score,
        })
    }

    /// Detect the face mesh in a full camera frame.
    ///
    /// Returns `Ok(None)` when the model's face presence score falls below
    /// the configured minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if preprocessing, inference, or output extraction fails
    pub fn detect(&self, frame: &Mat) -> Result<Option<FaceLandmarks>> {
        let input = self.preprocess(frame)?;
        let (coords, score) = self.forward(input)?;

        if let Some(score) = score {
            if score < self.min_face_score {
                log::debug!("Face score {score:.3} below minimum {:.3}", self.min_face_score);
                return Ok(None);
            }
        }

        self.postprocess(&coords).map(Some)
    }

    /// Resize, convert BGR to RGB, and scale pixels to [0, 1]
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let size = MESH_INPUT_SIZE as usize;
        let channels = 3;

        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(MESH_INPUT_SIZE, MESH_INPUT_SIZE),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                let pixel = float_image.at_2d::<opencv::core::Vec3f>(row as i32, col as i32)?;
                for ch in 0..channels {
                    data[(row * size + col) * channels + ch] = pixel[ch];
                }
            }
        }

        // The mesh model expects NHWC input
        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| crate::Error::ModelOutputError(format!("Failed to create input array: {e}")))
    }

    /// Run inference; returns the landmark coordinates and, when the model
    /// provides one, the face presence score
    fn forward(&self, input: Array4<f32>) -> Result<(Array1<f32>, Option<f32>)> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let coords_output = outputs
            .next()
            .ok_or_else(|| crate::Error::ModelOutputError("No landmark output from model".to_string()))?;
        let coords_tensor = coords_output.try_extract::<f32>()?;
        let coords_view = coords_tensor.view();
        let coords = coords_view
            .as_slice()
            .ok_or_else(|| crate::Error::ModelOutputError("Failed to get landmark data".to_string()))?
            .to_vec();

        let score = match outputs.next() {
            Some(score_output) => {
                let score_tensor = score_output.try_extract::<f32>()?;
                let score_view = score_tensor.view();
                score_view.as_slice().and_then(<[f32]>::first).copied()
            }
            None => None,
        };

        Ok((Array1::from(coords), score))
    }

    /// Convert model output (input-pixel units) to frame-normalized landmarks
    fn postprocess(&self, coords: &Array1<f32>) -> Result<FaceLandmarks> {
        let expected = NUM_FACE_MESH_LANDMARKS * COORDS_PER_LANDMARK;
        if coords.len() != expected {
            return Err(crate::Error::ModelOutputError(format!(
                "Expected {expected} output values, got {}",
                coords.len()
            )));
        }

        let scale = f64::from(MESH_INPUT_SIZE);
        let points = coords
            .as_slice()
            .ok_or_else(|| crate::Error::ModelOutputError("Landmark output is not contiguous".to_string()))?
            .chunks_exact(COORDS_PER_LANDMARK)
            .map(|c| {
                NormalizedLandmark::new(
                    f64::from(c[0]) / scale,
                    f64::from(c[1]) / scale,
                    f64::from(c[2]) / scale,
                )
            })
            .collect();

        FaceLandmarks::new(points)
    }
}
