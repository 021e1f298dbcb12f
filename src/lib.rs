//! Webcam eye/head mouse library.
//!
//! This library turns a webcam feed into mouse input:
//! - A 478-point face-mesh model (via `ONNX` Runtime) finds iris centers,
//!   eyelid points, and the nose tip each frame
//! - Blinks of the visual-left / visual-right eye fire left / right clicks,
//!   with a per-eye cooldown
//! - Head position relative to a calibrated neutral pose moves the system
//!   cursor through an exponentially smoothed, axis-clamped mapping
//! - The inter-iris distance drives a distance-from-camera hint on the
//!   annotated preview
//!
//! The per-frame pipeline is synchronous and single-threaded:
//!
//! ```text
//! frame -> face mesh -> signals -> {blink, proximity, head tracker} -> {clicks, cursor, overlay}
//! ```
//!
//! # Examples
//!
//! ## Per-frame logic without any I/O
//!
//! The state machines are pure of I/O and can be driven directly:
//!
//! ```
//! use eye_mouse::{config::Config, session::SessionState, signals::FrameSignals};
//! use std::time::Instant;
//!
//! let config = Config::default();
//! let mut session = SessionState::new(&config, 1920.0, 1080.0);
//!
//! let signals = FrameSignals {
//!     left_ear: 0.12, // below the blink threshold
//!     right_ear: 0.31,
//!     iris_distance: 95.0,
//!     nose: (0.5, 0.5),
//! };
//! let events = session.process_frame(&signals, Instant::now());
//! assert_eq!(events.clicks.len(), 1);
//! ```
//!
//! ## Full pipeline
//!
//! ```no_run
//! use eye_mouse::{
//!     config::Config, cursor_control::CursorController, mesh_detection::FaceMeshDetector,
//!     session::SessionState, signals::extract_signals,
//! };
//! use opencv::{core::Mat, prelude::*, videoio};
//! use std::time::Instant;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let detector = FaceMeshDetector::new("assets/face_mesh.onnx", 0.5)?;
//! let controller = CursorController::new()?;
//! let (screen_w, screen_h) = controller.get_screen_size();
//! let mut session = SessionState::new(&config, screen_w.into(), screen_h.into());
//!
//! let mut cap = videoio::VideoCapture::new(0, videoio::CAP_ANY)?;
//! let mut frame = Mat::default();
//! loop {
//!     if !cap.read(&mut frame)? {
//!         break;
//!     }
//!     if let Some(landmarks) = detector.detect(&frame)? {
//!         let signals = extract_signals(&landmarks, frame.cols(), frame.rows());
//!         let events = session.process_frame(&signals, Instant::now());
//!         if let Some((x, y)) = events.cursor {
//!             controller.set_position(x, y)?;
//!         }
//!         for button in events.clicks {
//!             controller.click(button)?;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Face-mesh landmark types and the fixed indices the pipeline consumes
pub mod landmarks;

/// Face-mesh landmark detection via `ONNX` Runtime
pub mod mesh_detection;

/// Pure per-frame signal extraction (distances, eye aspect ratios)
pub mod signals;

/// Blink-click state machine with per-eye cooldown
pub mod blink;

/// Edge-triggered distance-from-camera classification
pub mod proximity;

/// Neutral-pose calibration and head-to-cursor mapping
pub mod head_tracking;

/// Per-session pipeline state and the per-frame processing step
pub mod session;

/// X11 cursor movement and click injection
pub mod cursor_control;

/// Best-effort on-screen keyboard launching
pub mod osk;

/// Utility functions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
