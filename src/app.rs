//! Main application module for the eye/head mouse.

use crate::{
    config::Config,
    cursor_control::CursorController,
    error::Result,
    landmarks::{FaceLandmarks, NOSE_TIP, VISUAL_LEFT_EYE, VISUAL_RIGHT_EYE},
    mesh_detection::FaceMeshDetector,
    osk,
    proximity::Zone,
    session::{FrameEvents, SessionState},
    signals::{extract_signals, FrameSignals},
    utils::safe_cast::f64_to_i32_clamp,
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point, Scalar},
    highgui::{self, WINDOW_NORMAL},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};
use std::time::{Duration, Instant};

/// Preview window title
const WINDOW_NAME: &str = "Eye Mouse";

/// Application configuration assembled from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// Show the annotated preview window
    pub gui: bool,
    /// Move the system cursor and inject clicks
    pub cursor_enabled: bool,
    /// Launch an on-screen keyboard at startup
    pub launch_osk: bool,
}

/// Video source type
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// Main application struct
pub struct EyeMouseApp {
    app_config: AppConfig,
    config: Config,
    detector: FaceMeshDetector,
    session: SessionState,
    cursor_controller: Option<CursorController>,
    video_capture: VideoCapture,
    status_text: String,
}

impl EyeMouseApp {
    /// Create a new eye-mouse application
    ///
    /// # Errors
    ///
    /// Returns an error if the video source, the face-mesh model, or the
    /// preview window cannot be initialized. An unreachable X11 server is
    /// not an error: tracking continues without cursor actuation.
    pub fn new(app_config: AppConfig, config: Config) -> Result<Self> {
        info!("Initializing eye-mouse application");

        let video_capture = match &app_config.video_source {
            VideoSource::Camera(index) => {
                info!("Opening camera {}", index);
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                // Reduce buffer size for lower latency (webcam only)
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {}", path);
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };

        let detector = FaceMeshDetector::new(&config.model.face_mesh, config.model.min_face_score)?;

        let cursor_controller = if app_config.cursor_enabled {
            match CursorController::new() {
                Ok(c) => {
                    info!("X11 cursor control initialized");
                    Some(c)
                }
                Err(e) => {
                    warn!("Failed to initialize cursor control: {e}. Continuing without it.");
                    None
                }
            }
        } else {
            info!("Cursor control disabled");
            None
        };

        // The tracker maps head deltas into screen space; without a screen
        // fall back to a nominal one so the preview still works
        let (screen_width, screen_height) = cursor_controller
            .as_ref()
            .map_or((1920, 1080), CursorController::get_screen_size);

        let session = SessionState::new(&config, f64::from(screen_width), f64::from(screen_height));

        if app_config.gui {
            highgui::named_window(WINDOW_NAME, WINDOW_NORMAL)?;
        }

        if app_config.launch_osk {
            osk::launch_on_screen_keyboard();
        }

        Ok(Self {
            app_config,
            config,
            detector,
            session,
            cursor_controller,
            video_capture,
            status_text: String::new(),
        })
    }

    /// Run the main per-frame loop until the quit key or an unreadable frame
    ///
    /// # Errors
    ///
    /// Returns an error if detection, actuation, or rendering fails
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main loop");

        let mut frame_count = 0u32;
        let start_time = Instant::now();
        let mut last_fps_update = Instant::now();
        let mut fps = 0.0;

        loop {
            let mut frame = Mat::default();
            if !self.video_capture.read(&mut frame)? || frame.empty() {
                // Camera gone or end of stream; either way the session ends
                info!("No more frames, stopping");
                break;
            }

            if self.config.display.mirror {
                let temp = frame.clone();
                opencv::core::flip(&temp, &mut frame, 1)?;
            }

            let detection = self.detector.detect(&frame)?;
            let processed = match detection {
                Some(landmarks) => {
                    let signals = extract_signals(&landmarks, frame.cols(), frame.rows());
                    let events = self.session.process_frame(&signals, Instant::now());
                    self.actuate(&events)?;
                    Some((landmarks, signals, events))
                }
                // No face: skip all per-frame logic, show the raw frame
                None => None,
            };

            frame_count += 1;
            if last_fps_update.elapsed() >= Duration::from_secs(1) {
                fps = f64::from(frame_count) / start_time.elapsed().as_secs_f64();
                last_fps_update = Instant::now();
            }

            if self.app_config.gui {
                self.draw_overlay(&mut frame, processed.as_ref(), fps)?;
                highgui::imshow(WINDOW_NAME, &frame)?;

                let key = highgui::wait_key(1)?;
                if key == 27 || key == i32::from(b'q') {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        info!("Application shutting down");
        Ok(())
    }

    /// Turn one frame's events into cursor moves and clicks
    fn actuate(&mut self, events: &FrameEvents) -> Result<()> {
        if let Some(zone) = events.zone_change {
            if zone != Zone::Unknown {
                info!("Distance zone changed: {}", zone.status_text());
                self.status_text = zone.status_text().to_string();
            }
        }

        if let Some(controller) = &self.cursor_controller {
            if let Some((x, y)) = events.cursor {
                controller.set_position(x, y)?;
            }
            for &button in &events.clicks {
                info!("Blink click: {:?}", button);
                controller.click(button)?;
            }
        }

        Ok(())
    }

    /// Draw landmarks, EAR readouts, calibration progress, and status text
    fn draw_overlay(
        &self,
        frame: &mut Mat,
        processed: Option<&(FaceLandmarks, FrameSignals, FrameEvents)>,
        fps: f64,
    ) -> Result<()> {
        let width = frame.cols();
        let height = frame.rows();

        if let Some((landmarks, signals, events)) = processed {
            if self.config.display.show_landmarks {
                for eye in [VISUAL_LEFT_EYE, VISUAL_RIGHT_EYE] {
                    let (ix, iy) = landmarks.get(eye.iris).to_pixel(width, height);
                    draw_dot(frame, ix, iy, Scalar::new(0.0, 255.0, 0.0, 0.0))?;
                    for lid in [eye.upper_lid, eye.lower_lid] {
                        let (x, y) = landmarks.get(lid).to_pixel(width, height);
                        draw_dot(frame, x, y, Scalar::new(255.0, 0.0, 0.0, 0.0))?;
                    }
                }
                let (nx, ny) = landmarks.get(NOSE_TIP).to_pixel(width, height);
                draw_dot(frame, nx, ny, Scalar::new(0.0, 255.0, 255.0, 0.0))?;
            }

            let ear_text = format!("EAR L {:.2} R {:.2}", signals.left_ear, signals.right_ear);
            draw_text(frame, &ear_text, 10, 60, Scalar::new(0.0, 255.0, 255.0, 0.0))?;

            if let Some((done, total)) = events.calibration {
                let text = format!("Calibrating... {done}/{total}");
                draw_text(frame, &text, 10, 90, Scalar::new(255.0, 255.0, 0.0, 0.0))?;
            }
        } else {
            draw_text(frame, "No face detected", 10, 60, Scalar::new(0.0, 0.0, 255.0, 0.0))?;
        }

        if !self.status_text.is_empty() {
            let y = f64_to_i32_clamp(f64::from(height) - 20.0, 0, height);
            draw_text(frame, &self.status_text, 10, y, Scalar::new(0.0, 165.0, 255.0, 0.0))?;
        }

        let fps_text = format!("FPS: {fps:.1}");
        draw_text(frame, &fps_text, 10, 30, Scalar::new(0.0, 255.0, 0.0, 0.0))?;

        Ok(())
    }
}

fn draw_dot(frame: &mut Mat, x: i32, y: i32, color: Scalar) -> Result<()> {
    imgproc::circle(frame, Point::new(x, y), 2, color, -1, LINE_8, 0)?;
    Ok(())
}

fn draw_text(frame: &mut Mat, text: &str, x: i32, y: i32, color: Scalar) -> Result<()> {
    imgproc::put_text(
        frame,
        text,
        Point::new(x, y),
        FONT_HERSHEY_SIMPLEX,
        0.6,
        color,
        2,
        LINE_8,
        false,
    )?;
    Ok(())
}
