//! Cursor and click control for X11-based systems.
//!
//! Cursor movement uses the core protocol's pointer warp; clicks are
//! injected through the XTEST extension so they reach whichever window is
//! under the pointer.

use crate::{
    blink::MouseButton,
    error::{AppError, Result},
    utils::safe_cast::f64_to_i32,
};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::{
        xproto::{ConnectionExt, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::ConnectionExt as XTestConnectionExt,
    },
    rust_connection::RustConnection,
    CURRENT_TIME,
};

/// X11 core button number for the left mouse button
const BUTTON_LEFT: u8 = 1;

/// X11 core button number for the right mouse button
const BUTTON_RIGHT: u8 = 3;

/// Cursor and click controller for X11
pub struct CursorController {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
}

impl CursorController {
    /// Create a new cursor controller
    ///
    /// # Errors
    ///
    /// Returns an error if the X11 server cannot be reached
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::CursorControl(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::CursorControl("Failed to get screen".to_string()))?
            .clone();

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
        })
    }

    /// Set cursor position (absolute), clamped to the screen bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the warp request fails
    pub fn set_position(&self, x: f64, y: f64) -> Result<()> {
        let max_x = i32::from(self.screen_width.saturating_sub(1));
        let max_y = i32::from(self.screen_height.saturating_sub(1));
        let x = f64_to_i32(x)?.clamp(0, max_x) as i16;
        let y = f64_to_i32(y)?.clamp(0, max_y) as i16;

        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| AppError::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    /// Inject a button press and release at the current pointer position
    ///
    /// # Errors
    ///
    /// Returns an error if the XTEST requests fail
    pub fn click(&self, button: MouseButton) -> Result<()> {
        let detail = match button {
            MouseButton::Left => BUTTON_LEFT,
            MouseButton::Right => BUTTON_RIGHT,
        };

        debug!("Injecting {:?} click", button);

        for event_type in [BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT] {
            self.connection
                .xtest_fake_input(event_type, detail, CURRENT_TIME, self.screen.root, 0, 0, 0)
                .map_err(|e| AppError::CursorControl(format!("Failed to inject click: {e}")))?;
        }

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    /// Get screen dimensions
    #[must_use]
    pub const fn get_screen_size(&self) -> (u16, u16) {
        (self.screen_width, self.screen_height)
    }
}
