//! Best-effort on-screen keyboard launching.
//!
//! Launching a keyboard is a convenience action outside the tracking core:
//! any failure is logged and swallowed, and the pipeline continues without
//! one.

use log::{info, warn};
use std::process::Command;

/// Try to launch the platform's on-screen keyboard. Never fails.
pub fn launch_on_screen_keyboard() {
    let result = spawn_keyboard();
    match result {
        Ok(name) => info!("Launched on-screen keyboard: {name}"),
        Err(e) => warn!("Could not launch an on-screen keyboard: {e}"),
    }
}

#[cfg(target_os = "linux")]
fn spawn_keyboard() -> std::io::Result<&'static str> {
    // onboard is the common choice on GNOME-ish desktops
    match Command::new("onboard").spawn() {
        Ok(_) => Ok("onboard"),
        Err(_) => {
            Command::new("matchbox-keyboard").spawn()?;
            Ok("matchbox-keyboard")
        }
    }
}

#[cfg(target_os = "windows")]
fn spawn_keyboard() -> std::io::Result<&'static str> {
    Command::new("osk.exe").spawn()?;
    Ok("osk.exe")
}

#[cfg(target_os = "macos")]
fn spawn_keyboard() -> std::io::Result<&'static str> {
    Command::new("open").args(["-a", "Keyboard Viewer"]).spawn()?;
    Ok("Keyboard Viewer")
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn spawn_keyboard() -> std::io::Result<&'static str> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no on-screen keyboard known for this platform",
    ))
}
