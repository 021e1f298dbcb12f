//! Build script for detecting system dependencies and providing installation guidance.
//!
//! Checks for the system libraries this crate links against (OpenCV, X11)
//! and prints helpful warnings when they are missing.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");

    check_pkg_config();
    check_opencv();
    check_x11();
}

fn pkg_config_version(package: &str) -> Option<String> {
    let output = Command::new("pkg-config").args(["--modversion", package]).output().ok()?;
    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

fn check_pkg_config() {
    if Command::new("pkg-config").arg("--version").output().is_err() {
        println!("cargo:warning=pkg-config not found. This is required to find system libraries.");
        println!("cargo:warning=On Ubuntu: sudo apt-get install pkg-config");
    }
}

fn check_opencv() {
    match pkg_config_version("opencv4").or_else(|| pkg_config_version("opencv")) {
        Some(version) => println!("cargo:warning=Found OpenCV version: {version}"),
        None => {
            println!("cargo:warning=OpenCV not found via pkg-config. Make sure OpenCV is installed.");
            println!("cargo:warning=On Ubuntu: sudo apt-get install libopencv-dev");
            println!("cargo:warning=On macOS: brew install opencv");
        }
    }
}

fn check_x11() {
    if !env::var("TARGET").unwrap_or_default().contains("linux") {
        return;
    }
    let found = Command::new("pkg-config")
        .args(["--exists", "x11"])
        .output()
        .is_ok_and(|o| o.status.success());
    if !found {
        println!("cargo:warning=X11 libraries not found. Cursor control will not work.");
        println!("cargo:warning=On Ubuntu: sudo apt-get install libx11-dev libxtst-dev");
    }
}
