//! Configuration management for the eye-mouse application

use crate::{
    constants::{
        DEFAULT_BLINK_COOLDOWN_SECS, DEFAULT_CALIBRATION_FRAMES, DEFAULT_EAR_THRESHOLD, DEFAULT_SENSITIVITY_X,
        DEFAULT_SENSITIVITY_Y, DEFAULT_SMOOTHING, DEFAULT_TOO_CLOSE, DEFAULT_TOO_FAR,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Face-mesh model configuration
    pub model: ModelConfig,

    /// Blink-click configuration
    pub blink: BlinkConfig,

    /// Distance-from-camera thresholds
    pub proximity: ProximityConfig,

    /// Head-to-cursor mapping configuration
    pub cursor: CursorConfig,

    /// Neutral-pose calibration configuration
    pub calibration: CalibrationConfig,

    /// Preview display configuration
    pub display: DisplayConfig,
}

/// Face-mesh model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the face-mesh ONNX model
    pub face_mesh: PathBuf,

    /// Minimum face presence score to accept a detection (0.0-1.0)
    pub min_face_score: f32,
}

/// Blink-click parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// Eye aspect ratio below which an eye counts as closed
    pub ear_threshold: f64,

    /// Minimum seconds between two clicks from the same eye
    pub cooldown_secs: f64,
}

/// Distance-from-camera thresholds, in inter-iris pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Inter-iris distance above which the face is too close
    pub too_close: f64,

    /// Inter-iris distance below which the face is too far
    pub too_far: f64,
}

/// Head-to-cursor mapping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Enable cursor control
    pub enabled: bool,

    /// Horizontal sensitivity multiplier
    pub sensitivity_x: f64,

    /// Vertical sensitivity multiplier
    pub sensitivity_y: f64,

    /// Exponential smoothing alpha, in (0, 1)
    pub smoothing: f64,
}

/// Neutral-pose calibration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Number of frames averaged to find the neutral pose
    pub frames: u32,
}

/// Preview display parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mirror the preview horizontally
    pub mirror: bool,

    /// Draw iris and eyelid markers on the preview
    pub show_landmarks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            blink: BlinkConfig::default(),
            proximity: ProximityConfig::default(),
            cursor: CursorConfig::default(),
            calibration: CalibrationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            face_mesh: PathBuf::from("assets/face_mesh.onnx"),
            min_face_score: 0.5,
        }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            ear_threshold: DEFAULT_EAR_THRESHOLD,
            cooldown_secs: DEFAULT_BLINK_COOLDOWN_SECS,
        }
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            too_close: DEFAULT_TOO_CLOSE,
            too_far: DEFAULT_TOO_FAR,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity_x: DEFAULT_SENSITIVITY_X,
            sensitivity_y: DEFAULT_SENSITIVITY_Y,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_CALIBRATION_FRAMES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            show_landmarks: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Check the configuration for values the pipeline cannot work with
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending value
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.blink.ear_threshold) {
            return Err(Error::ConfigError(format!(
                "ear_threshold must be in [0, 1], got {}",
                self.blink.ear_threshold
            )));
        }
        if self.blink.cooldown_secs <= 0.0 {
            return Err(Error::ConfigError(format!(
                "cooldown_secs must be positive, got {}",
                self.blink.cooldown_secs
            )));
        }
        if self.proximity.too_far >= self.proximity.too_close {
            return Err(Error::ConfigError(format!(
                "too_far ({}) must be below too_close ({})",
                self.proximity.too_far, self.proximity.too_close
            )));
        }
        if !(self.cursor.smoothing > 0.0 && self.cursor.smoothing < 1.0) {
            return Err(Error::ConfigError(format!(
                "smoothing must be in (0, 1), got {}",
                self.cursor.smoothing
            )));
        }
        if self.cursor.sensitivity_x <= 0.0 || self.cursor.sensitivity_y <= 0.0 {
            return Err(Error::ConfigError("sensitivities must be positive".to_string()));
        }
        if self.calibration.frames == 0 {
            return Err(Error::ConfigError("calibration frames must be nonzero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.blink.ear_threshold > 0.0 && config.blink.ear_threshold < 1.0);
        assert!(config.proximity.too_far < config.proximity.too_close);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("blink:\n  ear_threshold: 0.25\n  cooldown_secs: 0.5\n").unwrap();
        assert!((config.blink.ear_threshold - 0.25).abs() < 1e-12);
        assert_eq!(config.calibration.frames, DEFAULT_CALIBRATION_FRAMES);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.cursor.smoothing = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.proximity.too_far = 200.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.calibration.frames = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.blink.cooldown_secs = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert!((parsed.cursor.smoothing - config.cursor.smoothing).abs() < 1e-12);
        assert_eq!(parsed.calibration.frames, config.calibration.frames);
        assert_eq!(parsed.display.mirror, config.display.mirror);
    }
}
