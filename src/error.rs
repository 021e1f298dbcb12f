//! Error types for the eye-mouse library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// `ONNX` Runtime inference failed
    #[error("ONNX Runtime error: {0}")]
    OnnxRuntime(#[from] ort::OrtError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Face-mesh model loading or inference error
    #[error("Model error: {0}")]
    ModelError(String),

    /// Model output processing error
    #[error("Model output error: {0}")]
    ModelOutputError(String),

    /// Cursor control operation failed
    #[error("Cursor control error: {0}")]
    CursorControl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
