//! Utility functions shared across the application.

pub mod safe_cast;
