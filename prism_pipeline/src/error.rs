//! Error types for the Prism pipeline
//!
//! This module defines the error types used by render passes, the
//! graphics state cache, and window/renderer configuration.

use std::fmt;

/// Result type for Prism pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism pipeline errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Graphics device rejected a command
    BackendError(String),

    /// Invalid window or renderer configuration
    InvalidConfig(String),

    /// A nested render pass reported a failure
    PassFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::PassFailed(msg) => write!(f, "Render pass failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
