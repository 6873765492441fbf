//! Error types for the fingerprint analysis engine

use std::fmt;

/// Errors that can occur during audio analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Invalid input (empty buffer, buffer shorter than one frame, zero sample rate)
    InvalidInput(String),

    /// Invalid configuration (zero frame size, zero hop size)
    InvalidConfig(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
