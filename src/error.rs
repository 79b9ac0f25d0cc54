//! Centralized error handling for syscontrol

use std::io;

use thiserror::Error;

/// Custom error type for syscontrol operations
#[derive(Debug, Error)]
pub enum SyscontrolError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// Hardware query errors
    #[error("Detection error: {0}")]
    Detection(String),
    /// Benchmark batch could not run to completion
    #[error("Benchmark error: {0}")]
    Benchmark(String),
}

impl SyscontrolError {
    pub fn detection(message: impl Into<String>) -> Self {
        Self::Detection(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<toml::de::Error> for SyscontrolError {
    fn from(error: toml::de::Error) -> Self {
        SyscontrolError::Config(error.to_string())
    }
}

/// Type alias for Results in syscontrol
pub type Result<T> = std::result::Result<T, SyscontrolError>;
