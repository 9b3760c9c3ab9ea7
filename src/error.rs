//! Error types for inspector operations.
//!
//! This module defines [`InspectorError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Absence (a missing file, an unmatched pattern, a failing command) is
//!   a negative answer, never an error
//! - I/O failures on paths that do exist surface as [`InspectorError::Io`]
//! - Use `anyhow::Error` (via `InspectorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for inspector operations.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A configuration key the operation cannot do without is unset.
    #[error("Missing configuration value: {key}")]
    MissingConfigKey { key: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for inspector operations.
pub type Result<T> = std::result::Result<T, InspectorError>;
