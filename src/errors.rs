// src/errors.rs
// Installer error handling

use std::io;
use thiserror::Error;

/// Result type for installer operations
pub type InstallerResult<T> = Result<T, InstallerError>;

/// Error types for the installer
#[derive(Debug, Error)]
pub enum InstallerError {
    // Filesystem
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: String, reason: String },

    #[error("Failed to write marker file {path}: {reason}")]
    MarkerWriteFailed { path: String, reason: String },

    // Console
    #[error("Failed to read input: {0}")]
    Input(io::Error),

    // Configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // General
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InstallerError {
    /// Check if this is a recoverable error
    ///
    /// A failed directory creation is reported and the install continues into
    /// the marker write; everything else ends the operation it occurred in.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InstallerError::DirectoryCreationFailed { .. })
    }
}
