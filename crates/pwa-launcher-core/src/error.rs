//! Error types for the PWA launcher.
//!
//! Only [`LauncherError::HomeDirUnavailable`] is fatal to a run. Every other
//! variant is scoped to a single shortcut and is recorded in the launch
//! report instead of aborting.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher library.
#[derive(Debug, Error)]
pub enum LauncherError {
    // Locator errors
    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Desktop entry errors
    #[error("No Exec line found in desktop file {}", .path.display())]
    MissingExecLine { path: PathBuf },

    #[error("Could not parse command: {command:?}")]
    EmptyCommand { command: String },

    // Process errors
    #[error("Failed to spawn {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

impl LauncherError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LauncherError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this error aborts the whole run rather than a single shortcut.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LauncherError::HomeDirUnavailable)
    }
}
