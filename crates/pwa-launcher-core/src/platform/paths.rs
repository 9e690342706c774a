//! Platform-specific path utilities.
//!
//! Resolves shortcut references to files under the user's desktop directory.
//! No existence checks happen here; a missing file surfaces when the parser
//! tries to open it.

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use std::path::{Path, PathBuf};

/// Get the current user's home directory.
///
/// # Platform Behavior
/// Uses the `dirs` crate:
/// - **Linux/macOS**: `$HOME`
/// - **Windows**: `{FOLDERID_Profile}`
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(LauncherError::HomeDirUnavailable)
}

/// Get the directory that holds shortcuts for the given home directory.
///
/// This is always `{home}/Desktop`, not the XDG user-dirs desktop location.
pub fn desktop_dir_in(home: &Path) -> PathBuf {
    home.join(LauncherConfig::DESKTOP_DIR_NAME)
}

/// Get the shortcut directory for the current user.
pub fn desktop_dir() -> Result<PathBuf> {
    Ok(desktop_dir_in(&home_dir()?))
}

/// Join a shortcut file name onto its directory.
pub fn shortcut_path(desktop_dir: &Path, shortcut: &str) -> PathBuf {
    desktop_dir.join(shortcut)
}
