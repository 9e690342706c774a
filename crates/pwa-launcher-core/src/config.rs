//! Centralized configuration for the PWA launcher.
//!
//! Defaults live on [`LauncherConfig`] as constants. A run is driven by a
//! [`LaunchConfig`] value so callers (and tests) can swap the shortcut list,
//! the directory and the delays without touching globals.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application-level defaults.
pub struct LauncherConfig;

impl LauncherConfig {
    pub const APP_NAME: &'static str = "PWA Launcher";

    /// Shortcuts launched when none are given, in launch order.
    pub const DEFAULT_SHORTCUTS: &'static [&'static str] = &[
        "Claude.desktop",
        "github.desktop",
        "notion.desktop",
        "portainer.desktop",
        "whatsapp-web.desktop",
    ];

    /// Directory under the home directory that holds the shortcuts.
    pub const DESKTOP_DIR_NAME: &'static str = "Desktop";

    /// Wait before the first launch so the desktop session can settle.
    pub const STARTUP_DELAY: Duration = Duration::from_secs(5);
    /// Wait after each spawn attempt.
    pub const LAUNCH_INTERVAL: Duration = Duration::from_secs(1);
}

/// Configuration for a single launcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Shortcut file names, launched in this order.
    pub shortcuts: Vec<String>,
    /// Directory holding the shortcuts. `None` resolves `~/Desktop` at run time.
    pub desktop_dir: Option<PathBuf>,
    /// Pause before the first launch.
    pub startup_delay: Duration,
    /// Pause after each spawn attempt.
    pub launch_interval: Duration,
    /// Parse and log commands without spawning anything.
    pub dry_run: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            shortcuts: LauncherConfig::DEFAULT_SHORTCUTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            desktop_dir: None,
            startup_delay: LauncherConfig::STARTUP_DELAY,
            launch_interval: LauncherConfig::LAUNCH_INTERVAL,
            dry_run: false,
        }
    }
}

impl LaunchConfig {
    /// Create a config with the built-in shortcut list and delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shortcut list.
    pub fn with_shortcuts<I, S>(mut self, shortcuts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortcuts = shortcuts.into_iter().map(Into::into).collect();
        self
    }

    /// Read shortcuts from `dir` instead of `~/Desktop`.
    pub fn with_desktop_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.desktop_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set the pause before the first launch.
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Set the pause after each spawn attempt.
    pub fn with_launch_interval(mut self, interval: Duration) -> Self {
        self.launch_interval = interval;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Drop both delays. Used by tests.
    pub fn without_delays(self) -> Self {
        self.with_startup_delay(Duration::ZERO)
            .with_launch_interval(Duration::ZERO)
    }
}
