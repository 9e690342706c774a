//! Sequential launching of desktop shortcuts.

use crate::config::LaunchConfig;
use crate::error::{LauncherError, Result};
use crate::platform;
use crate::shortcut::{read_exec_command, CommandTokens};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::{debug, error, info};

/// Starts a program without waiting for it.
pub trait ProcessSpawner {
    /// Spawn `tokens` and return the child's PID.
    fn spawn(&self, tokens: &CommandTokens) -> Result<u32>;
}

/// Spawner that creates real, detached OS processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn(&self, tokens: &CommandTokens) -> Result<u32> {
        debug!("Spawning {:?}", tokens.as_slice());
        let mut cmd = Command::new(tokens.program());
        cmd.args(tokens.args());
        platform::detach(&mut cmd);

        // The child handle is dropped without wait(); the process keeps running.
        let child = cmd.spawn().map_err(|e| LauncherError::SpawnFailed {
            program: tokens.program().to_string(),
            source: e,
        })?;
        Ok(child.id())
    }
}

/// What happened to a single shortcut.
#[derive(Debug)]
pub enum LaunchStatus {
    /// The process was started.
    Launched { pid: u32 },
    /// The command was parsed but not started (dry run).
    DryRun,
    /// The shortcut was skipped.
    Failed { error: LauncherError },
}

/// Outcome for one shortcut, in launch order.
#[derive(Debug)]
pub struct ShortcutOutcome {
    /// Shortcut file name as configured.
    pub shortcut: String,
    /// Resolved path of the shortcut file.
    pub path: PathBuf,
    /// Launch command, if the file was parsed.
    pub command: Option<String>,
    pub status: LaunchStatus,
}

impl ShortcutOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, LaunchStatus::Failed { .. })
    }

    pub fn error(&self) -> Option<&LauncherError> {
        match &self.status {
            LaunchStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Result of a full launcher run.
#[derive(Debug, Default)]
pub struct LaunchReport {
    pub outcomes: Vec<ShortcutOutcome>,
}

impl LaunchReport {
    /// Number of shortcuts whose process was started.
    pub fn launched_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, LaunchStatus::Launched { .. }))
            .count()
    }

    /// Shortcuts that were skipped because of an error.
    pub fn failures(&self) -> impl Iterator<Item = &ShortcutOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Looks up the current user's home directory.
pub type HomeResolver = fn() -> Result<PathBuf>;

/// Blocks the launcher for a fixed pause.
pub type Sleeper = fn(Duration);

/// Launches the configured shortcuts one after another.
pub struct ShortcutLauncher<S = DetachedSpawner> {
    config: LaunchConfig,
    spawner: S,
    home_resolver: HomeResolver,
    sleeper: Sleeper,
}

impl ShortcutLauncher<DetachedSpawner> {
    /// Create a launcher that spawns real processes.
    pub fn new(config: LaunchConfig) -> Self {
        Self::with_spawner(config, DetachedSpawner)
    }
}

impl<S: ProcessSpawner> ShortcutLauncher<S> {
    /// Create a launcher with a custom spawner.
    pub fn with_spawner(config: LaunchConfig, spawner: S) -> Self {
        Self {
            config,
            spawner,
            home_resolver: platform::home_dir,
            sleeper: std::thread::sleep,
        }
    }

    /// Replace the home directory lookup used when no desktop dir is configured.
    pub fn with_home_resolver(mut self, home_resolver: HomeResolver) -> Self {
        self.home_resolver = home_resolver;
        self
    }

    /// Replace how the startup delay and launch interval are waited out.
    pub fn with_sleeper(mut self, sleeper: Sleeper) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Run through every configured shortcut.
    ///
    /// Returns `Err` only when the shortcut directory cannot be determined,
    /// in which case nothing is launched. Per-shortcut failures are logged
    /// and collected in the report.
    pub fn run(&self) -> Result<LaunchReport> {
        info!("Starting {}...", crate::config::LauncherConfig::APP_NAME);
        self.pause(self.config.startup_delay);

        let desktop_dir = match &self.config.desktop_dir {
            Some(dir) => dir.clone(),
            None => platform::desktop_dir_in(&(self.home_resolver)()?),
        };
        debug!("Reading shortcuts from {}", desktop_dir.display());

        let mut report = LaunchReport::default();
        for shortcut in &self.config.shortcuts {
            let outcome = self.launch_one(&desktop_dir, shortcut);
            report.outcomes.push(outcome);
        }

        info!(
            "All shortcuts processed: {} launched, {} failed",
            report.launched_count(),
            report.failures().count()
        );
        Ok(report)
    }

    /// Resolve, parse, tokenize and spawn a single shortcut.
    pub fn launch_one(&self, desktop_dir: &Path, shortcut: &str) -> ShortcutOutcome {
        let path = platform::shortcut_path(desktop_dir, shortcut);
        info!("Processing {}...", shortcut);

        let (command, status) = self.launch_path(&path, shortcut);
        ShortcutOutcome {
            shortcut: shortcut.to_string(),
            path,
            command,
            status,
        }
    }

    fn launch_path(&self, path: &Path, shortcut: &str) -> (Option<String>, LaunchStatus) {
        let command = match read_exec_command(path) {
            Ok(command) => command,
            Err(e) => {
                error!("Error extracting command from {}: {}", shortcut, e);
                return (None, LaunchStatus::Failed { error: e });
            }
        };
        info!("Found command: {}", command);

        let tokens = match CommandTokens::parse(&command) {
            Ok(tokens) => tokens,
            Err(e) => {
                error!("Error parsing command from {}: {}", shortcut, e);
                return (Some(command), LaunchStatus::Failed { error: e });
            }
        };

        if self.config.dry_run {
            info!(
                "Dry run: would launch {} with args {:?}",
                tokens.program(),
                tokens.args()
            );
            return (Some(command), LaunchStatus::DryRun);
        }

        let status = match self.spawner.spawn(&tokens) {
            Ok(pid) => {
                info!("Successfully launched {} (PID {})", shortcut, pid);
                LaunchStatus::Launched { pid }
            }
            Err(e) => {
                error!("Error launching {}: {}", shortcut, e);
                LaunchStatus::Failed { error: e }
            }
        };

        self.pause(self.config.launch_interval);
        (Some(command), status)
    }

    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            (self.sleeper)(duration);
        }
    }
}
