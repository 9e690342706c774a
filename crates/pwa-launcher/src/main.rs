//! PWA Launcher - starts desktop shortcuts when the session comes up.
//!
//! Meant to be run from the desktop environment's autostart. Progress is
//! logged to stdout; the process exits 0 even when individual shortcuts fail
//! unless `--strict` is given.

use anyhow::Result;
use clap::Parser;
use pwa_launcher_core::{LaunchConfig, LaunchReport, LauncherConfig, ShortcutLauncher};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pwa-launcher")]
#[command(about = "Launch desktop shortcuts as detached processes at login")]
struct Args {
    /// Shortcut files to launch, in order (defaults to the built-in list)
    shortcuts: Vec<String>,

    /// Directory containing the shortcuts (defaults to ~/Desktop)
    #[arg(long)]
    desktop_dir: Option<PathBuf>,

    /// Delay before the first launch, in milliseconds
    #[arg(long, default_value_t = LauncherConfig::STARTUP_DELAY.as_millis() as u64)]
    startup_delay_ms: u64,

    /// Delay after each launch, in milliseconds
    #[arg(long, default_value_t = LauncherConfig::LAUNCH_INTERVAL.as_millis() as u64)]
    launch_interval_ms: u64,

    /// Parse shortcuts and log commands without starting anything
    #[arg(long)]
    dry_run: bool,

    /// Exit with a non-zero status if any shortcut failed
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn launch_config(&self) -> LaunchConfig {
        let mut config = LaunchConfig::new()
            .with_startup_delay(Duration::from_millis(self.startup_delay_ms))
            .with_launch_interval(Duration::from_millis(self.launch_interval_ms))
            .with_dry_run(self.dry_run);

        if !self.shortcuts.is_empty() {
            config = config.with_shortcuts(self.shortcuts.iter().cloned());
        }
        if let Some(ref dir) = self.desktop_dir {
            config = config.with_desktop_dir(dir);
        }
        config
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging; RUST_LOG takes precedence over --debug
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(std::io::stdout().is_terminal())
        .compact()
        .init();

    let launcher = ShortcutLauncher::new(args.launch_config());
    finish(launcher.run(), args.strict)
}

/// Map a run result to the process exit code, logging anything that failed.
fn finish(result: pwa_launcher_core::Result<LaunchReport>, strict: bool) -> Result<ExitCode> {
    let report = match result {
        Ok(report) => report,
        Err(e) if e.is_fatal() => {
            error!("Error getting home directory: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if strict && report.has_failures() {
        for failed in report.failures() {
            if let Some(e) = failed.error() {
                error!("{} failed: {}", failed.shortcut, e);
            }
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
