//! Process launching module.
//!
//! Walks the configured shortcut list in order and starts each command as a
//! detached process. One shortcut failing never affects the others.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwa_launcher_core::config::LaunchConfig;
//! use pwa_launcher_core::process::ShortcutLauncher;
//!
//! fn main() -> pwa_launcher_core::Result<()> {
//!     let launcher = ShortcutLauncher::new(LaunchConfig::new());
//!     let report = launcher.run()?;
//!     for failed in report.failures() {
//!         eprintln!("{} failed", failed.shortcut);
//!     }
//!     Ok(())
//! }
//! ```

mod launcher;

pub use launcher::{
    DetachedSpawner, HomeResolver, LaunchReport, LaunchStatus, ProcessSpawner, ShortcutLauncher,
    ShortcutOutcome, Sleeper,
};
