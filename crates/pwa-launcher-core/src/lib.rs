//! PWA Launcher Core - reads desktop shortcuts and starts them at login.
//!
//! For each configured `.desktop` file the launcher extracts the `Exec=`
//! command, strips desktop entry field codes, splits it into program and
//! arguments, and spawns it as a detached process. Shortcuts are handled
//! strictly in order, one at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwa_launcher_core::{LaunchConfig, ShortcutLauncher};
//! use std::time::Duration;
//!
//! fn main() -> pwa_launcher_core::Result<()> {
//!     let config = LaunchConfig::new()
//!         .with_shortcuts(["github.desktop", "notion.desktop"])
//!         .with_startup_delay(Duration::ZERO);
//!
//!     let report = ShortcutLauncher::new(config).run()?;
//!     println!("Launched {} shortcuts", report.launched_count());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod process;
pub mod shortcut;

// Re-export commonly used types
pub use config::{LaunchConfig, LauncherConfig};
pub use error::{LauncherError, Result};
pub use process::{
    DetachedSpawner, HomeResolver, LaunchReport, LaunchStatus, ProcessSpawner, ShortcutLauncher,
    ShortcutOutcome, Sleeper,
};
pub use shortcut::{read_exec_command, strip_field_codes, tokenize, CommandTokens};
