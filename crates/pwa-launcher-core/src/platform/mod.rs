//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here:
//! - `paths` - home and desktop directory resolution
//! - `process` - detaching spawned processes

pub mod paths;
pub mod process;

pub use paths::{desktop_dir, desktop_dir_in, home_dir, shortcut_path};
pub use process::detach;
