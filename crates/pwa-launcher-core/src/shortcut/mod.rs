//! Desktop shortcut reading.
//!
//! Turns a `.desktop` file into something that can be spawned:
//! - `desktop_entry` finds the `Exec=` line and removes field codes
//! - `command` splits the command into program and arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use pwa_launcher_core::shortcut::{read_exec_command, CommandTokens};
//! use std::path::Path;
//!
//! fn main() -> pwa_launcher_core::Result<()> {
//!     let command = read_exec_command(Path::new("/home/me/Desktop/notion.desktop"))?;
//!     let tokens = CommandTokens::parse(&command)?;
//!     println!("{} {:?}", tokens.program(), tokens.args());
//!     Ok(())
//! }
//! ```

mod command;
mod desktop_entry;

pub use command::{tokenize, CommandTokens};
pub use desktop_entry::{
    exec_from_reader, read_exec_command, strip_field_codes, EXEC_PREFIX, FIELD_CODES,
};
