//! Platform-specific process detachment.
//!
//! Launched shortcuts must outlive the launcher and must not share its
//! session or console process group.

// Owns the `setsid` pre-exec hook.
#![allow(unsafe_code)]

use std::process::Command;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Configure `cmd` so the spawned process is detached from the launcher.
///
/// # Platform Behavior
/// - **Linux/macOS**: the child calls `setsid()` and becomes a session leader
/// - **Windows**: the child gets `CREATE_NEW_PROCESS_GROUP`
///
/// Stdio, environment and working directory are left as inherited.
pub fn detach(cmd: &mut Command) -> &mut Command {
    #[cfg(unix)]
    {
        // SAFETY: setsid() is async-signal-safe and touches no state shared
        // with the parent, so it may run between fork and exec.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }

    #[cfg(windows)]
    {
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x00000200;
        cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_detached_child_runs_in_new_session() {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", "exit 0"]);
        detach(&mut cmd);

        let status = cmd.status().unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_detach_keeps_program_and_args() {
        let mut cmd = Command::new("/bin/echo");
        cmd.arg("hello");
        detach(&mut cmd);

        assert_eq!(cmd.get_program(), "/bin/echo");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), vec!["hello"]);
    }
}
