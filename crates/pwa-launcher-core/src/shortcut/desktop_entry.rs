//! Desktop entry (.desktop file) reading.
//!
//! Only the `Exec` key is consulted. Everything else in the file, including
//! group headers and its encoding, is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LauncherError, Result};
use tracing::debug;

/// Prefix of the line that declares the launch command.
pub const EXEC_PREFIX: &str = "Exec=";

/// Desktop entry field codes removed from `Exec` values, in removal order.
pub const FIELD_CODES: &[&str] = &[
    "%f", "%F", "%u", "%U", "%d", "%D", "%n", "%N", "%i", "%c", "%k", "%v", "%m",
];

/// Remove every field code from `exec` and trim the result.
///
/// Removal is plain substring replacement, so `cmd%fmore` becomes `cmdmore`.
pub fn strip_field_codes(exec: &str) -> String {
    let mut result = exec.to_string();
    for code in FIELD_CODES {
        if result.contains(code) {
            result = result.replace(code, "");
        }
    }
    result.trim().to_string()
}

/// Extract the launch command from desktop entry content.
///
/// Returns the first line starting exactly with `Exec=` (no leading
/// whitespace, case-sensitive), with the prefix and field codes removed.
/// `path` is only used for error context.
pub fn exec_from_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<String> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| LauncherError::io_with_path(e, path))?;
        if read == 0 {
            break;
        }

        let Some(value) = line.strip_prefix(EXEC_PREFIX.as_bytes()) else {
            continue;
        };
        let value = value.strip_suffix(b"\n").unwrap_or(value);
        let value = value.strip_suffix(b"\r").unwrap_or(value);

        let command = strip_field_codes(&String::from_utf8_lossy(value));
        debug!("Found Exec line in {:?}: {}", path, command);
        return Ok(command);
    }

    Err(LauncherError::MissingExecLine {
        path: path.to_path_buf(),
    })
}

/// Read a desktop file and extract its launch command.
pub fn read_exec_command(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| LauncherError::io_with_path(e, path))?;
    exec_from_reader(BufReader::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<String> {
        exec_from_reader(content.as_bytes(), Path::new("test.desktop"))
    }

    #[test]
    fn test_extracts_exec_and_strips_field_codes() {
        let content = "[Desktop Entry]\n\
                       Name=Notion\n\
                       Exec=/opt/google/chrome/chrome --profile-directory=Default --app-id=abc %U\n\
                       Icon=notion\n";

        assert_eq!(
            parse(content).unwrap(),
            "/opt/google/chrome/chrome --profile-directory=Default --app-id=abc"
        );
    }

    #[test]
    fn test_first_exec_line_wins() {
        let content = "Exec=first\nExec=second\n";
        assert_eq!(parse(content).unwrap(), "first");
    }

    #[test]
    fn test_prefix_is_exact() {
        let content = " Exec=indented\nexec=lower\nTryExec=/bin/try\nExec =spaced\n";
        assert!(matches!(
            parse(content),
            Err(LauncherError::MissingExecLine { .. })
        ));
    }

    #[test]
    fn test_missing_exec_line() {
        let err = parse("[Desktop Entry]\nName=Nothing\n").unwrap_err();
        match err {
            LauncherError::MissingExecLine { path } => {
                assert_eq!(path, Path::new("test.desktop"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_content_is_missing_exec_line() {
        assert!(matches!(
            parse(""),
            Err(LauncherError::MissingExecLine { .. })
        ));
    }

    #[test]
    fn test_crlf_and_no_trailing_newline() {
        assert_eq!(parse("Name=x\r\nExec=/bin/app --flag\r\n").unwrap(), "/bin/app --flag");
        assert_eq!(parse("Exec=/bin/app").unwrap(), "/bin/app");
    }

    #[test]
    fn test_invalid_utf8_elsewhere_is_ignored() {
        let mut content = b"Name=\xff\xfe\n".to_vec();
        content.extend_from_slice(b"Exec=/bin/true\n");

        let command = exec_from_reader(content.as_slice(), Path::new("x.desktop")).unwrap();
        assert_eq!(command, "/bin/true");
    }

    #[test]
    fn test_field_codes_and_whitespace_strip_to_empty() {
        let fragments: Vec<&str> = FIELD_CODES.iter().copied().chain([" ", "\t"]).collect();

        for a in &fragments {
            for b in &fragments {
                for c in &fragments {
                    let input = format!("{a}{b}{c}");
                    assert_eq!(strip_field_codes(&input), "", "input {input:?}");
                }
            }
        }
        assert_eq!(strip_field_codes(&FIELD_CODES.join(" ")), "");
    }

    #[test]
    fn test_field_code_removed_mid_token() {
        assert_eq!(strip_field_codes("cmd%fmore"), "cmdmore");
        assert_eq!(strip_field_codes("app --url=%u/x"), "app --url=/x");
    }

    #[test]
    fn test_unknown_percent_sequences_are_kept() {
        assert_eq!(strip_field_codes("app 100%% %x"), "app 100%% %x");
    }

    #[test]
    fn test_read_exec_command_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github.desktop");
        fs::write(&path, "[Desktop Entry]\nExec=/usr/bin/env true %F\n").unwrap();

        assert_eq!(read_exec_command(&path).unwrap(), "/usr/bin/env true");
    }

    #[test]
    fn test_read_exec_command_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.desktop");

        match read_exec_command(&path).unwrap_err() {
            LauncherError::Io { path: err_path, .. } => assert_eq!(err_path, Some(path)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
