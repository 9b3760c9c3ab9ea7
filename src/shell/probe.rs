//! `PATH` probing for external tools.

use std::process::{Command, Stdio};

/// Check if a given command exists on the system.
///
/// Runs `command -v` in a POSIX shell. The name is passed as a positional
/// argument so it is never interpreted as shell syntax. Any failure to run
/// the probe itself is reported as "not found".
///
/// # Example
///
/// ```
/// use blt_inspector::shell::command_exists;
///
/// assert!(command_exists("sh"));
/// assert!(!command_exists("definitely-not-a-real-binary-xyz"));
/// ```
pub fn command_exists(command: &str) -> bool {
    if command.trim().is_empty() {
        return false;
    }

    let exists = Command::new("/bin/sh")
        .arg("-c")
        .arg(r#"command -v "$1" >/dev/null 2>&1"#)
        .arg("sh")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    tracing::debug!("command -v {} -> {}", command, exists);
    exists
}
