// File: crates/sortplot/src/display.rs
// Summary: Best-effort launch of the platform image viewer, with headless detection.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("no display available")]
    Unavailable,
    #[error("failed to launch viewer '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Open `path` in the platform image viewer without waiting for it.
/// Callers treat any error here as a reason to keep going, not to fail.
pub fn show_image(path: &Path) -> Result<(), DisplayError> {
    if !display_available() {
        return Err(DisplayError::Unavailable);
    }
    let mut command = viewer_command(path);
    command.stdout(Stdio::null()).stderr(Stdio::null());
    let program = command.get_program().to_string_lossy().into_owned();
    command.spawn().map_err(|e| DisplayError::Spawn {
        command: program,
        source: e,
    })?;
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(any(target_os = "macos", windows))]
fn display_available() -> bool {
    true
}

#[cfg(all(unix, not(target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut c = Command::new("xdg-open");
    c.arg(path);
    c
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut c = Command::new("open");
    c.arg(path);
    c
}

#[cfg(windows)]
fn viewer_command(path: &Path) -> Command {
    let mut c = Command::new("cmd");
    // Empty first argument is the window title slot of `start`.
    c.args(["/C", "start", ""]).arg(path);
    c
}

#[cfg(all(unix, not(target_os = "macos")))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_reports_unavailable() {
        // Only meaningful when the test environment itself has no display.
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            let err = show_image(Path::new("nonexistent.png")).unwrap_err();
            assert!(matches!(err, DisplayError::Unavailable));
        }
    }
}
