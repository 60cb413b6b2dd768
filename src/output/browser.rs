// src/output/browser.rs
//! Opens URLs with the platform's default handler.

use crate::error::AppError;
use std::process::{Command, Stdio};

#[cfg(target_os = "linux")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    // The empty argument is the window title `start` expects before the target.
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

/// Opens `url` in the default browser.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub fn open_in_browser(url: &str) -> Result<(), AppError> {
    log::debug!("Opening {} in browser", url);

    let status = opener(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| AppError::Browser(format!("Failed to launch browser: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Browser(format!("Browser launcher exited with {}", status)))
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn open_in_browser(_url: &str) -> Result<(), AppError> {
    Err(AppError::Browser(
        "Opening a browser is not supported on this platform".to_string(),
    ))
}
