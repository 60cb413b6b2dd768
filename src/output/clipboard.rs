// src/output/clipboard.rs
//! Copies the viewer URL to the system clipboard.
//!
//! arboard handles the common case. Headless sessions and some Wayland
//! compositors reject it, so a clipboard CLI is tried as a fallback.

use crate::error::AppError;
use std::io::Write;
use std::process::{Command, Stdio};

/// An external program that reads clipboard content from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

const WL_COPY: ClipboardTool = ClipboardTool {
    program: "wl-copy",
    args: &[],
};
const XCLIP: ClipboardTool = ClipboardTool {
    program: "xclip",
    args: &["-selection", "clipboard"],
};
const PBCOPY: ClipboardTool = ClipboardTool {
    program: "pbcopy",
    args: &[],
};
const CLIP_EXE: ClipboardTool = ClipboardTool {
    program: "clip",
    args: &[],
};

pub fn copy_to_clipboard(url: &str) -> Result<(), AppError> {
    let arboard_error = match set_with_arboard(url) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    let Some(tool) = fallback_tool() else {
        return Err(arboard_error);
    };
    log::debug!("arboard unavailable ({}); falling back to {}", arboard_error, tool.program);

    tool.copy(url).inspect_err(|e| log::error!("Clipboard copy failed: {}", e))
}

fn set_with_arboard(text: &str) -> Result<(), AppError> {
    arboard::Clipboard::new()?.set_text(text)?;
    Ok(())
}

fn fallback_tool() -> Option<ClipboardTool> {
    if cfg!(target_os = "macos") {
        Some(PBCOPY)
    } else if cfg!(target_os = "windows") {
        Some(CLIP_EXE)
    } else if cfg!(target_os = "linux") {
        Some(linux_tool(is_wayland_session()))
    } else {
        None
    }
}

fn is_wayland_session() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland")
}

fn linux_tool(wayland: bool) -> ClipboardTool {
    if wayland {
        WL_COPY
    } else {
        XCLIP
    }
}

impl ClipboardTool {
    /// Feeds `text` to the tool and waits for it to exit.
    fn copy(&self, text: &str) -> Result<(), AppError> {
        let fail = |what: &str, detail: &dyn std::fmt::Display| {
            AppError::Clipboard(format!("{} {}: {}", self.program, what, detail))
        };

        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| fail("could not start", &e))?;

        // Dropping stdin closes the pipe so the tool sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| fail("rejected input", &e))?;
        }

        let output = child.wait_with_output().map_err(|e| fail("did not finish", &e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(fail("exited with an error", &stderr.trim()));
        }
        Ok(())
    }
}
