// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names the stage of the export that failed. Only the
//! manifest error is raised deliberately; network and service failures are
//! surfaced to the caller unchanged.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("The swing's manifest file appears to be invalid. Please check it and try again.")]
    ManifestParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Paste host returned {status}: {body}")]
    PasteService {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Library index returned {status}")]
    LibraryIndex { status: reqwest::StatusCode },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Could not open browser: {0}")]
    Browser(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Builds a paste failure, truncating long bodies (HTML error pages).
    pub fn paste_service(status: reqwest::StatusCode, body: &str) -> Self {
        AppError::PasteService {
            status,
            body: preview(body),
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_PREVIEW_LENGTH {
        return body.to_string();
    }
    let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
    format!("{}…", truncated)
}
