// src/api/responses.rs
//! Wire shapes of the two services' JSON responses.

use crate::model::LibraryEntry;
use serde::Deserialize;

/// `GET /libraries` on cdnjs.
#[derive(Debug, Deserialize)]
pub(super) struct LibraryIndexResponse {
    #[serde(default)]
    pub results: Vec<LibraryEntry>,
}

/// Body returned by the paste host after an upload.
#[derive(Debug, Deserialize)]
pub(super) struct PasteResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
