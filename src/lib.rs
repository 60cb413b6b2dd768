// src/lib.rs
//! swing2pen library — exports a local code swing as a hosted CodePen definition.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `ExportConfig`
//! - **Domain model** — `PenDefinition`, `Manifest`, `LibraryEntry`, preprocessors
//! - **Swing** — `SwingDirectory`, `SwingFileType`, resource scanners
//! - **API client** — `LibraryIndex`, `PasteHost`, reqwest clients, `resolve_libraries`
//! - **Export** — `SwingExporter`
//! - **Output** — `OutputPlan`, `deliver`

pub mod api;
pub mod config;
pub mod constants;
mod error;
mod export;
pub mod model;
pub mod output;
mod pipeline;
pub mod swing;
mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig};

// --- Domain Model ---
pub use crate::model::{
    LibraryEntry, Manifest, MarkupProcessor, PenDefinition, ScriptProcessor, StyleProcessor,
};

// --- Domain Types ---
pub use crate::types::{is_resource_url, ValidatedUrl, ViewerUrl};

// --- Swing ---
pub use crate::swing::{file_of_type, scan_script_urls, scan_style_urls, SwingDirectory, SwingFileType};

// --- API Client ---
pub use crate::api::{
    resolve_libraries, CachedLibraryIndex, CdnjsClient, LibraryIndex, PasteClient, PasteHost,
};

// --- Export ---
pub use crate::export::SwingExporter;

// --- Pipeline Traits ---
pub use crate::pipeline::{PenComposer, PenPublisher};
