// src/api/mod.rs
//! External services: the CDN library index and the paste host.
//!
//! Business logic depends on the traits here, never on HTTP details, so the
//! exporter can be driven by in-memory stand-ins in tests.

pub mod cache;
pub mod client;
pub mod libraries;
pub mod parser;
mod responses;
#[cfg(test)]
pub(crate) mod test_support;

use crate::error::AppError;
use crate::model::LibraryEntry;

/// The ability to list libraries hosted on a CDN.
#[async_trait::async_trait]
pub trait LibraryIndex: Send + Sync {
    async fn fetch_libraries(&self) -> Result<Vec<LibraryEntry>, AppError>;
}

/// The ability to host a text document and hand back a link to it.
#[async_trait::async_trait]
pub trait PasteHost: Send + Sync {
    /// Uploads `text` and returns the link the document can be fetched from.
    async fn upload(&self, text: &str) -> Result<String, AppError>;
}

// Re-export the public interface
pub use cache::CachedLibraryIndex;
pub use client::{CdnjsClient, PasteClient};
pub use libraries::resolve_libraries;
