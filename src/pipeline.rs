// src/pipeline.rs
//! Pipeline capability traits: the two stages of a swing export.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::PenDefinition;
use crate::swing::SwingDirectory;
use crate::types::ViewerUrl;

/// Assembles a pen definition from a swing directory.
#[async_trait::async_trait]
pub trait PenComposer {
    async fn compose(&self, swing: &SwingDirectory) -> Result<PenDefinition, AppError>;
}

/// Hosts a pen definition and returns the address that opens it.
#[async_trait::async_trait]
pub trait PenPublisher {
    async fn publish(&self, pen: &PenDefinition) -> Result<ViewerUrl, AppError>;
}
