// src/export.rs
//! Swing-to-pen export: assembles the pen definition from a swing
//! directory, uploads it, and builds the viewer URL.

use crate::api::{resolve_libraries, LibraryIndex, PasteHost};
use crate::constants::{
    EXTERNAL_RESOURCE_SEPARATOR, SCRIPTS_LIST_FILE, STYLES_LIST_FILE, SWING_MANIFEST_FILE,
};
use crate::error::AppError;
use crate::model::{Manifest, MarkupProcessor, PenDefinition, ScriptProcessor, StyleProcessor};
use crate::pipeline::{PenComposer, PenPublisher};
use crate::swing::{scan_script_urls, scan_style_urls, SwingDirectory, SwingFileType};
use crate::types::{ValidatedUrl, ViewerUrl};
use std::path::Path;
use std::sync::Arc;

/// Exports swings through a library index and a paste host.
pub struct SwingExporter {
    libraries: Arc<dyn LibraryIndex>,
    paste: Arc<dyn PasteHost>,
    viewer: ValidatedUrl,
}

impl SwingExporter {
    pub fn new(
        libraries: Arc<dyn LibraryIndex>,
        paste: Arc<dyn PasteHost>,
        viewer: ValidatedUrl,
    ) -> Self {
        Self {
            libraries,
            paste,
            viewer,
        }
    }

    /// Exports the swing at `directory` and returns its viewer URL.
    pub async fn export(&self, directory: impl AsRef<Path>) -> Result<ViewerUrl, AppError> {
        let swing = SwingDirectory::load(directory).await?;
        log::info!("Exporting swing '{}'", swing.name());

        let pen = self.compose(&swing).await?;
        self.publish(&pen).await
    }

    /// Scanned list URLs first, then resolved manifest libraries.
    async fn external_resources(
        &self,
        swing: &SwingDirectory,
        manifest: Option<&Manifest>,
    ) -> Result<(Vec<String>, Vec<String>), AppError> {
        let mut scripts = swing
            .read_if_present(SCRIPTS_LIST_FILE)
            .await?
            .map(|content| scan_script_urls(&content))
            .unwrap_or_default();
        let mut styles = swing
            .read_if_present(STYLES_LIST_FILE)
            .await?
            .map(|content| scan_style_urls(&content))
            .unwrap_or_default();

        if let Some(manifest) = manifest {
            if !manifest.scripts.is_empty() {
                scripts.extend(resolve_libraries(self.libraries.as_ref(), &manifest.scripts).await?);
            }
            if !manifest.styles.is_empty() {
                styles.extend(resolve_libraries(self.libraries.as_ref(), &manifest.styles).await?);
            }
        }

        Ok((scripts, styles))
    }
}

/// Reads and parses the manifest. An empty file counts as no manifest.
async fn read_manifest(swing: &SwingDirectory) -> Result<Option<Manifest>, AppError> {
    match swing.read_if_present(SWING_MANIFEST_FILE).await? {
        Some(content) if !content.is_empty() => Manifest::parse(&content).map(Some),
        _ => Ok(None),
    }
}

fn join_external(urls: &[String]) -> Option<String> {
    if urls.is_empty() {
        None
    } else {
        Some(urls.join(EXTERNAL_RESOURCE_SEPARATOR))
    }
}

#[async_trait::async_trait]
impl PenComposer for SwingExporter {
    async fn compose(&self, swing: &SwingDirectory) -> Result<PenDefinition, AppError> {
        let mut pen = PenDefinition::titled(swing.name());

        if let Some(file) = swing.file_of_type(SwingFileType::Markup) {
            log::debug!("markup: {}", file);
            pen.html = Some(swing.read(file).await?);
            pen.html_pre_processor = Some(MarkupProcessor::from_file_name(file));
        }

        if let Some(file) = swing.file_of_type(SwingFileType::Script) {
            log::debug!("script: {}", file);
            pen.js = Some(swing.read(file).await?);
            pen.js_pre_processor = Some(ScriptProcessor::from_file_name(file));
        }

        if let Some(file) = swing.file_of_type(SwingFileType::Stylesheet) {
            log::debug!("stylesheet: {}", file);
            pen.css = Some(swing.read(file).await?);
            pen.css_pre_processor = Some(StyleProcessor::from_file_name(file));
        }

        let manifest = read_manifest(swing).await?;
        if manifest.as_ref().is_some_and(Manifest::uses_react) {
            pen.js_pre_processor = pen.js_pre_processor.map(ScriptProcessor::with_react);
        }

        let (scripts, styles) = self.external_resources(swing, manifest.as_ref()).await?;
        log::debug!(
            "{} external scripts, {} external styles",
            scripts.len(),
            styles.len()
        );
        pen.js_external = join_external(&scripts);
        pen.css_external = join_external(&styles);

        Ok(pen)
    }
}

#[async_trait::async_trait]
impl PenPublisher for SwingExporter {
    async fn publish(&self, pen: &PenDefinition) -> Result<ViewerUrl, AppError> {
        let definition = pen.to_json()?;
        let link = self.paste.upload(&definition).await?;
        log::info!("Uploaded pen definition to {}", link);

        Ok(ViewerUrl::new(&self.viewer, &link)?)
    }
}
