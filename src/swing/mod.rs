// src/swing/mod.rs
//! A swing on disk: its directory, its file listing, and the roles those
//! files play in the exported pen.

mod classify;
mod resources;

pub use classify::{file_of_type, SwingFileType};
pub use resources::{scan_script_urls, scan_style_urls};

use crate::error::AppError;
use crate::types::ValidationError;
use std::path::{Path, PathBuf};

/// A loaded swing directory.
///
/// The listing is taken once at load time; file contents are read on demand.
#[derive(Debug, Clone)]
pub struct SwingDirectory {
    root: PathBuf,
    name: String,
    files: Vec<String>,
}

impl SwingDirectory {
    /// Lists the regular files directly inside `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = tokio::fs::canonicalize(path.as_ref()).await?;
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ValidationError::InvalidSwingDirectory {
                path: root.display().to_string(),
                reason: "directory has no usable name".to_string(),
            })?;

        let metadata = tokio::fs::metadata(&root).await?;
        if !metadata.is_dir() {
            return Err(ValidationError::InvalidSwingDirectory {
                path: root.display().to_string(),
                reason: "not a directory".to_string(),
            }
            .into());
        }

        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(file_name) => files.push(file_name),
                Err(raw) => log::debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }
        files.sort();

        log::debug!("Loaded swing '{}' with {} files", name, files.len());
        Ok(Self { root, name, files })
    }

    /// The directory name, used as the pen's title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    /// The file playing `role`, if the swing has one.
    pub fn file_of_type(&self, role: SwingFileType) -> Option<&str> {
        file_of_type(&self.files, role)
    }

    /// Reads a listed file as text. Invalid UTF-8 is replaced rather than
    /// failing the export.
    pub async fn read(&self, file_name: &str) -> Result<String, AppError> {
        let bytes = tokio::fs::read(self.root.join(file_name)).await?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                log::warn!("{} is not valid UTF-8; decoding lossily", file_name);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Reads a file if the listing contains it.
    pub async fn read_if_present(&self, file_name: &str) -> Result<Option<String>, AppError> {
        if !self.contains(file_name) {
            return Ok(None);
        }
        self.read(file_name).await.map(Some)
    }
}
