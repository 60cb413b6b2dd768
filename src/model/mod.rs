// src/model/mod.rs
//! Domain model: the pen definition being assembled, the swing manifest
//! that feeds it, and the library index entries used to resolve names.

mod preprocessor;

pub use preprocessor::{MarkupProcessor, ScriptProcessor, StyleProcessor};

use crate::constants::{PEN_TAG, REACT_LIBRARY};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// The JSON document the viewer turns into a pen.
///
/// Field names are the viewer's wire names. Absent parts of the swing are
/// omitted from the document rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenDefinition {
    pub title: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_pre_processor: Option<MarkupProcessor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_pre_processor: Option<StyleProcessor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_pre_processor: Option<ScriptProcessor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_external: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_external: Option<String>,

    pub tags: Vec<String>,
}

impl PenDefinition {
    /// Creates an empty pen titled after its swing.
    pub fn titled(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            description: title.clone(),
            title,
            html: None,
            html_pre_processor: None,
            css: None,
            css_pre_processor: None,
            js: None,
            js_pre_processor: None,
            css_external: None,
            js_external: None,
            tags: vec![PEN_TAG.to_string()],
        }
    }

    /// Serializes the definition to the compact JSON uploaded to the paste host.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The optional `codeswing.json` manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scripts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub styles: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Manifest {
    /// Parses manifest text. Any failure, syntactic or structural, is
    /// reported as [`AppError::ManifestParse`].
    pub fn parse(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|source| AppError::ManifestParse { source })
    }

    /// Whether the swing declares React among its scripts.
    pub fn uses_react(&self) -> bool {
        self.scripts.iter().any(|script| script == REACT_LIBRARY)
    }
}

/// One library in the CDN index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    #[serde(default)]
    pub latest: Option<String>,
}
