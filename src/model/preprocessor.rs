// src/model/preprocessor.rs
//! Preprocessor tags understood by the pen viewer.
//!
//! Each role has its own closed vocabulary, so a stylesheet can never be
//! tagged `typescript`. The tag is derived from the file extension alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

fn extension_of(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension().and_then(|e| e.to_str())
}

/// Markup preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupProcessor {
    Pug,
    #[default]
    None,
}

impl MarkupProcessor {
    pub fn from_file_name(file_name: &str) -> Self {
        match extension_of(file_name) {
            Some("pug") => Self::Pug,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pug => "pug",
            Self::None => "none",
        }
    }
}

/// Script preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptProcessor {
    Babel,
    TypeScript,
    #[default]
    None,
}

impl ScriptProcessor {
    pub fn from_file_name(file_name: &str) -> Self {
        match extension_of(file_name) {
            Some("babel") | Some("jsx") => Self::Babel,
            Some("ts") | Some("tsx") => Self::TypeScript,
            _ => Self::None,
        }
    }

    /// A swing that depends on React is written in JSX, whatever its
    /// extension says. Explicit processors are left alone.
    pub fn with_react(self) -> Self {
        match self {
            Self::None => Self::Babel,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::TypeScript => "typescript",
            Self::None => "none",
        }
    }
}

/// Stylesheet preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProcessor {
    Scss,
    Sass,
    Less,
    #[default]
    None,
}

impl StyleProcessor {
    pub fn from_file_name(file_name: &str) -> Self {
        match extension_of(file_name) {
            Some("scss") => Self::Scss,
            Some("sass") => Self::Sass,
            Some("less") => Self::Less,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Less => "less",
            Self::None => "none",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(MarkupProcessor, ScriptProcessor, StyleProcessor);
