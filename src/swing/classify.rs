// src/swing/classify.rs
//! Picks the file that plays each role in a swing.
//!
//! A role is a set of base names and extensions. Candidates are tried
//! base-name first, then by extension; the first one present wins.

use std::fmt;

/// The role a file plays in a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingFileType {
    Markup,
    Script,
    Stylesheet,
}

impl SwingFileType {
    pub const ALL: [SwingFileType; 3] = [Self::Markup, Self::Script, Self::Stylesheet];

    fn base_names(&self) -> &'static [&'static str] {
        match self {
            Self::Markup => &["index", "App", "main"],
            Self::Script => &["App", "index", "main", "script"],
            Self::Stylesheet => &["App", "index", "main", "style"],
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Markup => &[".html", ".markdown", ".md", ".pug", ".vue"],
            Self::Script => &[".babel", ".js", ".jsx", ".mjs", ".ts", ".tsx"],
            Self::Stylesheet => &[".css", ".less", ".sass", ".scss"],
        }
    }

    /// Candidate file names in the order they are tried.
    pub fn candidates(&self) -> impl Iterator<Item = String> + '_ {
        self.base_names().iter().flat_map(move |base| {
            self.extensions()
                .iter()
                .map(move |extension| format!("{}{}", base, extension))
        })
    }
}

impl fmt::Display for SwingFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "markup"),
            Self::Script => write!(f, "script"),
            Self::Stylesheet => write!(f, "stylesheet"),
        }
    }
}

/// Returns the listed file playing `role`, or `None` if the swing lacks one.
pub fn file_of_type(files: &[String], role: SwingFileType) -> Option<&str> {
    role.candidates().find_map(|candidate| {
        files
            .iter()
            .find(|file| **file == candidate)
            .map(String::as_str)
    })
}
