// src/config.rs
use crate::constants::{
    DEFAULT_INDEX_CACHE_TTL_SECS, DEFAULT_LIBRARY_INDEX_URL, DEFAULT_PASTE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_VIEWER_URL,
};
use crate::error::AppError;
use crate::types::{ValidatedUrl, ValidationError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// The longest request timeout accepted on the command line.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Swing directory to export (defaults to the current directory)
    #[arg(default_value = ".")]
    pub swing_dir: PathBuf,

    /// Copy the viewer URL to the clipboard
    #[arg(short = 'b', long, default_value_t = false)]
    pub clipboard: bool,

    /// Do not open the viewer URL in the browser
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Pipe mode - print only the viewer URL to stdout
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Print the assembled pen definition as JSON and stop before uploading
    #[arg(long, default_value_t = false)]
    pub print_definition: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Page that opens an uploaded pen definition
    #[arg(long, default_value = DEFAULT_VIEWER_URL)]
    pub viewer_url: String,

    /// Paste host the pen definition is uploaded to
    #[arg(long, default_value = DEFAULT_PASTE_URL)]
    pub paste_url: String,

    /// Library index used to resolve manifest library names
    #[arg(long, default_value = DEFAULT_LIBRARY_INDEX_URL)]
    pub library_index_url: String,

    /// Cache the library index on disk
    #[arg(long, default_value_t = false)]
    pub cache: bool,

    /// Library index cache TTL in seconds (default: 86400 = 1 day)
    #[arg(long, default_value_t = DEFAULT_INDEX_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Resolved export configuration, validated and ready to drive the export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub swing_dir: PathBuf,
    pub viewer_url: ValidatedUrl,
    pub paste_url: ValidatedUrl,
    pub library_index_url: ValidatedUrl,
    pub clipboard: bool,
    pub open_browser: bool,
    pub pipe: bool,
    pub print_definition: bool,
    pub verbose: bool,
    pub cache: bool,
    pub cache_ttl: u64,
    pub timeout: Duration,
}

impl ExportConfig {
    /// Resolves a complete export configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.timeout == 0 || cli.timeout > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::OutOfBounds {
                value: cli.timeout,
                min: 1,
                max: MAX_REQUEST_TIMEOUT_SECS,
            }
            .into());
        }

        Ok(ExportConfig {
            swing_dir: cli.swing_dir,
            viewer_url: ValidatedUrl::parse(&cli.viewer_url)?,
            paste_url: ValidatedUrl::parse(&cli.paste_url)?,
            library_index_url: ValidatedUrl::parse(&cli.library_index_url)?,
            clipboard: cli.clipboard,
            open_browser: !cli.no_open && !cli.pipe,
            pipe: cli.pipe,
            print_definition: cli.print_definition,
            verbose: cli.verbose,
            cache: cli.cache,
            cache_ttl: cli.cache_ttl,
            timeout: Duration::from_secs(cli.timeout),
        })
    }
}
