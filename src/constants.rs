// src/constants.rs
//! Domain constants that define the operational boundaries of the exporter.
//!
//! Each constant is named for the domain concept it describes. Reading these
//! constants should tell you where a swing comes from and where its pen goes:
//! which files make it up, which services it is published through.

// ---------------------------------------------------------------------------
// Swing layout
// ---------------------------------------------------------------------------

/// Name of the optional manifest declaring library dependencies.
pub const SWING_MANIFEST_FILE: &str = "codeswing.json";

/// Raw list of `<script src>` tags to include as external scripts.
pub const SCRIPTS_LIST_FILE: &str = "scripts";

/// Raw list of `<link rel="stylesheet">` tags to include as external styles.
pub const STYLES_LIST_FILE: &str = "styles";

/// The single tag attached to every exported pen.
pub const PEN_TAG: &str = "codeswing";

/// Library name that implies JSX in the script file.
pub const REACT_LIBRARY: &str = "react";

/// Separator between URLs in `js_external` / `css_external`.
pub const EXTERNAL_RESOURCE_SEPARATOR: &str = ";";

// ---------------------------------------------------------------------------
// External services
// ---------------------------------------------------------------------------

/// Page that loads a pen definition from its `pen` query parameter and
/// forwards it to CodePen.
pub const DEFAULT_VIEWER_URL: &str = "https://codespaces-contrib.github.io/codeswing/codepen.html";

/// Paste host the definition is uploaded to. Uploads expire after one download.
pub const DEFAULT_PASTE_URL: &str = "https://file.io/?expires=1";

/// CDN library index used to resolve bare library names.
pub const DEFAULT_LIBRARY_INDEX_URL: &str = "https://api.cdnjs.com/libraries";

/// Form field carrying the serialized pen definition.
pub const PASTE_FORM_FIELD: &str = "text";

/// Query parameter the viewer reads the definition reference from.
pub const VIEWER_QUERY_PARAM: &str = "pen";

// ---------------------------------------------------------------------------
// Network and cache boundaries
// ---------------------------------------------------------------------------

/// Default per-request timeout for the paste host and library index.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default lifetime of a cached library index. The cdnjs index changes
/// slowly; a day keeps exports fast without serving stale versions for long.
pub const DEFAULT_INDEX_CACHE_TTL_SECS: u64 = 86_400;

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
