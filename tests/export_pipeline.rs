//! End-to-end export tests against in-memory services.
//!
//! Swings are written to temporary directories; the library index and the
//! paste host are stubs that record what they were asked for.

use pretty_assertions::assert_eq;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use swing2pen::{
    AppError, LibraryEntry, LibraryIndex, PasteHost, PenComposer, PenDefinition, SwingDirectory,
    SwingExporter, ValidatedUrl,
};
use tempfile::TempDir;

const VIEWER: &str = "https://viewer.test/codepen.html";

struct StubIndex {
    entries: Vec<LibraryEntry>,
    fetches: AtomicUsize,
}

#[async_trait::async_trait]
impl LibraryIndex for StubIndex {
    async fn fetch_libraries(&self) -> Result<Vec<LibraryEntry>, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
struct RecordingPaste {
    uploads: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl PasteHost for RecordingPaste {
    async fn upload(&self, text: &str) -> Result<String, AppError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(text.to_string());
        Ok(format!("https://paste.test/{}", uploads.len()))
    }
}

struct Harness {
    dir: TempDir,
    index: Arc<StubIndex>,
    paste: Arc<RecordingPaste>,
    exporter: SwingExporter,
}

impl Harness {
    fn new() -> Self {
        let index = Arc::new(StubIndex {
            entries: vec![
                LibraryEntry {
                    name: "react".to_string(),
                    latest: Some("https://cdnjs.test/react.js".to_string()),
                },
                LibraryEntry {
                    name: "bulma".to_string(),
                    latest: Some("https://cdnjs.test/bulma.css".to_string()),
                },
            ],
            fetches: AtomicUsize::new(0),
        });
        let paste = Arc::new(RecordingPaste::default());
        let exporter = SwingExporter::new(
            index.clone(),
            paste.clone(),
            ValidatedUrl::parse(VIEWER).unwrap(),
        );

        let parent = tempfile::tempdir().unwrap();
        std::fs::create_dir(parent.path().join("my-swing")).unwrap();

        Self {
            dir: parent,
            index,
            paste,
            exporter,
        }
    }

    fn root(&self) -> std::path::PathBuf {
        self.dir.path().join("my-swing")
    }

    fn write(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.root().join(name), content).unwrap();
        self
    }

    async fn compose(&self) -> Result<PenDefinition, AppError> {
        let swing = SwingDirectory::load(self.root()).await?;
        self.exporter.compose(&swing).await
    }

    fn uploads(&self) -> Vec<String> {
        self.paste.uploads.lock().unwrap().clone()
    }
}

fn pen_json(pen: &PenDefinition) -> serde_json::Value {
    serde_json::from_str(&pen.to_json().unwrap()).unwrap()
}

#[tokio::test]
async fn pug_markup_only() {
    let harness = Harness::new();
    harness.write("index.pug", "p hello");

    let pen = harness.compose().await.unwrap();

    assert_eq!(
        pen_json(&pen),
        serde_json::json!({
            "title": "my-swing",
            "description": "my-swing",
            "html": "p hello",
            "html_pre_processor": "pug",
            "tags": ["codeswing"],
        })
    );
}

#[tokio::test]
async fn preprocessors_from_extensions() {
    let harness = Harness::new();
    harness
        .write("index.html", "<div id=app></div>")
        .write("script.tsx", "const x: number = 1;")
        .write("style.scss", "$c: red; p { color: $c; }");

    let pen = harness.compose().await.unwrap();

    assert_eq!(pen.html.as_deref(), Some("<div id=app></div>"));
    assert_eq!(pen_json(&pen)["html_pre_processor"], "none");
    assert_eq!(pen_json(&pen)["js_pre_processor"], "typescript");
    assert_eq!(pen_json(&pen)["css_pre_processor"], "scss");
    assert_eq!(pen.js_external, None);
    assert_eq!(pen.css_external, None);
}

#[tokio::test]
async fn react_manifest_upgrades_plain_script_to_babel() {
    let harness = Harness::new();
    harness
        .write("script.js", "ReactDOM.render(<App />, root);")
        .write("codeswing.json", r#"{"scripts": ["react"]}"#);

    let pen = harness.compose().await.unwrap();

    assert_eq!(pen_json(&pen)["js_pre_processor"], "babel");
    assert_eq!(pen.js_external.as_deref(), Some("https://cdnjs.test/react.js"));
}

#[tokio::test]
async fn react_manifest_without_script_sets_no_script_fields() {
    let harness = Harness::new();
    harness
        .write("index.html", "<div></div>")
        .write("codeswing.json", r#"{"scripts": ["react"]}"#);

    let pen = harness.compose().await.unwrap();

    assert_eq!(pen.js, None);
    assert_eq!(pen.js_pre_processor, None);
    assert_eq!(pen.js_external.as_deref(), Some("https://cdnjs.test/react.js"));
}

#[tokio::test]
async fn react_manifest_keeps_typescript() {
    let harness = Harness::new();
    harness
        .write("App.tsx", "")
        .write("codeswing.json", r#"{"scripts": ["react"]}"#);

    let pen = harness.compose().await.unwrap();
    assert_eq!(pen_json(&pen)["js_pre_processor"], "typescript");
}

#[tokio::test]
async fn scripts_file_urls_in_document_order() {
    let harness = Harness::new();
    harness.write(
        "scripts",
        "<script src=\"https://unpkg.com/one.js\"></script>\n<script src=\"https://unpkg.com/two.js\"></script>\n",
    );

    let pen = harness.compose().await.unwrap();

    assert_eq!(
        pen.js_external.as_deref(),
        Some("https://unpkg.com/one.js;https://unpkg.com/two.js")
    );
    assert_eq!(harness.index.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn manifest_libraries_follow_scanned_urls() {
    let harness = Harness::new();
    harness
        .write(
            "styles",
            "<link href=\"https://cdn.test/reset.css\" rel=\"stylesheet\" />",
        )
        .write(
            "codeswing.json",
            r#"{"styles": ["bulma", "unknown-lib", "https://cdn.test/extra.css"]}"#,
        );

    let pen = harness.compose().await.unwrap();

    assert_eq!(
        pen.css_external.as_deref(),
        Some("https://cdn.test/reset.css;https://cdnjs.test/bulma.css;;https://cdn.test/extra.css")
    );
    assert_eq!(harness.index.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_manifest_is_ignored() {
    let harness = Harness::new();
    harness.write("script.js", "").write("codeswing.json", "");

    let pen = harness.compose().await.unwrap();
    assert_eq!(pen_json(&pen)["js_pre_processor"], "none");
}

#[tokio::test]
async fn invalid_manifest_aborts_before_upload() {
    let harness = Harness::new();
    harness
        .write("index.html", "<p></p>")
        .write("codeswing.json", "{ \"scripts\": [react ");

    let err = harness.exporter.export(harness.root()).await.unwrap_err();

    assert!(matches!(err, AppError::ManifestParse { .. }));
    assert_eq!(
        err.to_string(),
        "The swing's manifest file appears to be invalid. Please check it and try again."
    );
    assert!(harness.uploads().is_empty());
    assert_eq!(harness.index.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn export_uploads_definition_and_builds_viewer_url() {
    let harness = Harness::new();
    harness
        .write("index.html", "<h1>Hi</h1>")
        .write("style.css", "h1 { color: red }");

    let url = harness.exporter.export(harness.root()).await.unwrap();

    assert_eq!(
        url.as_str(),
        "https://viewer.test/codepen.html?pen=https%3A%2F%2Fpaste.test%2F1"
    );
    assert_eq!(url.pen_reference().as_deref(), Some("https://paste.test/1"));

    let uploads = harness.uploads();
    assert_eq!(uploads.len(), 1);
    let uploaded: serde_json::Value = serde_json::from_str(&uploads[0]).unwrap();
    assert_eq!(
        uploaded,
        serde_json::json!({
            "title": "my-swing",
            "description": "my-swing",
            "html": "<h1>Hi</h1>",
            "html_pre_processor": "none",
            "css": "h1 { color: red }",
            "css_pre_processor": "none",
            "tags": ["codeswing"],
        })
    );
}

#[tokio::test]
async fn missing_directory_is_io_error() {
    let harness = Harness::new();
    let err = harness
        .exporter
        .export(Path::new("/definitely/not/a/swing"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
