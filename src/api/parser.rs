// src/api/parser.rs
//! Turns raw service responses into domain values.
//!
//! Parsers are pure: they take the body text and status captured by the
//! client, so cached bodies go through exactly the same path as live ones.

use super::client::ApiResponse;
use super::responses::{LibraryIndexResponse, PasteResponse};
use crate::error::AppError;
use crate::model::LibraryEntry;

/// Parses the cdnjs library index.
pub fn parse_library_index(result: ApiResponse<String>) -> Result<Vec<LibraryEntry>, AppError> {
    if !result.status.is_success() {
        return Err(AppError::LibraryIndex {
            status: result.status,
        });
    }

    let index: LibraryIndexResponse = serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse library index from {}: {}", result.url, e);
        AppError::MalformedResponse(format!("library index: {}", e))
    })?;

    log::debug!("Library index lists {} libraries", index.results.len());
    Ok(index.results)
}

/// Extracts the document link from a paste host response.
pub fn parse_paste_response(result: ApiResponse<String>) -> Result<String, AppError> {
    if !result.status.is_success() {
        return Err(AppError::paste_service(result.status, &result.data));
    }

    let paste: PasteResponse = serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse paste response from {}: {}", result.url, e);
        AppError::MalformedResponse(format!("paste response: {}", e))
    })?;

    if paste.success == Some(false) {
        return Err(AppError::paste_service(
            result.status,
            paste.message.as_deref().unwrap_or("upload rejected"),
        ));
    }

    match paste.link {
        Some(link) if !link.trim().is_empty() => Ok(link),
        _ => Err(AppError::MalformedResponse(
            "paste response has no link".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://service.test/".to_string(),
        }
    }

    #[test]
    fn test_library_index() {
        let body = r#"{"results": [
            {"name": "jquery", "latest": "https://cdnjs.cloudflare.com/ajax/libs/jquery/3.7.1/jquery.min.js"},
            {"name": "ghost", "latest": null}
        ], "total": 2}"#;

        let entries = parse_library_index(response(StatusCode::OK, body)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "jquery");
        assert_eq!(entries[1].latest, None);
    }

    #[test]
    fn test_library_index_error_status() {
        let err = parse_library_index(response(StatusCode::SERVICE_UNAVAILABLE, "")).unwrap_err();
        assert!(matches!(err, AppError::LibraryIndex { status } if status == StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn test_paste_link() {
        let body = r#"{"success": true, "key": "abc", "link": "https://file.io/abc", "expiry": "1 download"}"#;
        assert_eq!(
            parse_paste_response(response(StatusCode::OK, body)).unwrap(),
            "https://file.io/abc"
        );
    }

    #[test]
    fn test_paste_without_link() {
        let err = parse_paste_response(response(StatusCode::OK, r#"{"success": true}"#)).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_paste_rejected() {
        let body = r#"{"success": false, "message": "quota exceeded"}"#;
        let err = parse_paste_response(response(StatusCode::OK, body)).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_paste_http_error() {
        let err = parse_paste_response(response(StatusCode::BAD_GATEWAY, "<html>down</html>")).unwrap_err();
        assert!(matches!(err, AppError::PasteService { .. }));
    }
}
