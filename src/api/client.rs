// src/api/client.rs
//! Thin reqwest wrappers for the library index and the paste host.
//!
//! These clients only move bytes: they send the request and capture the
//! body, status and URL. Interpreting the body is left to `parser`.

use super::parser::{parse_library_index, parse_paste_response};
use super::{LibraryIndex, PasteHost};
use crate::constants::PASTE_FORM_FIELD;
use crate::error::AppError;
use crate::model::LibraryEntry;
use crate::types::ValidatedUrl;
use reqwest::{header, multipart, Client, Response};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by both services.
pub fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()?)
}

/// Client for the cdnjs library index.
#[derive(Clone)]
pub struct CdnjsClient {
    client: Client,
    url: ValidatedUrl,
}

impl CdnjsClient {
    pub fn new(client: Client, url: ValidatedUrl) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &ValidatedUrl {
        &self.url
    }

    /// Fetches the raw index body.
    pub async fn get(&self) -> Result<ApiResponse<String>, AppError> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(self.url.as_str()).send().await?;
        log::debug!("Library index responded {}", response.status());
        extract_response_text(response).await
    }
}

#[async_trait::async_trait]
impl LibraryIndex for CdnjsClient {
    async fn fetch_libraries(&self) -> Result<Vec<LibraryEntry>, AppError> {
        let result = self.get().await?;
        parse_library_index(result)
    }
}

/// Client for the paste host the pen definition is uploaded to.
#[derive(Clone)]
pub struct PasteClient {
    client: Client,
    url: ValidatedUrl,
}

impl PasteClient {
    pub fn new(client: Client, url: ValidatedUrl) -> Self {
        Self { client, url }
    }

    /// Posts `text` as a multipart form field.
    pub async fn post(&self, text: &str) -> Result<ApiResponse<String>, AppError> {
        log::debug!("POST {} ({} bytes)", self.url, text.len());
        let form = multipart::Form::new().text(PASTE_FORM_FIELD, text.to_string());
        let response = self
            .client
            .post(self.url.as_str())
            .multipart(form)
            .send()
            .await?;
        log::debug!("Paste host responded {}", response.status());
        extract_response_text(response).await
    }
}

#[async_trait::async_trait]
impl PasteHost for PasteClient {
    async fn upload(&self, text: &str) -> Result<String, AppError> {
        let result = self.post(text).await?;
        parse_paste_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
