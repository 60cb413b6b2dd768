// src/api/libraries.rs
//! Resolves manifest library entries to resource URLs.

use super::LibraryIndex;
use crate::error::AppError;
use crate::model::LibraryEntry;
use crate::types::is_resource_url;
use futures::future::try_join_all;
use tokio::sync::OnceCell;

/// Resolves each entry to a URL, preserving input order.
///
/// URLs pass through untouched. Names are looked up in `index`, which is
/// fetched at most once and only if some entry needs it. A name the index
/// does not know, or knows without a latest version, becomes `""`.
pub async fn resolve_libraries(
    index: &dyn LibraryIndex,
    entries: &[String],
) -> Result<Vec<String>, AppError> {
    let libraries: OnceCell<Vec<LibraryEntry>> = OnceCell::new();

    let lookups = entries.iter().map(|entry| {
        let libraries = &libraries;
        async move {
            if is_resource_url(entry) {
                return Ok::<String, AppError>(entry.clone());
            }

            let libraries = libraries
                .get_or_try_init(|| index.fetch_libraries())
                .await?;

            match libraries
                .iter()
                .find(|library| library.name == *entry)
                .and_then(|library| library.latest.clone())
            {
                Some(url) => {
                    log::debug!("Resolved library '{}' to {}", entry, url);
                    Ok(url)
                }
                None => {
                    log::warn!("Library '{}' not found in the library index", entry);
                    Ok(String::new())
                }
            }
        }
    });

    try_join_all(lookups).await
}
