// src/api/cache.rs
//! Disk-based cache for the library index.
//!
//! The cdnjs index is several megabytes and changes slowly. When enabled,
//! the raw JSON body is cached keyed by index URL, with TTL-based expiry.
//! Cache hits go through the same parser as live responses.

use super::client::{ApiResponse, CdnjsClient};
use super::parser::parse_library_index;
use super::LibraryIndex;
use crate::error::AppError;
use crate::model::LibraryEntry;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Disk cache
// ---------------------------------------------------------------------------

/// TTL-based file cache for raw response strings.
///
/// Cache operations are best-effort: read/write failures are silently
/// ignored so a broken cache never prevents a fresh fetch.
pub struct DiskCache {
    cache_dir: PathBuf,
    ttl_secs: u64,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CacheEntry {
    data: String,
    cached_at: u64,
}

impl DiskCache {
    /// Creates a new cache in `$XDG_CACHE_HOME/swing2pen` (or `~/.cache/swing2pen`).
    pub async fn new(ttl_secs: u64) -> Result<Self, std::io::Error> {
        Self::in_dir(Self::default_cache_dir(), ttl_secs).await
    }

    /// Creates a cache rooted at `cache_dir`, purging expired entries.
    pub async fn in_dir(cache_dir: PathBuf, ttl_secs: u64) -> Result<Self, std::io::Error> {
        tokio::fs::create_dir_all(&cache_dir).await?;
        let cache = Self {
            cache_dir,
            ttl_secs,
        };
        cache.purge_expired().await;
        Ok(cache)
    }

    fn default_cache_dir() -> PathBuf {
        std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".cache")
            })
            .join("swing2pen")
    }

    fn now() -> Option<u64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .map(|d| d.as_secs())
    }

    /// Returns cached data if present and not expired.
    pub async fn get(&self, key: &str) -> Option<String> {
        let path = self.key_to_path(key);
        let content = tokio::fs::read_to_string(&path).await.ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;
        if Self::now()?.saturating_sub(entry.cached_at) > self.ttl_secs {
            let _ = tokio::fs::remove_file(&path).await;
            return None;
        }
        Some(entry.data)
    }

    /// Stores data in the cache. Errors are silently ignored.
    pub async fn set(&self, key: &str, data: &str) {
        let entry = CacheEntry {
            data: data.to_string(),
            cached_at: Self::now().unwrap_or_default(),
        };
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = tokio::fs::write(self.key_to_path(key), json).await;
        }
    }

    /// Removes all expired cache entries from disk.
    async fn purge_expired(&self) {
        let Some(now) = Self::now() else {
            return;
        };

        let mut dir = match tokio::fs::read_dir(&self.cache_dir).await {
            Ok(d) => d,
            Err(_) => return,
        };

        while let Ok(Some(entry)) = dir.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Ok(content) = tokio::fs::read_to_string(&path).await {
                if let Ok(cached) = serde_json::from_str::<CacheEntry>(&content) {
                    if now.saturating_sub(cached.cached_at) > self.ttl_secs {
                        let _ = tokio::fs::remove_file(&path).await;
                    }
                }
            }
        }
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.cache_dir
            .join(format!("{:016x}.json", hasher.finish()))
    }
}

// ---------------------------------------------------------------------------
// Cached library index
// ---------------------------------------------------------------------------

/// A [`LibraryIndex`] that serves the cdnjs index from disk while fresh.
pub struct CachedLibraryIndex {
    inner: CdnjsClient,
    cache: DiskCache,
}

impl CachedLibraryIndex {
    /// Wraps a cdnjs client with the default disk cache.
    pub async fn new(inner: CdnjsClient, ttl_secs: u64) -> Result<Self, AppError> {
        let cache = DiskCache::new(ttl_secs).await?;
        Ok(Self::with_cache(inner, cache))
    }

    pub fn with_cache(inner: CdnjsClient, cache: DiskCache) -> Self {
        Self { inner, cache }
    }

    fn cache_key(&self) -> String {
        format!("library_index_{}", self.inner.url())
    }
}

#[async_trait::async_trait]
impl LibraryIndex for CachedLibraryIndex {
    async fn fetch_libraries(&self) -> Result<Vec<LibraryEntry>, AppError> {
        let cache_key = self.cache_key();
        if let Some(cached) = self.cache.get(&cache_key).await {
            log::debug!("Cache hit: {}", cache_key);
            return parse_library_index(ApiResponse {
                data: cached,
                status: reqwest::StatusCode::OK,
                url: format!("cache://{}", cache_key),
            });
        }

        log::debug!("Cache miss: {}", cache_key);
        let response = self.inner.get().await?;
        if response.status.is_success() {
            self.cache.set(&cache_key, &response.data).await;
        }
        parse_library_index(response)
    }
}
