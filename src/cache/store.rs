//! Disk-backed response store
//!
//! Provides a `ResponseCache` that maps a request descriptor to the raw body
//! of the most recent successful response. Entries are JSON files in an
//! XDG-compliant cache directory; each write replaces the previous entry for
//! the same URL (last-write-wins). Entries never expire: a hit is served
//! as-is, and eviction is left to the platform.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use crate::data::RequestDescriptor;

/// On-disk shape of a cache entry
///
/// The resolved URL is stored alongside the body so a lookup can reject an
/// entry whose file name collided with a different URL.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// The resolved request URL this body belongs to
    url: String,
    /// Raw response body as received from the remote
    body: String,
    /// When the body was stored
    stored_at: DateTime<Utc>,
}

/// Result of a cache lookup
#[derive(Debug, Clone)]
pub struct CachedBody {
    /// Raw response body as received from the remote
    pub body: String,
    /// When the body was stored
    pub stored_at: DateTime<Utc>,
}

/// Maps request descriptors to the last successful raw response body
///
/// Stored as JSON files in an XDG-compliant cache directory
/// (`~/.cache/screendex/` on Linux). File names combine the endpoint's slug
/// with a hash of the resolved URL.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    /// Directory where entry files are stored
    cache_dir: PathBuf,
}

impl ResponseCache {
    /// Creates a new ResponseCache using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "screendex")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new ResponseCache with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path of the entry file for the given descriptor
    fn entry_path(&self, descriptor: &RequestDescriptor) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        descriptor.url.hash(&mut hasher);
        self.cache_dir.join(format!(
            "{}_{:016x}.json",
            descriptor.endpoint.slug(),
            hasher.finish()
        ))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Stores a raw response body for the given descriptor
    ///
    /// Overwrites any previous entry for the same resolved URL.
    pub fn put(&self, descriptor: &RequestDescriptor, body: &str) -> std::io::Result<()> {
        self.ensure_dir()?;

        let entry = CacheEntry {
            url: descriptor.url.clone(),
            body: body.to_string(),
            stored_at: Utc::now(),
        };

        let json = serde_json::to_string(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.entry_path(descriptor), json)
    }

    /// Looks up the stored body for the given descriptor
    ///
    /// Returns `None` when no entry exists, when the entry file cannot be
    /// parsed, or when the file name hash collided with a different URL —
    /// all of which callers treat as a plain miss.
    pub fn get(&self, descriptor: &RequestDescriptor) -> Option<CachedBody> {
        let path = self.entry_path(descriptor);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;

        if entry.url != descriptor.url {
            return None;
        }

        Some(CachedBody {
            body: entry.body,
            stored_at: entry.stored_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Endpoint;
    use tempfile::TempDir;

    fn create_test_cache() -> (ResponseCache, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = ResponseCache::with_dir(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    fn descriptor(url: &str) -> RequestDescriptor {
        RequestDescriptor::new(Endpoint::SearchSeries, url)
    }

    #[test]
    fn test_put_creates_entry_file_in_cache_directory() {
        let (cache, temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/SearchSeries/k/got");

        cache.put(&desc, r#"{"results":[]}"#).expect("Put should succeed");

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .expect("Should list cache dir")
            .collect();
        assert_eq!(entries.len(), 1, "Exactly one entry file should exist");

        let name = entries[0].as_ref().unwrap().file_name();
        let name = name.to_string_lossy().to_string();
        assert!(
            name.starts_with("search_series_"),
            "Entry file should be prefixed with the endpoint slug: {}",
            name
        );
    }

    #[test]
    fn test_get_returns_none_for_missing_entry() {
        let (cache, _temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/SearchSeries/k/nothing");

        assert!(cache.get(&desc).is_none(), "Should miss for unknown URL");
    }

    #[test]
    fn test_body_survives_roundtrip() {
        let (cache, _temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/SearchSeries/k/got");
        let body = r#"{"searchType":"Series","expression":"got","results":[],"errorMessage":""}"#;

        cache.put(&desc, body).expect("Put should succeed");

        let cached = cache.get(&desc).expect("Should hit after put");
        assert_eq!(cached.body, body, "Body should survive roundtrip verbatim");
    }

    #[test]
    fn test_overwrite_is_last_write_wins() {
        let (cache, _temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/SearchSeries/k/got");

        cache.put(&desc, "first").expect("First put should succeed");
        cache.put(&desc, "second").expect("Second put should succeed");

        let cached = cache.get(&desc).expect("Should hit after puts");
        assert_eq!(cached.body, "second", "Cache should hold the latest body");
    }

    #[test]
    fn test_distinct_urls_are_distinct_entries() {
        let (cache, _temp_dir) = create_test_cache();
        let got = descriptor("https://imdb-api.example/en/API/SearchSeries/k/got");
        let dark = descriptor("https://imdb-api.example/en/API/SearchSeries/k/dark");

        cache.put(&got, "got body").unwrap();
        cache.put(&dark, "dark body").unwrap();

        assert_eq!(cache.get(&got).unwrap().body, "got body");
        assert_eq!(cache.get(&dark).unwrap().body, "dark body");
    }

    #[test]
    fn test_corrupt_entry_file_reads_as_miss() {
        let (cache, temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/SearchSeries/k/got");

        cache.put(&desc, "body").unwrap();

        // Clobber the single entry file with garbage
        let entry = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        std::fs::write(entry.path(), "not json at all").unwrap();

        assert!(cache.get(&desc).is_none(), "Corrupt entry should be a miss");
    }

    #[test]
    fn test_put_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let cache = ResponseCache::with_dir(nested_path.clone());
        let desc = descriptor("https://imdb-api.example/en/API/Name/k/nm0000134");

        cache.put(&desc, "body").expect("Put should succeed");

        assert!(nested_path.exists(), "Nested directory should be created");
        assert!(cache.get(&desc).is_some(), "Entry should be readable");
    }

    #[test]
    fn test_stored_at_timestamp_is_recorded() {
        let (cache, _temp_dir) = create_test_cache();
        let desc = descriptor("https://imdb-api.example/en/API/Title/k/tt0944947");

        let before = Utc::now();
        cache.put(&desc, "body").expect("Put should succeed");
        let after = Utc::now();

        let cached = cache.get(&desc).expect("Should hit after put");
        assert!(cached.stored_at >= before, "stored_at should be after put started");
        assert!(cached.stored_at <= after, "stored_at should be before put finished");
    }

    #[test]
    fn test_new_creates_xdg_compliant_path() {
        if let Some(cache) = ResponseCache::new() {
            let path_str = cache.cache_dir.to_string_lossy();
            assert!(
                path_str.contains("screendex"),
                "Cache path should contain project name"
            );
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}
