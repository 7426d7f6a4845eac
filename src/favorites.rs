//! Durable favorites store
//!
//! Holds the user's bookmarked people as an ordered list of (id, name) pairs,
//! loaded from a JSON archive at construction and rewritten in full on each
//! explicit save. A missing or corrupt archive is never fatal: the store
//! starts empty and keeps working.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::Favorite;

/// File name of the favorites archive inside the data directory
const ARCHIVE_FILE: &str = "favorites.json";

/// Owns the favorites collection and its on-disk archive
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    /// The collection, in bookmark order
    favorites: Vec<Favorite>,
    /// Where the collection is persisted
    archive_path: PathBuf,
}

impl FavoritesStore {
    /// Creates a store backed by the XDG-compliant data directory
    ///
    /// Loads the archive immediately; returns `None` only when the data
    /// directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "screendex")?;
        let archive_path = project_dirs.data_dir().join(ARCHIVE_FILE);
        Some(Self::with_path(archive_path))
    }

    /// Creates a store backed by a specific archive file
    ///
    /// Useful for testing or when a custom storage location is needed.
    pub fn with_path(archive_path: PathBuf) -> Self {
        let favorites = load_archive(&archive_path);
        Self {
            favorites,
            archive_path,
        }
    }

    /// Returns whether a person with this id is bookmarked
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite.id == id)
    }

    /// Appends a favorite to the end of the collection
    ///
    /// No duplicate check is performed: the caller is responsible for not
    /// adding an id that is already present (guard with `is_favorite`).
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.favorites.push(Favorite {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Removes every entry with this id
    pub fn remove(&mut self, id: &str) {
        self.favorites.retain(|favorite| favorite.id != id);
    }

    /// Writes the full collection to the archive file
    ///
    /// Returns whether the write succeeded; failures are logged and reported,
    /// never propagated.
    pub fn save(&self) -> bool {
        if let Some(parent) = self.archive_path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::error!(path = %self.archive_path.display(), error = %err, "failed to create favorites directory");
                return false;
            }
        }

        let json = match serde_json::to_string_pretty(&self.favorites) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize favorites");
                return false;
            }
        };

        match fs::write(&self.archive_path, json) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(path = %self.archive_path.display(), error = %err, "failed to write favorites archive");
                false
            }
        }
    }

    /// The collection, in bookmark order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }
}

/// Reads the archive, falling back to an empty collection on any failure
fn load_archive(path: &Path) -> Vec<Favorite> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "no favorites archive, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(favorites) => favorites,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "favorites archive is corrupt, starting empty");
            Vec::new()
        }
    }
}
