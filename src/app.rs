//! Application data facade
//!
//! `AppData` is the single handle the presentation layer talks to. It
//! composes the API client and the favorites store and forwards every
//! operation without adding logic of its own. One instance is constructed at
//! startup and passed down explicitly; nothing here is global.

use crate::data::{ActorBio, ApiClient, ApiError, Favorite, SearchReply, SeriesData};
use crate::favorites::FavoritesStore;

/// The application's one data-access handle
#[derive(Debug)]
pub struct AppData {
    /// Remote metadata API client (owns the response cache)
    api: ApiClient,
    /// Durable favorites collection
    favorites: FavoritesStore,
}

impl AppData {
    /// Wires the facade from its two components
    pub fn new(api: ApiClient, favorites: FavoritesStore) -> Self {
        Self { api, favorites }
    }

    /// Searches series by free text
    pub async fn search_series(&self, text: &str) -> Result<SearchReply, ApiError> {
        self.api.search_series(text).await
    }

    /// Searches movies by free text
    pub async fn search_movies(&self, text: &str) -> Result<SearchReply, ApiError> {
        self.api.search_movies(text).await
    }

    /// Fetches full details for a title, including the cast list
    pub async fn title_details(&self, id: &str) -> Result<SeriesData, ApiError> {
        self.api.title_details(id).await
    }

    /// Fetches a person's biography and known-for list
    pub async fn actor_bio(&self, id: &str) -> Result<ActorBio, ApiError> {
        self.api.actor_bio(id).await
    }

    /// Returns whether a person with this id is bookmarked
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Bookmarks a person (append; see `FavoritesStore::add` for the contract)
    pub fn add_favorite(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.favorites.add(id, name);
    }

    /// Removes every bookmark with this id
    pub fn remove_favorite(&mut self, id: &str) {
        self.favorites.remove(id);
    }

    /// Flushes the favorites collection to durable storage
    pub fn save_favorites(&self) -> bool {
        self.favorites.save()
    }

    /// The favorites collection, in bookmark order
    pub fn favorites(&self) -> &[Favorite] {
        self.favorites.favorites()
    }
}
