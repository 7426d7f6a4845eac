//! Core data models for Screendex
//!
//! This module contains the record types exchanged with the remote metadata
//! API, the favorites entry, and the request descriptor used as the response
//! cache key.

pub mod client;

pub use client::{ApiClient, ApiError};

use serde::{Deserialize, Serialize};

/// A single row returned by the search endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Remote identifier (e.g., "tt0944947" for a title, "nm0000134" for a person)
    pub id: String,
    /// Kind of entity this row refers to ("Title", "Name", ...)
    pub result_type: String,
    /// Poster or headshot image URL
    pub image: String,
    /// Display title of the result
    pub title: String,
    /// Short descriptive text (year, principals, ...)
    pub description: String,
}

/// Reply envelope for the series and movie search endpoints
///
/// `error_message` doubles as an in-band failure signal: the remote reports
/// some failures inside a 2xx body rather than through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReply {
    /// Which search was performed ("Series" or "Movie")
    pub search_type: String,
    /// The query expression as the server understood it
    pub expression: String,
    /// Matching results, in server order
    pub results: Vec<SearchResult>,
    /// Server-reported error text; empty on success
    #[serde(default)]
    pub error_message: String,
}

/// A cast member inside a title-details reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastActor {
    /// Remote person identifier
    pub id: String,
    /// Headshot image URL
    pub image: String,
    /// Person's name
    pub name: String,
    /// Character played in this title
    pub as_character: String,
}

/// Full details for a movie or series title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    /// Remote title identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year
    pub year: String,
    /// Poster image URL
    pub image: String,
    /// Plot summary
    pub plot: String,
    /// Cast, in billing order
    pub actor_list: Vec<CastActor>,
    /// Server-reported error text; empty on success
    #[serde(default)]
    pub error_message: String,
}

/// An entry in a person's "known for" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Remote title identifier
    pub id: String,
    /// Title of the work
    pub title: String,
    /// Role label (character name or job)
    pub role: String,
}

/// Biography reply for a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorBio {
    /// Remote person identifier
    pub id: String,
    /// Person's name
    pub name: String,
    /// Headshot image URL
    pub image: String,
    /// Biography text
    pub summary: String,
    /// Works the person is known for, in server order
    pub known_for: Vec<Role>,
    /// Server-reported error text; empty on success
    #[serde(default)]
    pub error_message: String,
}

/// A bookmarked person: (id, name)
///
/// The favorites collection treats `id` as the identity; no two entries are
/// meant to share one (see `FavoritesStore::add` for the caller contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Remote person identifier
    pub id: String,
    /// Person's name at bookmark time
    pub name: String,
}

/// Replies that carry the remote's in-band error field
///
/// Lets the client apply the same server-error check to every endpoint
/// without knowing the concrete reply shape.
pub trait ApiReply {
    /// The embedded error text; empty means success
    fn error_message(&self) -> &str;
}

impl ApiReply for SearchReply {
    fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl ApiReply for SeriesData {
    fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl ApiReply for ActorBio {
    fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// The four remote endpoint kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Series search by free text
    SearchSeries,
    /// Movie search by free text
    SearchMovies,
    /// Full title details including cast
    TitleDetails,
    /// Person biography
    PersonBio,
}

impl Endpoint {
    /// Path segment used by the remote API for this endpoint
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SearchSeries => "SearchSeries",
            Endpoint::SearchMovies => "SearchMovie",
            Endpoint::TitleDetails => "Title",
            Endpoint::PersonBio => "Name",
        }
    }

    /// Short name used to build cache file names
    pub fn slug(self) -> &'static str {
        match self {
            Endpoint::SearchSeries => "search_series",
            Endpoint::SearchMovies => "search_movie",
            Endpoint::TitleDetails => "title",
            Endpoint::PersonBio => "name",
        }
    }
}

/// Identifies one request for caching purposes
///
/// Two descriptors are equivalent iff their resolved URLs are equal; the
/// endpoint kind only contributes a readable prefix to cache file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Which endpoint the URL resolves to
    pub endpoint: Endpoint,
    /// The fully resolved request URL, parameters already encoded
    pub url: String,
}

impl RequestDescriptor {
    /// Creates a descriptor for an already-resolved URL
    pub fn new(endpoint: Endpoint, url: impl Into<String>) -> Self {
        Self {
            endpoint,
            url: url.into(),
        }
    }
}
