//! Remote metadata API client
//!
//! Builds and executes requests against the four metadata endpoints (series
//! search, movie search, title details, person bio), classifies every outcome
//! into `ApiError`, and serves repeated requests from the response cache.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{ActorBio, ApiReply, Endpoint, RequestDescriptor, SearchReply, SeriesData};
use crate::cache::ResponseCache;

/// Base URL of the remote metadata API
const DEFAULT_BASE_URL: &str = "https://imdb-api.com";

/// Built-in pre-shared API key, used when no key is supplied
pub const DEFAULT_API_KEY: &str = "k_40uwx5mm";

/// Classified failure of one API call
///
/// The variants are mutually exclusive: each call resolves to a decoded reply
/// or to exactly one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network exchange itself could not complete (DNS, connection, timeout)
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the status was outside 200-299
    #[error("unexpected HTTP status {0}")]
    Http(u16),

    /// The status was successful but the body did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body decoded but its embedded error field was non-empty
    #[error("server reported an error: {0}")]
    Server(String),
}

/// Client for the remote metadata API
///
/// Each operation checks the response cache before touching the network and
/// writes the raw body back on full success; failures never populate the
/// cache. Calls are single-shot: there is no retry and no cancellation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Pre-shared API key embedded in every request path
    api_key: String,
    /// Base URL for the API (allows override for testing)
    base_url: String,
    /// Cache consulted before any network call
    cache: Option<ResponseCache>,
}

impl ApiClient {
    /// Creates a new ApiClient with the platform response cache
    ///
    /// Falls back to running uncached when the cache directory cannot be
    /// determined.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: ResponseCache::new(),
        }
    }

    /// Creates a new ApiClient with a custom response cache
    pub fn with_cache(api_key: impl Into<String>, cache: ResponseCache) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: Some(cache),
        }
    }

    /// Overrides the base URL (for a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Searches series by free text
    pub async fn search_series(&self, text: &str) -> Result<SearchReply, ApiError> {
        let query = urlencoding::encode(text);
        self.fetch(self.descriptor(Endpoint::SearchSeries, &query))
            .await
    }

    /// Searches movies by free text
    pub async fn search_movies(&self, text: &str) -> Result<SearchReply, ApiError> {
        let query = urlencoding::encode(text);
        self.fetch(self.descriptor(Endpoint::SearchMovies, &query))
            .await
    }

    /// Fetches full details for a title, including the cast list
    pub async fn title_details(&self, id: &str) -> Result<SeriesData, ApiError> {
        self.fetch(self.descriptor(Endpoint::TitleDetails, id)).await
    }

    /// Fetches a person's biography and known-for list
    pub async fn actor_bio(&self, id: &str) -> Result<ActorBio, ApiError> {
        self.fetch(self.descriptor(Endpoint::PersonBio, id)).await
    }

    /// Resolves the request URL for an endpoint and an already-encoded parameter
    ///
    /// The URL is built deterministically from the fixed template, so equal
    /// inputs always produce equal descriptors.
    fn descriptor(&self, endpoint: Endpoint, param: &str) -> RequestDescriptor {
        let url = match endpoint {
            Endpoint::TitleDetails => format!(
                "{}/en/API/{}/{}/{}/FullActor,",
                self.base_url,
                endpoint.path(),
                self.api_key,
                param
            ),
            _ => format!(
                "{}/en/API/{}/{}/{}",
                self.base_url,
                endpoint.path(),
                self.api_key,
                param
            ),
        };
        RequestDescriptor::new(endpoint, url)
    }

    /// Shared fetch path for all four endpoints
    ///
    /// Cache check happens before any network exchange; the exchange happens
    /// before cache population and return. Classification precedence:
    /// transport failure, then HTTP status, then JSON decode, then the
    /// embedded server-error field.
    async fn fetch<T>(&self, descriptor: RequestDescriptor) -> Result<T, ApiError>
    where
        T: DeserializeOwned + ApiReply,
    {
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(&descriptor) {
                // Only decodable, error-free bodies are ever stored, so this
                // decode is expected to succeed; if the entry went bad on
                // disk, treat it as a miss and refetch.
                match serde_json::from_str::<T>(&cached.body) {
                    Ok(reply) => {
                        tracing::debug!(url = %descriptor.url, stored_at = %cached.stored_at, "cache hit");
                        return Ok(reply);
                    }
                    Err(err) => {
                        tracing::warn!(url = %descriptor.url, error = %err, "cached body failed to decode, refetching");
                    }
                }
            } else {
                tracing::debug!(url = %descriptor.url, "cache miss");
            }
        }

        let response = self.http_client.get(descriptor.url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let reply: T = serde_json::from_str(&body)?;

        if !reply.error_message().is_empty() {
            return Err(ApiError::Server(reply.error_message().to_string()));
        }

        if let Some(ref cache) = self.cache {
            if let Err(err) = cache.put(&descriptor, &body) {
                tracing::warn!(url = %descriptor.url, error = %err, "failed to store response in cache");
            }
        }

        Ok(reply)
    }
}
