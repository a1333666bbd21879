//! PokeAPI client with transparent response caching
//!
//! Every lookup goes through [`Client::fetch`], which checks the in-memory
//! cache before touching the network and stores raw response bodies after a
//! successful decode. The resource-specific methods only decide which URL to
//! use as the key.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::cache::Cache;
use crate::config::{ClientConfig, ConfigError};
use crate::data::{LocationArea, LocationAreaPage, Pokemon};

/// Number of location areas requested per page
pub const PAGE_SIZE: u32 = 20;

/// Where a payload that failed to decode came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A previously cached response body
    Cache,
    /// A fresh response from the API
    Network,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Cache => f.write_str("cached"),
            Origin::Network => f.write_str("network"),
        }
    }
}

/// Errors that can occur when fetching a resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request was rejected before any I/O happened
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP request could not be completed or its body could not be read
    #[error("failed to execute request for {key}: {source}")]
    Transport {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered 404
    #[error("resource not found at {key}")]
    NotFound { key: String },

    /// The API answered with some other non-success status
    #[error("received the response with {code} status")]
    UnexpectedStatus { code: u16, key: String },

    /// The payload does not have the expected shape
    #[error("failed to decode {origin} data for {key}: {source}")]
    Decode {
        key: String,
        origin: Origin,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the PokeAPI
///
/// Owns a [`Cache`] whose sweep task lives as long as the client does. The
/// HTTP timeout and cache TTL are fixed at construction.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    cache: Cache,
    location_area_endpoint: Url,
    pokemon_endpoint: Url,
    first_page: String,
}

impl Client {
    /// Creates a client from a validated configuration
    ///
    /// Must be called from within a tokio runtime, since it starts the cache
    /// sweep; outside one it returns [`ConfigError::NoRuntime`].
    ///
    /// # Returns
    /// * `Ok(Client)` on success
    /// * `Err(ConfigError)` if a duration is zero, the base URL is unusable, or
    ///   the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        let location_area_endpoint = config.endpoint("location-area")?;
        let pokemon_endpoint = config.endpoint("pokemon")?;

        let mut first_page = location_area_endpoint.clone();
        first_page.set_query(Some(&format!("offset=0&limit={PAGE_SIZE}")));

        Ok(Self {
            http,
            cache: Cache::new(config.cache_ttl)?,
            location_area_endpoint,
            pokemon_endpoint,
            first_page: first_page.into(),
        })
    }

    /// The response cache backing this client
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// How long cached responses live
    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Fetches the resource at `key` and decodes it into `T`
    ///
    /// A cached body is authoritative: if it fails to decode the error is
    /// returned and the network is not consulted. On a miss the body of a
    /// successful response is cached only after it decodes.
    ///
    /// # Arguments
    /// * `key` - Cache key; on a miss it must also be the absolute URL to GET
    pub async fn fetch<T: DeserializeOwned>(&self, key: &str) -> Result<T, FetchError> {
        if key.trim().is_empty() {
            return Err(FetchError::InvalidRequest(
                "request URL cannot be empty".to_string(),
            ));
        }

        if let Some(body) = self.cache.get(key) {
            info!(
                key,
                ttl_secs = self.cache.ttl().as_secs(),
                "serving cached response"
            );
            return decode(key, &body, Origin::Cache);
        }

        let url = Url::parse(key).map_err(|e| {
            FetchError::InvalidRequest(format!("'{key}' is not a valid URL: {e}"))
        })?;

        debug!(key, "cache miss, requesting");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                key: key.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(key, status = status.as_u16(), "response received");
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                key: key.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                code: status.as_u16(),
                key: key.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                key: key.to_string(),
                source,
            })?;

        let value = decode(key, &body, Origin::Network)?;
        self.cache.put(key, body);
        Ok(value)
    }

    /// Fetches a page of location areas
    ///
    /// `locator` is the `next`/`previous` URL from a previously fetched page;
    /// `None` fetches the first page.
    pub async fn location_areas(
        &self,
        locator: Option<&str>,
    ) -> Result<LocationAreaPage, FetchError> {
        self.fetch(locator.unwrap_or(self.first_page.as_str())).await
    }

    /// Fetches a single location area by name or id
    pub async fn location_area(&self, name: &str) -> Result<LocationArea, FetchError> {
        let key = detail_key(&self.location_area_endpoint, name)?;
        self.fetch(&key).await
    }

    /// Fetches a single pokemon by name or id
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, FetchError> {
        let key = detail_key(&self.pokemon_endpoint, name)?;
        self.fetch(&key).await
    }
}

/// Appends `id` to `endpoint` as a single path segment
fn detail_key(endpoint: &Url, id: &str) -> Result<String, FetchError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(FetchError::InvalidRequest(
            "resource name cannot be empty".to_string(),
        ));
    }

    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidRequest(format!("'{endpoint}' cannot take a path")))?
        .push(id);
    Ok(url.into())
}

fn decode<T: DeserializeOwned>(key: &str, body: &[u8], origin: Origin) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        key: key.to_string(),
        origin,
        source,
    })
}
