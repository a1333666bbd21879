//! Client configuration
//!
//! `ClientConfig` carries everything needed to build a [`crate::client::Client`]:
//! where the API lives, how long a request may take and how long responses
//! stay cached.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default PokeAPI v2 root
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default cache time-to-live in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Errors raised while validating configuration or building the client
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The request timeout was zero
    #[error("timeout must be positive")]
    NonPositiveTimeout,

    /// The cache time-to-live was zero
    #[error("cache interval must be positive")]
    NonPositiveCacheTtl,

    /// The API root is not a URL at all
    #[error("Invalid API URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API root cannot have resource paths appended to it
    #[error("Invalid API URL: '{0}' cannot be used as a base URL")]
    UnusableBaseUrl(String),

    /// No tokio runtime is available to run the cache sweep
    #[error("cache sweep needs a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Settings for the fetch client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,
    /// Upper bound for a single HTTP request
    pub timeout: Duration,
    /// How long a cached response lives before the sweep removes it
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at `base_url` with default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the cache time-to-live
    pub fn cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Checks that durations are positive and the base URL accepts paths
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::NonPositiveTimeout);
        }
        if self.cache_ttl.is_zero() {
            return Err(ConfigError::NonPositiveCacheTtl);
        }
        self.parsed_base_url().map(|_| ())
    }

    /// Builds `{base_url}/{segment}` as a standalone URL
    pub(crate) fn endpoint(&self, segment: &str) -> Result<Url, ConfigError> {
        let mut url = self.parsed_base_url()?;
        url.path_segments_mut()
            .map_err(|_| ConfigError::UnusableBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::UnusableBaseUrl(self.base_url.clone()));
        }
        Ok(url)
    }
}
