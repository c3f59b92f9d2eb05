//! PokeAPI Client
//!
//! Fetches raw response bodies through the expiring cache and decodes them
//! into the models in [`crate::models`].

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Client for the PokeAPI.
///
/// Every GET is keyed in the cache by its full URL, so repeated lookups
/// within the cache interval never touch the network.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<Cache>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that reads through `cache`.
    pub fn new(base_url: &str, cache: Arc<Cache>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config, cache: Arc<Cache>) -> Result<Self> {
        Self::new(&config.base_url, cache, config.http_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    // == URLs ==
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    /// URL of the first page of the location area listing.
    pub fn location_areas_url(&self, limit: u32) -> String {
        format!("{}/location-area/?offset=0&limit={}", self.base_url, limit)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    // == Raw Fetch ==
    /// Returns the body at `url`, from the cache when present.
    ///
    /// On a miss the body is fetched and stored under `url`. Only successful
    /// responses are cached.
    pub async fn fetch_raw(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_raw(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Resources ==
    /// Fetches a single Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let name = require_name(name)?;
        self.fetch_json(&self.pokemon_url(name)).await
    }

    /// Fetches the location area page at `url`.
    ///
    /// `url` comes from [`Self::location_areas_url`] or from the `next` /
    /// `previous` links of a previous page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let name = require_name(name)?;
        self.fetch_json(&self.location_area_url(name)).await
    }
}

fn require_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains('/') {
        return Err(PokedexError::InvalidArgument(format!(
            "'{}' is not a valid resource name",
            name
        )));
    }
    Ok(name)
}
