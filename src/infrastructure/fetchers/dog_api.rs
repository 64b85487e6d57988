//! dog.ceo-backed sub-breed fetcher.

use crate::domain::BreedFetcher;
use crate::error::{BreedNotFound, LookupResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Public dog.ceo breed endpoint.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api/breed/";

/// Response envelope returned by `GET {base}/{breed}/list`.
///
/// ```text
/// {"status":"success","message":["afghan","basset"]}
/// {"status":"error","message":"Breed not found (main breed does not exist)","code":404}
/// ```
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BreedListResponse {
    Success {
        message: Vec<String>,
    },
    Error {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        code: Option<u16>,
    },
    #[serde(other)]
    Unexpected,
}

/// Fetcher that asks the dog.ceo API for sub-breeds.
///
/// Every failure (remote error status, malformed JSON, transport error) is
/// reported as [`BreedNotFound`]. One HTTP request is issued per call; there
/// is no retry.
pub struct DogApiBreedFetcher {
    client: Client,
    base_url: Url,
}

impl DogApiBreedFetcher {
    /// Builds a fetcher for the API rooted at `base_url`.
    ///
    /// # Arguments
    ///
    /// - `base_url` - Breed endpoint root (e.g., [`DEFAULT_BASE_URL`])
    /// - `timeout` - Total per-request timeout, applied by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid dog API URL: {base_url}"))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("Dog API URL must be an http(s) URL, got '{}'", base_url);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        info!("Using dog API at {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/{breed}/list`, percent-encoding the breed segment.
    fn list_url(&self, breed: &str) -> LookupResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BreedNotFound::new(format!("Cannot build URL for breed: {breed}")))?
            .pop_if_empty()
            .push(breed)
            .push("list");
        Ok(url)
    }
}

#[async_trait]
impl BreedFetcher for DogApiBreedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> LookupResult<Vec<String>> {
        if breed.trim().is_empty() {
            return Err(BreedNotFound::new(format!("Invalid breed name: {breed}")));
        }

        let url = self.list_url(&breed.trim().to_lowercase())?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BreedNotFound::new(format!("Network or API error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| BreedNotFound::new(format!("Network or API error: {e}")))?;

        parse_breed_list(&body)
    }
}

/// Interprets a dog.ceo response body.
///
/// The HTTP status is not consulted. dog.ceo answers unknown breeds with a 404
/// whose body carries `"status":"error"`, so the body alone decides.
fn parse_breed_list(body: &str) -> LookupResult<Vec<String>> {
    if body.trim().is_empty() {
        return Err(BreedNotFound::new("Empty response from API"));
    }

    let parsed: BreedListResponse = serde_json::from_str(body)
        .map_err(|e| BreedNotFound::new(format!("Malformed API response: {e}")))?;

    match parsed {
        BreedListResponse::Success { message } => Ok(message),
        BreedListResponse::Error { message, code } => {
            debug!("dog API error (code {:?}): {:?}", code, message);
            Err(BreedNotFound::new(
                message.unwrap_or_else(|| "Breed not found".to_string()),
            ))
        }
        BreedListResponse::Unexpected => Err(BreedNotFound::new("Unexpected API status")),
    }
}
