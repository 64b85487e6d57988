//! Wiring of configuration, sub-breed source, cache and counting service.
//!
//! Builds the source selected by [`Config::source`], wraps it in a
//! [`CachingBreedFetcher`] and resolves every requested breed through a
//! single [`BreedService`], so repeated breeds are served from the cache.

use crate::application::services::{BreedService, CachingBreedFetcher};
use crate::config::{BreedSource, Config};
use crate::domain::BreedFetcher;
use crate::infrastructure::fetchers::{DogApiBreedFetcher, LocalBreedFetcher};

use anyhow::Result;
use std::sync::Arc;

/// Outcome of resolving one breed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedReport {
    pub breed: String,
    /// Empty when the breed has no sub-breeds or was not found.
    pub sub_breeds: Vec<String>,
}

impl BreedReport {
    pub fn count(&self) -> usize {
        self.sub_breeds.len()
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub reports: Vec<BreedReport>,
    /// Lookups that actually reached the underlying source.
    pub calls_made: usize,
}

/// Builds the uncached sub-breed source chosen by the configuration.
///
/// # Errors
///
/// Returns an error if the remote source is selected and its URL or HTTP
/// client cannot be set up.
pub fn build_fetcher(config: &Config) -> Result<Arc<dyn BreedFetcher>> {
    let fetcher: Arc<dyn BreedFetcher> = match config.source {
        BreedSource::Local => {
            tracing::info!("Using local breed table");
            Arc::new(LocalBreedFetcher::new())
        }
        BreedSource::Remote => Arc::new(DogApiBreedFetcher::new(
            &config.dog_api_base_url,
            config.http_timeout(),
        )?),
    };

    Ok(fetcher)
}

/// Resolves `breeds` in order through a fresh cache.
///
/// Unknown breeds are reported with no sub-breeds rather than failing the run.
///
/// # Errors
///
/// Returns an error only if the sub-breed source cannot be built.
pub async fn run(config: &Config, breeds: &[String]) -> Result<RunSummary> {
    let cache = Arc::new(CachingBreedFetcher::new(build_fetcher(config)?));
    let service = BreedService::new(cache.clone());

    let mut reports = Vec::with_capacity(breeds.len());
    for breed in breeds {
        let sub_breeds = service.sub_breeds_or_empty(breed).await;
        reports.push(BreedReport {
            breed: breed.clone(),
            sub_breeds,
        });
    }

    Ok(RunSummary {
        reports,
        calls_made: cache.calls_made(),
    })
}
