#![allow(dead_code)]

use dog_breeds::application::services::CachingBreedFetcher;
use dog_breeds::config::{BreedSource, Config};
use dog_breeds::infrastructure::fetchers::{DEFAULT_BASE_URL, LocalBreedFetcher};
use std::sync::Arc;

pub fn hound_sub_breeds() -> Vec<String> {
    vec!["afghan hound".to_string(), "basset hound".to_string()]
}

/// Cache over the seeded local table, with a handle on the stub to observe
/// delegate traffic.
pub fn create_local_cache() -> (
    Arc<LocalBreedFetcher>,
    CachingBreedFetcher<LocalBreedFetcher>,
) {
    let local = Arc::new(LocalBreedFetcher::new());
    let cache = CachingBreedFetcher::new(local.clone());
    (local, cache)
}

pub fn create_test_config(source: BreedSource, base_url: Option<&str>) -> Config {
    Config {
        source,
        dog_api_base_url: base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
        http_timeout_seconds: 5,
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}
