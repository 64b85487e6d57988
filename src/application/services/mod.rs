//! Business logic services for the application layer.

pub mod breed_service;
pub mod caching_fetcher;

pub use breed_service::BreedService;
pub use caching_fetcher::CachingBreedFetcher;
