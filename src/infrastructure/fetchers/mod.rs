//! Sub-breed sources.
//!
//! Provides two [`crate::domain::BreedFetcher`] implementations:
//! - [`DogApiBreedFetcher`] - Production fetcher backed by the dog.ceo API
//! - [`LocalBreedFetcher`] - Deterministic in-memory stub for tests and offline runs

mod dog_api;
mod local;

pub use dog_api::{DEFAULT_BASE_URL, DogApiBreedFetcher};
pub use local::LocalBreedFetcher;
