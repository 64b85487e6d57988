//! Domain layer: the breed lookup contract.
//!
//! - [`fetcher`] - [`BreedFetcher`] trait implemented by every sub-breed source
//!
//! Concrete sources live in [`crate::infrastructure::fetchers`]; the caching
//! decorator and the consumer service live in [`crate::application::services`].

pub mod fetcher;

pub use fetcher::BreedFetcher;

#[cfg(test)]
pub use fetcher::MockBreedFetcher;
