//! Application layer services built on the breed lookup contract.
//!
//! Services consume the [`crate::domain::BreedFetcher`] trait and never depend on
//! a concrete source.
//!
//! # Available Services
//!
//! - [`services::caching_fetcher::CachingBreedFetcher`] - Memoizing lookup decorator
//! - [`services::breed_service::BreedService`] - Sub-breed counting with not-found as zero

pub mod services;
