//! # Dog Breeds
//!
//! Sub-breed lookup for dog breeds, backed by the [dog.ceo](https://dog.ceo) API and
//! shielded from redundant requests by a memoizing decorator.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::BreedFetcher`] lookup contract
//! - **Application Layer** ([`application`]) - Caching decorator and counting service
//! - **Infrastructure Layer** ([`infrastructure`]) - dog.ceo client and in-memory stub
//!
//! ## Caching
//!
//! [`application::services::CachingBreedFetcher`] wraps any fetcher:
//!
//! - Keys are case-insensitive (`"Hound"` and `"HOUND"` are one entry)
//! - Only successful lookups are stored; failures always reach the source again
//! - Entries live as long as the decorator
//! - [`application::services::CachingBreedFetcher::calls_made`] counts the lookups
//!   that reached the wrapped fetcher
//!
//! ## Quick Start
//!
//! ```bash
//! BREED_SOURCE=remote cargo run -- hound terrier cat
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod runner;

pub use error::BreedNotFound;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BreedService, CachingBreedFetcher};
    pub use crate::domain::BreedFetcher;
    pub use crate::error::{BreedNotFound, LookupResult};
    pub use crate::infrastructure::fetchers::{DogApiBreedFetcher, LocalBreedFetcher};
}
