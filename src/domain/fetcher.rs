//! Breed lookup capability implemented by every sub-breed source.

use crate::error::LookupResult;
use async_trait::async_trait;

/// Source of sub-breed lists for a dog breed.
///
/// # Implementations
///
/// - [`crate::infrastructure::fetchers::DogApiBreedFetcher`] - dog.ceo HTTP API
/// - [`crate::infrastructure::fetchers::LocalBreedFetcher`] - in-memory stub
/// - [`crate::application::services::CachingBreedFetcher`] - memoizing decorator
///   over any of the above
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetches the sub-breeds of `breed`, in the order the source reports them.
    ///
    /// An empty list is a valid answer for a breed without sub-breeds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BreedNotFound`] if the breed does not exist or the
    /// source could not be queried for any reason.
    async fn get_sub_breeds(&self, breed: &str) -> LookupResult<Vec<String>>;
}
