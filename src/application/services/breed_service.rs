//! Sub-breed counting for end users.

use std::sync::Arc;

use crate::domain::BreedFetcher;
use tracing::warn;

/// Service answering "how many sub-breeds does this breed have?".
///
/// Unlike the fetchers, this service never fails: an unknown breed (or a
/// lookup that could not be completed) counts as zero sub-breeds.
pub struct BreedService<F: BreedFetcher + ?Sized> {
    fetcher: Arc<F>,
}

impl<F: BreedFetcher + ?Sized> BreedService<F> {
    /// Creates a new breed service.
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Returns the sub-breeds of `breed`, or an empty list if it is not found.
    pub async fn sub_breeds_or_empty(&self, breed: &str) -> Vec<String> {
        match self.fetcher.get_sub_breeds(breed).await {
            Ok(sub_breeds) => sub_breeds,
            Err(e) => {
                warn!("{}; reporting no sub-breeds", e);
                Vec::new()
            }
        }
    }

    /// Returns the number of sub-breeds of `breed`, `0` if it is not found.
    pub async fn count_sub_breeds(&self, breed: &str) -> usize {
        self.sub_breeds_or_empty(breed).await.len()
    }
}
