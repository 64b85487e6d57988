//! In-memory sub-breed fetcher for tests and offline runs.

use crate::domain::BreedFetcher;
use crate::error::{BreedNotFound, LookupResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// A fetcher that answers from a fixed table without any I/O.
///
/// Seeded with `hound` → `["afghan hound", "basset hound"]`. Lookups are
/// case-insensitive, like the remote API. Unknown breeds fail with
/// [`BreedNotFound`].
///
/// # Use Cases
///
/// - Unit and integration tests that need deterministic answers
/// - Running the CLI without network access
pub struct LocalBreedFetcher {
    breeds: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl LocalBreedFetcher {
    /// Creates a stub seeded with the `hound` breed.
    pub fn new() -> Self {
        Self::empty().with_breed("hound", ["afghan hound", "basset hound"])
    }

    /// Creates a stub that knows no breeds at all.
    pub fn empty() -> Self {
        Self {
            breeds: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Adds (or replaces) a breed and its sub-breeds.
    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds.insert(
            breed.into().to_lowercase(),
            sub_breeds.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Number of lookups this stub has served, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for LocalBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedFetcher for LocalBreedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> LookupResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("Local lookup: {}", breed);

        self.breeds
            .get(&breed.to_lowercase())
            .cloned()
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}
