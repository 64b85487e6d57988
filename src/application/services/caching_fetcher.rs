//! Memoizing decorator over any [`BreedFetcher`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::BreedFetcher;
use crate::error::LookupResult;
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Per-key cache slot.
///
/// `cell` is empty while the first lookup is in flight (or after it failed)
/// and filled exactly once on success. `holders` counts the lookups
/// currently using the slot.
#[derive(Default)]
struct Slot {
    cell: Arc<OnceCell<Vec<String>>>,
    holders: usize,
}

type SlotMap = Mutex<HashMap<String, Slot>>;

/// Fetcher decorator that caches successful lookups.
///
/// Keys are breed names lowercased, so `"Hound"` and `"HOUND"` share one entry.
/// The wrapped fetcher still receives the caller's original spelling.
///
/// Failures are never cached: every lookup of a breed that previously failed
/// goes back to the wrapped fetcher. Entries never expire.
///
/// # Concurrency
///
/// Concurrent misses on the same key wait on a single in-flight call to the
/// wrapped fetcher instead of issuing their own. Misses on different keys
/// proceed in parallel. The slot map lock is never held across a delegate call.
///
/// A lookup that fails, or is cancelled by dropping its future, leaves no
/// entry behind once no other lookup of the same key is in progress.
pub struct CachingBreedFetcher<F: BreedFetcher + ?Sized> {
    inner: Arc<F>,
    slots: SlotMap,
    calls_made: AtomicUsize,
}

impl<F: BreedFetcher + ?Sized> CachingBreedFetcher<F> {
    /// Wraps `inner` with an empty cache and a zeroed call counter.
    pub fn new(inner: Arc<F>) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
            calls_made: AtomicUsize::new(0),
        }
    }

    /// Number of times the wrapped fetcher has actually been invoked.
    ///
    /// Counts misses only (successful or failed), never cache hits.
    pub fn calls_made(&self) -> usize {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Number of breeds currently held in the cache.
    pub fn cached_breeds(&self) -> usize {
        lock_slots(&self.slots)
            .values()
            .filter(|slot| slot.cell.initialized())
            .count()
    }

    fn acquire_slot(&self, key: String) -> SlotGuard<'_> {
        let mut slots = lock_slots(&self.slots);
        let slot = slots.entry(key.clone()).or_default();
        slot.holders += 1;

        SlotGuard {
            slots: &self.slots,
            cell: slot.cell.clone(),
            key,
        }
    }
}

/// The map holds plain data, so a panic elsewhere cannot leave it inconsistent.
fn lock_slots(slots: &SlotMap) -> MutexGuard<'_, HashMap<String, Slot>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One lookup's hold on a slot.
///
/// Released on drop, whether the lookup succeeded, failed or was cancelled.
/// The last holder of a still-empty slot removes it from the map.
struct SlotGuard<'a> {
    slots: &'a SlotMap,
    cell: Arc<OnceCell<Vec<String>>>,
    key: String,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        let mut slots = lock_slots(self.slots);

        let Some(slot) = slots.get_mut(&self.key) else {
            return;
        };
        if !Arc::ptr_eq(&slot.cell, &self.cell) {
            return;
        }

        slot.holders -= 1;
        if slot.holders == 0 && !slot.cell.initialized() {
            debug!("Dropping empty cache slot: {}", self.key);
            slots.remove(&self.key);
        }
    }
}

#[async_trait]
impl<F: BreedFetcher + ?Sized + 'static> BreedFetcher for CachingBreedFetcher<F> {
    async fn get_sub_breeds(&self, breed: &str) -> LookupResult<Vec<String>> {
        let slot = self.acquire_slot(breed.to_lowercase());

        if let Some(cached) = slot.cell.get() {
            debug!("Cache HIT: {}", slot.key);
            return Ok(cached.clone());
        }

        let result = slot
            .cell
            .get_or_try_init(|| async {
                let calls = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
                debug!("Cache MISS: {} (delegate call #{})", slot.key, calls);
                self.inner.get_sub_breeds(breed).await
            })
            .await
            .cloned();

        if let Err(e) = &result {
            warn!("Lookup for {} failed, not cached: {}", breed, e);
        }

        result
    }
}
