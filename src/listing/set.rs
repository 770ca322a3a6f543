use crate::listing::Listing;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe set of listings keyed by full record equality
///
/// Crawl tasks share one set behind an `Arc` and insert concurrently; the
/// driver drains it once every task has finished.
#[derive(Debug, Default)]
pub struct ListingSet {
    listings: Mutex<HashSet<Listing>>,
}

impl ListingSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listing, returning true if it was not already present
    pub fn insert(&self, listing: Listing) -> bool {
        self.lock().insert(listing)
    }

    /// Removes and returns every listing, in no particular order
    pub fn drain(&self) -> Vec<Listing> {
        self.lock().drain().collect()
    }

    /// Returns the number of distinct listings
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn lock(&self) -> MutexGuard<'_, HashSet<Listing>> {
        self.listings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
