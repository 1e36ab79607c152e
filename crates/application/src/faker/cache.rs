//! Bounded cache of faker instances

use std::sync::Arc;

use indexmap::IndexMap;
use reqgen_domain::Locale;

use super::Faker;

/// Default number of cached fakers.
pub const FAKER_CACHE_CAPACITY: usize = 32;

type CacheKey = (Option<u64>, Locale);

/// Least-recently-used cache of fakers keyed by seed and locale.
#[derive(Debug, Clone)]
pub struct FakerCache {
    capacity: usize,
    entries: IndexMap<CacheKey, Arc<Faker>>,
}

impl FakerCache {
    /// Creates a cache holding at most `capacity` fakers (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the cached faker for `(seed, locale)`, building it with
    /// `build` on a miss. The least recently used entry is evicted when
    /// the cache is full.
    pub fn get_or_insert_with<F>(&mut self, seed: Option<u64>, locale: Locale, build: F) -> Arc<Faker>
    where
        F: FnOnce() -> Faker,
    {
        let key = (seed, locale);
        if let Some(index) = self.entries.get_index_of(&key) {
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            if let Some((_, faker)) = self.entries.get_index(last) {
                return Arc::clone(faker);
            }
        }

        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        tracing::debug!(?seed, %locale, "instantiating faker");
        let faker = Arc::new(build());
        self.entries.insert(key, Arc::clone(&faker));
        faker
    }

    /// Drops every cached faker.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached fakers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a faker for `(seed, locale)` is cached.
    #[must_use]
    pub fn contains(&self, seed: Option<u64>, locale: Locale) -> bool {
        self.entries.contains_key(&(seed, locale))
    }
}

impl Default for FakerCache {
    fn default() -> Self {
        Self::new(FAKER_CACHE_CAPACITY)
    }
}
