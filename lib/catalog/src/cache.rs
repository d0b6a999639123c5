//! Read-mostly TTL cache for prepared catalogs.
//!
//! Catalogs change rarely relative to request volume, so the prepared
//! snapshot is memoized keyed by source identity (file key plus a
//! modification marker) for a bounded time window. Entries are immutable
//! once populated; concurrent readers share the same snapshot.

use crate::build::PreparedCatalog;
use ahash::AHashMap;
use citrusmatch_core::Result;
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identity of a catalog source: where it came from and which revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: String,
    pub revision: u64,
}

impl CacheKey {
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<String>, revision: u64) -> Self {
        Self {
            source: source.into(),
            revision,
        }
    }
}

struct CacheEntry {
    catalog: PreparedCatalog,
    loaded_at: Instant,
}

/// TTL cache mapping catalog sources to prepared snapshots.
pub struct CatalogCache {
    ttl: Duration,
    entries: RwLock<AHashMap<CacheKey, CacheEntry>>,
}

impl CatalogCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(AHashMap::new()),
        }
    }

    /// Fetch a snapshot if one is cached and still fresh.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<PreparedCatalog> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.loaded_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.catalog.clone())
    }

    /// Fetch a fresh snapshot, preparing one via `load` on a miss.
    ///
    /// `load` runs outside the lock; if two threads race on the same cold
    /// key both prepare and the later insert wins, which is harmless since
    /// snapshots for a given key-revision are identical.
    pub fn get_or_insert_with<F>(&self, key: CacheKey, load: F) -> Result<PreparedCatalog>
    where
        F: FnOnce() -> Result<PreparedCatalog>,
    {
        if let Some(catalog) = self.get(&key) {
            debug!(source = %key.source, revision = key.revision, "catalog cache hit");
            return Ok(catalog);
        }

        debug!(source = %key.source, revision = key.revision, "catalog cache miss");
        let catalog = load()?;
        self.insert(key, catalog.clone());
        Ok(catalog)
    }

    pub fn insert(&self, key: CacheKey, catalog: PreparedCatalog) {
        let mut entries = self.entries.write();
        entries.insert(
            key,
            CacheEntry {
                catalog,
                loaded_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, key: &CacheKey) {
        self.entries.write().remove(key);
    }

    /// Drop every entry older than the TTL.
    pub fn purge_expired(&self) {
        let ttl = self.ttl;
        self.entries
            .write()
            .retain(|_, entry| entry.loaded_at.elapsed() < ttl);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citrusmatch_core::{CatalogItem, FeatureVector};
    use std::thread;

    fn snapshot() -> PreparedCatalog {
        PreparedCatalog::new(vec![CatalogItem::new(
            1,
            "Mikan",
            FeatureVector::new([5.0, 2.0, 1.0, 3.0, 5.0, 2.0]),
        )])
    }

    #[test]
    fn second_lookup_does_not_reload() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        let key = CacheKey::new("catalog.json", 1);

        let mut loads = 0;
        cache
            .get_or_insert_with(key.clone(), || {
                loads += 1;
                Ok(snapshot())
            })
            .unwrap();
        cache
            .get_or_insert_with(key, || {
                loads += 1;
                Ok(snapshot())
            })
            .unwrap();
        assert_eq!(loads, 1);
    }

    #[test]
    fn expired_entries_miss() {
        let cache = CatalogCache::new(Duration::from_millis(10));
        let key = CacheKey::new("catalog.json", 1);
        cache.insert(key.clone(), snapshot());
        assert!(cache.get(&key).is_some());

        thread::sleep(Duration::from_millis(20));
        assert!(cache.get(&key).is_none());

        cache.purge_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn revision_change_is_a_different_key() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        cache.insert(CacheKey::new("catalog.json", 1), snapshot());
        assert!(cache.get(&CacheKey::new("catalog.json", 2)).is_none());
    }

    #[test]
    fn invalidate_removes_the_entry() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        let key = CacheKey::new("catalog.json", 1);
        cache.insert(key.clone(), snapshot());
        cache.invalidate(&key);
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn load_failure_is_not_cached() {
        let cache = CatalogCache::new(Duration::from_secs(60));
        let key = CacheKey::new("catalog.json", 1);
        let result = cache.get_or_insert_with(key.clone(), || {
            Err(citrusmatch_core::Error::EmptyCatalog)
        });
        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}
