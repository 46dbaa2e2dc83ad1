//! Bounded, time-expiring translation result cache.
//! Key: blake3 hash of (source_lang | target_lang | text).
//! Under size pressure: purge expired entries first, then evict the 100
//! oldest-inserted entries in one batch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;

use crate::service::TranslationResult;

/// How many of the oldest entries get evicted when a purge of expired
/// entries is not enough to bring the cache under its bound.
const EVICT_BATCH: usize = 100;

/// Fingerprint of a (source, target, text) request triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    pub fn compute(source_lang: &str, target_lang: &str, text: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(source_lang.as_bytes());
        hasher.update(b"|");
        hasher.update(target_lang.as_bytes());
        hasher.update(b"|");
        hasher.update(text.as_bytes());
        CacheKey(*hasher.finalize().as_bytes())
    }
}

struct CacheEntry {
    value: TranslationResult,
    inserted_at: Instant,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
}

/// In-memory result cache. One mutex guards all operations.
pub struct ResultCache {
    inner: Mutex<HashMap<CacheKey, CacheEntry>>,
    max_size: usize,
    expiry: Duration,
}

impl ResultCache {
    pub fn new(max_size: usize, expiry: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            max_size,
            expiry,
        }
    }

    /// Look up a cached result. Expired entries are treated as absent but
    /// are left in place; they are only removed by size-pressure cleanup.
    pub fn get(&self, key: &CacheKey) -> Option<TranslationResult> {
        let map = self.inner.lock();
        map.get(key)
            .filter(|entry| entry.inserted_at.elapsed() < self.expiry)
            .map(|entry| entry.value.clone())
    }

    /// Insert or overwrite a result. If the cache is at capacity, expired
    /// entries are purged first; if that is not enough, the oldest-inserted
    /// entries are evicted in a fixed batch (ties broken by key ordering).
    pub fn set(&self, key: CacheKey, value: TranslationResult) {
        let mut map = self.inner.lock();
        if map.len() >= self.max_size {
            map.retain(|_, entry| entry.inserted_at.elapsed() < self.expiry);
            if map.len() >= self.max_size {
                let mut by_age: Vec<(Instant, CacheKey)> = map
                    .iter()
                    .map(|(key, entry)| (entry.inserted_at, *key))
                    .collect();
                by_age.sort();
                for (_, old) in by_age.into_iter().take(EVICT_BATCH) {
                    map.remove(&old);
                }
            }
        }
        map.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.inner.lock().len(),
            max_size: self.max_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> TranslationResult {
        TranslationResult {
            success: true,
            translated_text: Some(text.to_string()),
            detected_language: Some("en".to_string()),
            confidence: 1.0,
            original_text: Some(text.to_string()),
            source_language_name: None,
            target_language_name: None,
            error: None,
        }
    }

    fn key_for(n: usize) -> CacheKey {
        CacheKey::compute("en", "fr", &format!("text-{n}"))
    }

    #[test]
    fn get_returns_stored_value() {
        let cache = ResultCache::new(10, Duration::from_secs(3600));
        let key = CacheKey::compute("auto", "fr", "Hello");
        assert!(cache.get(&key).is_none());
        cache.set(key, result("Bonjour"));
        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.translated_text.as_deref(), Some("Bonjour"));
    }

    #[test]
    fn distinct_source_codes_produce_distinct_keys() {
        let auto = CacheKey::compute("auto", "fr", "Hello");
        let explicit = CacheKey::compute("en", "fr", "Hello");
        assert_ne!(auto, explicit);
    }

    #[test]
    fn expired_entry_is_absent_but_still_counted() {
        let cache = ResultCache::new(10, Duration::ZERO);
        let key = key_for(0);
        cache.set(key, result("stale"));
        assert!(cache.get(&key).is_none());
        // Not removed on the read path; only size-pressure cleanup purges it.
        assert_eq!(cache.stats().size, 1);
    }

    #[test]
    fn size_pressure_purges_expired_before_evicting() {
        let cache = ResultCache::new(3, Duration::ZERO);
        for n in 0..3 {
            cache.set(key_for(n), result("x"));
        }
        // At capacity, but every entry is expired: the purge makes room
        // without touching the eviction batch.
        cache.set(key_for(3), result("y"));
        assert_eq!(cache.stats().size, 1);
    }

    #[test]
    fn size_pressure_evicts_oldest_batch_of_fresh_entries() {
        let cache = ResultCache::new(150, Duration::from_secs(3600));
        for n in 0..150 {
            cache.set(key_for(n), result("x"));
        }
        assert_eq!(cache.stats().size, 150);
        cache.set(key_for(150), result("y"));
        // 100 oldest evicted, then the new entry lands: 150 - 100 + 1.
        let stats = cache.stats();
        assert_eq!(stats.size, 51);
        assert!(stats.size <= stats.max_size);
        // The newest pre-eviction entries survive.
        assert!(cache.get(&key_for(149)).is_some());
        assert!(cache.get(&key_for(150)).is_some());
        assert!(cache.get(&key_for(0)).is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let cache = ResultCache::new(10, Duration::from_secs(3600));
        for n in 0..5 {
            cache.set(key_for(n), result("x"));
        }
        cache.clear();
        assert_eq!(cache.stats().size, 0);
        assert!(cache.get(&key_for(0)).is_none());
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let cache = ResultCache::new(10, Duration::from_secs(3600));
        let key = key_for(0);
        cache.set(key, result("first"));
        cache.set(key, result("second"));
        assert_eq!(cache.stats().size, 1);
        assert_eq!(
            cache.get(&key).unwrap().translated_text.as_deref(),
            Some("second")
        );
    }
}
