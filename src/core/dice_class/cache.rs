//! Memo table for classification results.
//!
//! Results are keyed by creature id only. The cache has no way to notice
//! that a creature's stats changed under the same id, so callers that reload
//! or correct profile data must call [`ClassificationCache::clear`] (or
//! [`ClassificationCache::invalidate`] for a single id) themselves.
//!
//! Entries are never evicted implicitly: the underlying `LruCache` is
//! created unbounded.
//!
//! # Thread Safety
//!
//! State lives behind a `std::sync::Mutex`. The lock is only held for the
//! map operation itself, never while rules run, so two threads classifying
//! the same uncached id both compute and the last write wins. Both values
//! are equal, so the race only costs redundant work.

use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;
use serde::{Deserialize, Serialize};

use super::types::ClassificationResult;

/// Hit/miss counters for a [`ClassificationCache`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries removed by `invalidate` or `clear`.
    pub invalidations: u64,
    pub current_size: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`. Returns 0.0 if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CacheState {
    entries: LruCache<String, Arc<ClassificationResult>>,
    stats: CacheStats,
}

/// Id-keyed store of previously computed results.
pub struct ClassificationCache {
    state: Mutex<CacheState>,
    enabled: bool,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded(),
                stats: CacheStats::default(),
            }),
            enabled: true,
        }
    }

    /// A cache that never stores anything. Every lookup misses.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Look up a stored result.
    pub fn get(&self, id: &str) -> Option<Arc<ClassificationResult>> {
        if !self.enabled {
            return None;
        }
        let mut state = self.lock();
        let found = state.entries.get(id).cloned();
        if found.is_some() {
            state.stats.hits += 1;
        } else {
            state.stats.misses += 1;
        }
        found
    }

    /// Store a result, replacing any previous entry for `id`.
    pub fn put(&self, id: &str, result: Arc<ClassificationResult>) {
        if !self.enabled {
            return;
        }
        let mut state = self.lock();
        state.entries.put(id.to_string(), result);
    }

    /// Remove one entry. Returns whether an entry was present.
    pub fn invalidate(&self, id: &str) -> bool {
        let mut state = self.lock();
        let removed = state.entries.pop(id).is_some();
        if removed {
            state.stats.invalidations += 1;
        }
        removed
    }

    /// Discard every stored result.
    pub fn clear(&self) {
        let mut state = self.lock();
        let count = state.entries.len() as u64;
        state.entries.clear();
        state.stats.invalidations += count;
        tracing::debug!(cleared = count, "Cleared classification cache");
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            current_size: state.entries.len(),
            ..state.stats.clone()
        }
    }

    // Entries are only ever whole values, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ClassificationCache {
    fn default() -> Self {
        Self::new()
    }
}
