//! Memoization of per-word cue fragments
//!
//! Keyed by orthographic form. Pure memoization: a hit returns exactly
//! what a recomputation would, only cheaper.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::cue::WordCues;
use crate::error::Result;

/// Counters describing cache effectiveness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Thread-safe word -> [`WordCues`] cache.
///
/// [`get_or_try_insert_with`](Self::get_or_try_insert_with) is atomic per
/// key: concurrent callers for the same word compute it once. The
/// computation runs under a lock for that word only, so lookups of other
/// words never wait on it. Failed computations are not stored.
#[derive(Debug, Default)]
pub struct TranscriptionCache {
    entries: RwLock<HashMap<String, Arc<WordCues>>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TranscriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached fragments for `word`, if present
    pub fn get(&self, word: &str) -> Option<Arc<WordCues>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
            .cloned()
    }

    /// Return the cached fragments for `word`, computing and inserting them
    /// with `compute` on a miss.
    pub fn get_or_try_insert_with<F>(&self, word: &str, compute: F) -> Result<Arc<WordCues>>
    where
        F: FnOnce() -> Result<WordCues>,
    {
        if let Some(hit) = self.get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit);
        }

        let slot = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(word.to_string())
            .or_default()
            .clone();
        let _guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished this word while we waited
        if let Some(hit) = self.get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = compute().map(Arc::new);
        if let Ok(value) = &computed {
            self.entries
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(word.to_string(), value.clone());
        }
        self.release(word, &slot);
        computed
    }

    /// Drop the in-flight lock for `word` unless a newer one replaced it
    fn release(&self, word: &str, slot: &Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if in_flight.get(word).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            in_flight.remove(word);
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
