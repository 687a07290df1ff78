//! Bounded analysis memo.
//!
//! Keys are a fast non-cryptographic hash of the message text: this is a
//! collision-tolerant memoization aid, not a content-addressing or
//! integrity mechanism. Eviction is strict insertion order (FIFO) — reads
//! never promote an entry, and nothing here is LRU. Entries never expire
//! and are never invalidated by external state change; that limitation is
//! accepted, not worked around.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;

use crate::models::AnalysisResult;

pub const DEFAULT_CAPACITY: usize = 100;

/// Cheap 64-bit content key for cache lookups
pub fn content_key(text: &str) -> u64 {
    fxhash::hash64(text)
}

struct Inner {
    entries: HashMap<u64, AnalysisResult>,
    // Insertion order; front is the oldest entry
    order: VecDeque<u64>,
}

/// Bounded FIFO cache of prior analyses
pub struct ResultCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: u64) -> Option<AnalysisResult> {
        self.inner.lock().entries.get(&key).cloned()
    }

    /// Insert a result. Re-inserting an existing key replaces the value
    /// (last write wins) without touching its insertion position; results
    /// are deterministic for identical input, so concurrent puts are safe.
    pub fn put(&self, key: u64, value: AnalysisResult) {
        let mut inner = self.inner.lock();
        if inner.entries.insert(key, value).is_some() {
            return;
        }
        inner.order.push_back(key);
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
