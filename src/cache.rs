use log::debug;
use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::{AlgorithmKind, PathResult};
use crate::graph::Dimension;

/// Identifies one memoized query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub algorithm: AlgorithmKind,
    pub dimension: Dimension,
    pub start: String,
    pub end: String,
}

impl CacheKey {
    pub fn new(algorithm: AlgorithmKind, dimension: Dimension, start: &str, end: &str) -> Self {
        CacheKey {
            algorithm,
            dimension,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Whether either endpoint of the key is `node`
    pub fn touches(&self, node: &str) -> bool {
        self.start == node || self.end == node
    }
}

/// Counters reported by [`ResultCache::stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoizes query answers, including explicit "no path" answers.
///
/// Entries are keyed by endpoints only, so invalidation can only see the
/// endpoints of a cached query. A mutation of a city in the middle of a
/// cached path does not evict it.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<CacheKey, Option<PathResult>>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored answer. The outer `Option` is hit/miss, the inner
    /// one is the stored answer itself.
    pub fn get(&mut self, key: &CacheKey) -> Option<Option<PathResult>> {
        match self.entries.get(key) {
            Some(answer) => {
                self.hits += 1;
                debug!(
                    "Cache hit: {} {} {} -> {}",
                    key.algorithm, key.dimension, key.start, key.end
                );
                Some(answer.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, key: CacheKey, answer: Option<PathResult>) {
        self.entries.insert(key, answer);
    }

    /// Purges every entry whose start or end is `node`, returning how many
    pub fn invalidate_node(&mut self, node: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.touches(node));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!("Invalidated {} cached results touching {}", purged, node);
        }
        purged
    }

    /// Drops all entries and resets the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
