//! Resolved-style caching.

use std::collections::HashMap;
use std::sync::Arc;

use crate::region::Region;
use crate::style::Style;

/// Cache key: the component identity bindings are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolveKey {
    region: Region,
    name: Option<Box<str>>,
}

impl ResolveKey {
    /// Create a new cache key.
    pub fn new(region: Region, name: Option<&str>) -> Self {
        Self {
            region,
            name: name.map(Into::into),
        }
    }
}

/// Bounded cache of resolved styles.
pub struct StyleCache {
    /// Cached resolved styles.
    cache: HashMap<ResolveKey, Arc<Style>>,
    /// Maximum cache entries.
    max_size: usize,
}

impl StyleCache {
    /// Create a new style cache.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a cache with specific capacity.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size.min(1024)),
            max_size: max_size.max(1),
        }
    }

    /// Get a cached style.
    pub fn get(&self, key: &ResolveKey) -> Option<&Arc<Style>> {
        self.cache.get(key)
    }

    /// Insert a resolved style into the cache.
    pub fn insert(&mut self, key: ResolveKey, style: Arc<Style>) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            self.evict_half();
        }
        self.cache.insert(key, style);
    }

    /// Invalidate all cached styles.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Evict half the entries (simple LRU approximation).
    fn evict_half(&mut self) {
        let target = (self.cache.len() / 2).max(1);
        let keys: Vec<_> = self.cache.keys().take(target).cloned().collect();
        for key in keys {
            self.cache.remove(&key);
        }
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new()
    }
}
