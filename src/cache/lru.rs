use std::hash::Hash;

use indexmap::IndexMap;

/// Bounded map with least-recently-used eviction.
///
/// Entries are kept in recency order: the front is the oldest, the back the most recently used.
/// `len() <= max_size()` holds after every call.
#[derive(Clone, Debug)]
pub struct LruCache<K, V> {
    entries: IndexMap<K, V>,
    max_size: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty cache holding at most `max_size` entries (minimum 1).
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            max_size: max_size.max(1),
        }
    }

    /// Look up `key` and mark it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(idx, last);
        self.entries.get_index(last).map(|(_, v)| v)
    }

    /// Look up `key` without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether `key` is cached, without touching recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or refresh `key`.
    ///
    /// An existing key is removed and reinserted at the back. A new key evicts the oldest entry
    /// first when the cache is full. Returns the evicted entry, if any.
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.entries.shift_remove(&key).is_some() {
            self.entries.insert(key, value);
            return None;
        }
        let evicted = if self.entries.len() >= self.max_size {
            self.entries.shift_remove_index(0)
        } else {
            None
        };
        self.entries.insert(key, value);
        evicted
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity bound.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/lru.rs"]
mod tests;
