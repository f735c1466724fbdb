//! Bounded preview cache with strict FIFO eviction.
//!
//! The oldest *inserted* key is evicted on overflow. Reads never reorder the
//! queue, and re-inserting an existing key replaces its value in place without
//! moving it to the back.

use std::collections::{HashMap, VecDeque};

use crate::models::site::RenderedAssets;
use crate::preview::fingerprint::Fingerprint;

#[derive(Debug)]
pub struct PreviewCache {
    capacity: usize,
    entries: HashMap<Fingerprint, RenderedAssets>,
    order: VecDeque<Fingerprint>,
}

impl PreviewCache {
    /// `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Fingerprint) -> Option<&RenderedAssets> {
        self.entries.get(key)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `assets`, returning the evicted key if the insert overflowed.
    pub fn insert(&mut self, key: Fingerprint, assets: RenderedAssets) -> Option<Fingerprint> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = assets;
            return None;
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, assets);

        if self.entries.len() > self.capacity {
            let oldest = self.order.pop_front()?;
            self.entries.remove(&oldest);
            return Some(oldest);
        }
        None
    }

    pub fn remove(&mut self, key: &Fingerprint) -> Option<RenderedAssets> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    /// Drops every entry, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.order.clear();
        count
    }

    /// Keys in insertion order, oldest first.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &Fingerprint> {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Fingerprint {
        Fingerprint::parse(&format!("{n:064x}")).unwrap()
    }

    fn assets(label: &str) -> RenderedAssets {
        RenderedAssets {
            html: label.to_string(),
            ..RenderedAssets::default()
        }
    }

    #[test]
    fn test_sixth_insert_evicts_first_even_after_reads() {
        let mut cache = PreviewCache::new(5);
        for n in 1..=5 {
            assert_eq!(cache.insert(key(n), assets("x")), None);
        }
        // Recently read, still the oldest insertion.
        assert!(cache.get(&key(1)).is_some());

        let evicted = cache.insert(key(6), assets("x"));
        assert_eq!(evicted, Some(key(1)));
        assert_eq!(cache.len(), 5);
        assert!(!cache.contains(&key(1)));
        assert!((2..=6).all(|n| cache.contains(&key(n))));
    }

    #[test]
    fn test_reinsert_replaces_value_without_moving() {
        let mut cache = PreviewCache::new(2);
        cache.insert(key(1), assets("old"));
        cache.insert(key(2), assets("b"));
        assert_eq!(cache.insert(key(1), assets("new")), None);
        assert_eq!(cache.get(&key(1)).map(|a| a.html.as_str()), Some("new"));

        assert_eq!(cache.insert(key(3), assets("c")), Some(key(1)));
        assert_eq!(cache.keys().cloned().collect::<Vec<_>>(), vec![key(2), key(3)]);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut cache = PreviewCache::new(3);
        for n in 0..20 {
            cache.insert(key(n), assets("x"));
            assert!(cache.len() <= 3);
        }
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = PreviewCache::new(3);
        cache.insert(key(1), assets("a"));
        cache.insert(key(2), assets("b"));
        assert!(cache.remove(&key(1)).is_some());
        assert!(cache.remove(&key(1)).is_none());
        assert_eq!(cache.keys().count(), 1);
        assert_eq!(cache.clear(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut cache = PreviewCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert(key(1), assets("a"));
        assert_eq!(cache.insert(key(2), assets("b")), Some(key(1)));
    }
}
