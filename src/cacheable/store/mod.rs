use std::hash::Hash;

use dashmap::DashMap;

use crate::cacheable::types::Number;

pub mod cache_manager;

/// StoreBackend is the concurrent mapping a caching decorator memoizes into.
/// Only single-key `get` and `put` are atomic; a `get` followed by a `put` is not,
/// so two callers missing on the same key may both write it and the last write wins.
pub trait StoreBackend: Send + Sync {
    fn get(&self, key: &Number) -> Option<Number>;

    fn put(&self, key: Number, value: Number);
}

/// ConcurrentMapStore is an unbounded, never-expiring key/value mapping backed by [`dashmap::DashMap`].
/// Every read returns a copy of the stored value, so no shard guard outlives the call.
pub struct ConcurrentMapStore<Key, Value>
    where Key: Hash + Eq, {
    store: DashMap<Key, Value>,
}

impl<Key, Value> ConcurrentMapStore<Key, Value>
    where Key: Hash + Eq, {
    pub fn new() -> Self {
        ConcurrentMapStore {
            store: DashMap::new(),
        }
    }

    pub fn put(&self, key: Key, value: Value) {
        self.store.insert(key, value);
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.store.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<Key, Value> ConcurrentMapStore<Key, Value>
    where Key: Hash + Eq,
          Value: Clone, {
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.store.get(key).map(|key_value_ref| key_value_ref.value().clone())
    }
}

impl<Key, Value> Default for ConcurrentMapStore<Key, Value>
    where Key: Hash + Eq, {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for ConcurrentMapStore<Number, Number> {
    fn get(&self, key: &Number) -> Option<Number> {
        ConcurrentMapStore::get(self, key)
    }

    fn put(&self, key: Number, value: Number) {
        ConcurrentMapStore::put(self, key, value)
    }
}
