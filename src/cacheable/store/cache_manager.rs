use std::sync::Arc;

use dashmap::DashMap;
use log::debug;

use crate::cacheable::errors::Errors;
use crate::cacheable::store::{ConcurrentMapStore, StoreBackend};
use crate::cacheable::types::Number;

pub type CacheRegion = Arc<ConcurrentMapStore<Number, Number>>;

/// CacheManager owns a set of named cache regions, each an independent [`ConcurrentMapStore`].
/// A dynamic manager creates a region the first time its name is looked up,
/// a static manager only serves the regions it was created with.
pub struct CacheManager {
    regions: DashMap<String, CacheRegion>,
    dynamic: bool,
}

impl CacheManager {
    pub fn new() -> Self {
        CacheManager {
            regions: DashMap::new(),
            dynamic: true,
        }
    }

    pub fn with_cache_names<I, S>(cache_names: I) -> Self
        where I: IntoIterator<Item=S>,
              S: Into<String> {
        let regions = DashMap::new();
        for cache_name in cache_names {
            regions.insert(cache_name.into(), Arc::new(ConcurrentMapStore::new()));
        }
        CacheManager {
            regions,
            dynamic: false,
        }
    }

    pub fn cache(&self, name: &str) -> Option<CacheRegion> {
        if let Some(region) = self.regions.get(name) {
            return Some(region.value().clone());
        }
        if !self.dynamic {
            return None;
        }
        let region = self.regions
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!("Creating cache region {}", name);
                Arc::new(ConcurrentMapStore::new())
            });
        Some(region.value().clone())
    }

    pub fn cache_names(&self) -> Vec<String> {
        let mut names = self.regions.iter().map(|region| region.key().clone()).collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

/// NamedRegion is a [`StoreBackend`] that looks its region up in the [`CacheManager`] on every `get` and `put`.
/// `resolve` only succeeds if the manager provides the region, and a manager never drops a region,
/// so the per-call lookups always find it.
pub struct NamedRegion {
    cache_manager: Arc<CacheManager>,
    name: String,
}

impl NamedRegion {
    pub fn resolve(cache_manager: Arc<CacheManager>, name: &str) -> Result<NamedRegion, Errors> {
        if cache_manager.cache(name).is_none() {
            return Err(Errors::CacheRegionNotFound(name.to_string()));
        }
        Ok(NamedRegion {
            cache_manager,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl StoreBackend for NamedRegion {
    fn get(&self, key: &Number) -> Option<Number> {
        self.cache_manager.cache(&self.name).and_then(|region| region.get(key))
    }

    fn put(&self, key: Number, value: Number) {
        if let Some(region) = self.cache_manager.cache(&self.name) {
            region.put(key, value);
        }
    }
}
