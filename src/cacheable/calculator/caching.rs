use crate::cacheable::calculator::Calculator;
use crate::cacheable::stats::{ConcurrentStatsCounter, NoStats, StatsRecorder, StatsSummary};
use crate::cacheable::store::cache_manager::NamedRegion;
use crate::cacheable::store::{ConcurrentMapStore, StoreBackend};
use crate::cacheable::types::Number;

/// CachingCalculator memoizes the results of its target [`Calculator`] in a [`StoreBackend`].
///
/// `identity(x)` looks `x` up in the store and returns the stored value on a hit, without invoking the target.
/// On a miss it invokes the target, stores the result under `x` and returns it.
///
/// There is no single-flight: the lookup and the write are two separate atomic operations on the store,
/// so callers missing on the same key concurrently all invoke the target and the last write wins.
/// The target is never invoked while a store guard is held.
///
/// Hits and misses go to a [`StatsRecorder`]. The default [`NoStats`] compiles to nothing,
/// `with_stats` swaps in a [`ConcurrentStatsCounter`].
pub struct CachingCalculator<C, B, S = NoStats>
    where C: Calculator,
          B: StoreBackend,
          S: StatsRecorder {
    target: C,
    store: B,
    stats: S,
}

impl<C> CachingCalculator<C, ConcurrentMapStore<Number, Number>>
    where C: Calculator {
    /// Creates a decorator memoizing into a map private to this instance.
    pub fn with_concurrent_map(target: C) -> Self {
        Self::new(target, ConcurrentMapStore::new())
    }
}

impl<C> CachingCalculator<C, NamedRegion>
    where C: Calculator {
    /// Creates a decorator memoizing into a region of a `CacheManager`, looked up by name on every call.
    pub fn with_named_region(target: C, region: NamedRegion) -> Self {
        Self::new(target, region)
    }
}

impl<C, B> CachingCalculator<C, B>
    where C: Calculator,
          B: StoreBackend {
    pub fn new(target: C, store: B) -> Self {
        CachingCalculator {
            target,
            store,
            stats: NoStats,
        }
    }

    /// Returns the same decorator counting hits, misses and keys added.
    pub fn with_stats(self) -> CachingCalculator<C, B, ConcurrentStatsCounter> {
        CachingCalculator {
            target: self.target,
            store: self.store,
            stats: ConcurrentStatsCounter::new(),
        }
    }
}

impl<C, B, S> CachingCalculator<C, B, S>
    where C: Calculator,
          B: StoreBackend,
          S: StatsRecorder {
    pub fn store(&self) -> &B {
        &self.store
    }
}

impl<C, B, S> Calculator for CachingCalculator<C, B, S>
    where C: Calculator,
          B: StoreBackend,
          S: StatsRecorder {
    fn identity(&self, x: Number) -> Number {
        if let Some(existing) = self.store.get(&x) {
            self.stats.found_a_hit();
            return existing;
        }
        self.stats.found_a_miss();

        let new_value = self.target.identity(x);
        self.store.put(x, new_value);
        self.stats.add_key();
        new_value
    }

    fn stats_summary(&self) -> Option<StatsSummary> {
        self.stats.summary()
    }
}
