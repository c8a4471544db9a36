use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

const TOTAL_STATS: usize = 3;

/// Defines various stats that are measured by a caching decorator.
#[repr(usize)]
#[non_exhaustive]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StatsType {
    /// Defines the number of calls answered from the cache store
    CacheHits = 0,
    /// Defines the number of calls that reached the wrapped computation
    CacheMisses = 1,
    /// Defines the number of values written to the cache store
    KeysAdded = 2,
}

impl StatsType {
    const VALUES: [Self; TOTAL_STATS] = [
        Self::CacheHits,
        Self::CacheMisses,
        Self::KeysAdded,
    ];
}

/// StatsSummary is view representation of various stats represented by [`StatsType`].
#[derive(Debug, PartialEq, Clone)]
pub struct StatsSummary {
    pub stats_by_type: HashMap<StatsType, u64>,
    pub hit_ratio: f64,
}

impl StatsSummary {
    pub(crate) fn new(stats_by_type: HashMap<StatsType, u64>, hit_ratio: f64) -> Self {
        StatsSummary {
            stats_by_type,
            hit_ratio,
        }
    }

    /// Returns an Option&lt;u64&gt; counter corresponding to the [`StatsType`].
    pub fn get(&self, stats_type: &StatsType) -> Option<u64> {
        self.stats_by_type.get(stats_type).copied()
    }
}

/// StatsRecorder receives the hit, miss and write events of a caching decorator.
pub trait StatsRecorder: Send + Sync {
    fn found_a_hit(&self);

    fn found_a_miss(&self);

    fn add_key(&self);

    fn summary(&self) -> Option<StatsSummary>;
}

/// NoStats discards every event. It is the recorder of the benchmarked decorators, keeping the timed path to a `get` and a `put`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoStats;

impl StatsRecorder for NoStats {
    #[inline(always)]
    fn found_a_hit(&self) {}

    #[inline(always)]
    fn found_a_miss(&self) {}

    #[inline(always)]
    fn add_key(&self) {}

    fn summary(&self) -> Option<StatsSummary> {
        None
    }
}

#[repr(transparent)]
#[derive(Debug)]
struct Counter(CachePadded<AtomicU64>);

/// ConcurrentStatsCounter measures the stats defined by [`StatsType`].
/// Each entry is a [`crossbeam_utils::CachePadded`] AtomicU64, one cache line per counter.
pub struct ConcurrentStatsCounter {
    entries: [Counter; TOTAL_STATS],
}

impl ConcurrentStatsCounter {
    pub fn new() -> Self {
        ConcurrentStatsCounter {
            entries: [
                Counter(CachePadded::new(AtomicU64::new(0))),
                Counter(CachePadded::new(AtomicU64::new(0))),
                Counter(CachePadded::new(AtomicU64::new(0))),
            ]
        }
    }

    pub(crate) fn found_a_hit(&self) { self.add(StatsType::CacheHits, 1); }

    pub(crate) fn found_a_miss(&self) { self.add(StatsType::CacheMisses, 1); }

    pub(crate) fn add_key(&self) { self.add(StatsType::KeysAdded, 1); }

    pub(crate) fn hits(&self) -> u64 { self.get(&StatsType::CacheHits) }

    pub(crate) fn misses(&self) -> u64 { self.get(&StatsType::CacheMisses) }

    pub(crate) fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            return 0.0;
        }
        (hits as f64) / total as f64
    }

    pub(crate) fn summary(&self) -> StatsSummary {
        let mut stats_by_type = HashMap::new();
        for stats_type in StatsType::VALUES.iter().copied() {
            stats_by_type.insert(stats_type, self.get(&stats_type));
        }
        StatsSummary::new(stats_by_type, self.hit_ratio())
    }

    fn add(&self, stats_type: StatsType, count: u64) {
        self.entries[stats_type as usize].0.fetch_add(count, Ordering::Relaxed);
    }

    fn get(&self, stats_type: &StatsType) -> u64 {
        self.entries[*stats_type as usize].0.load(Ordering::Relaxed)
    }
}

impl Default for ConcurrentStatsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsRecorder for ConcurrentStatsCounter {
    fn found_a_hit(&self) { ConcurrentStatsCounter::found_a_hit(self) }

    fn found_a_miss(&self) { ConcurrentStatsCounter::found_a_miss(self) }

    fn add_key(&self) { ConcurrentStatsCounter::add_key(self) }

    fn summary(&self) -> Option<StatsSummary> {
        Some(ConcurrentStatsCounter::summary(self))
    }
}


#[cfg(test)]
mod stats_summary_tests {
    use std::collections::HashMap;

    use crate::cacheable::stats::{StatsSummary, StatsType};

    #[test]
    fn missing_stats() {
        let summary = StatsSummary::new(HashMap::new(), 0.0);
        assert_eq!(None, summary.get(&StatsType::CacheHits));
    }

    #[test]
    fn stats_value_by_its_type() {
        let mut stats_by_type = HashMap::new();
        stats_by_type.insert(StatsType::CacheHits, 16);
        stats_by_type.insert(StatsType::KeysAdded, 5);

        let summary = StatsSummary::new(stats_by_type, 1.0);
        assert_eq!(Some(16), summary.get(&StatsType::CacheHits));
        assert_eq!(Some(5), summary.get(&StatsType::KeysAdded));
    }
}
