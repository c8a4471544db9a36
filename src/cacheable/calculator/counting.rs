use std::sync::atomic::{AtomicU64, Ordering};

use crate::cacheable::calculator::Calculator;
use crate::cacheable::stats::StatsSummary;
use crate::cacheable::types::Number;

/// CountingCalculator counts how many times its target computation is invoked.
/// Placed beneath a caching decorator it shows which calls were suppressed by cache hits.
pub struct CountingCalculator<C>
    where C: Calculator {
    target: C,
    invocations: AtomicU64,
}

impl<C> CountingCalculator<C>
    where C: Calculator {
    pub fn new(target: C) -> Self {
        CountingCalculator {
            target,
            invocations: AtomicU64::new(0),
        }
    }

    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Acquire)
    }
}

impl<C> Calculator for CountingCalculator<C>
    where C: Calculator {
    fn identity(&self, x: Number) -> Number {
        self.invocations.fetch_add(1, Ordering::AcqRel);
        self.target.identity(x)
    }

    fn stats_summary(&self) -> Option<StatsSummary> {
        self.target.stats_summary()
    }
}
