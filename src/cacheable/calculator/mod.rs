use std::sync::Arc;

use crate::cacheable::stats::StatsSummary;
use crate::cacheable::types::Number;

pub mod caching;
pub mod counting;

/// Calculator is the single-method contract shared by the plain computation and every decorator around it.
/// Implementations must be callable from many threads at once.
pub trait Calculator: Send + Sync {
    fn identity(&self, x: Number) -> Number;

    /// Returns the hit/miss stats of a caching calculator, `None` for anything that does not cache.
    fn stats_summary(&self) -> Option<StatsSummary> {
        None
    }
}

/// PlainCalculator is the computation being memoized. It is stateless and returns its input.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlainCalculator;

impl Calculator for PlainCalculator {
    #[inline]
    fn identity(&self, x: Number) -> Number {
        x
    }
}

impl<C> Calculator for Box<C>
    where C: Calculator + ?Sized {
    fn identity(&self, x: Number) -> Number {
        (**self).identity(x)
    }

    fn stats_summary(&self) -> Option<StatsSummary> {
        (**self).stats_summary()
    }
}

impl<C> Calculator for Arc<C>
    where C: Calculator + ?Sized {
    fn identity(&self, x: Number) -> Number {
        (**self).identity(x)
    }

    fn stats_summary(&self) -> Option<StatsSummary> {
        (**self).stats_summary()
    }
}
