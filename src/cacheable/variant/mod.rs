use std::sync::Arc;

use log::debug;

use crate::cacheable::calculator::{Calculator, PlainCalculator};
use crate::cacheable::calculator::caching::CachingCalculator;
use crate::cacheable::errors::Errors;
use crate::cacheable::store::cache_manager::{CacheManager, NamedRegion};
use crate::cacheable::store::StoreBackend;
use crate::cacheable::types::Label;

pub const NO_CACHING: &str = "no_caching";
pub const MANUAL_CONCURRENT_MAP: &str = "manual_concurrent_map";
pub const MANUAL_CACHE_MANAGER: &str = "manual_cache_manager";
pub const CUSTOM_ASPECT_CONCURRENT_MAP: &str = "custom_aspect_concurrent_map";
pub const CACHEABLE_STATIC_DISPATCH: &str = "cacheable_static_dispatch";
pub const CACHEABLE_DYNAMIC_DISPATCH: &str = "cacheable_dynamic_dispatch";
pub const CACHEABLE_WOVEN: &str = "cacheable_woven";

const IDENTITY_REGION: &str = "identity";

pub type VariantFactory = dyn Fn() -> Result<Variant, Errors> + Send + Sync;

/// Variant is a named calculator, possibly wrapped by a caching decorator, that is benchmarked on its own.
pub struct Variant {
    label: Label,
    calculator: Box<dyn Calculator>,
}

impl Variant {
    pub fn new(label: &str, calculator: Box<dyn Calculator>) -> Self {
        Variant {
            label: label.to_string(),
            calculator,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn calculator(&self) -> &dyn Calculator {
        self.calculator.as_ref()
    }
}

/// VariantRegistry maps a label to the factory building its variant.
/// Every `build_variant` call runs the factory again, so each built variant starts with its own cold store.
pub struct VariantRegistry {
    factories: Vec<(Label, Box<VariantFactory>)>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        VariantRegistry {
            factories: Vec::new(),
        }
    }

    /// Returns a registry with the wirings compared by the benchmark, in reporting order.
    /// Its caching decorators record no stats.
    pub fn standard() -> Self {
        Self::wirings(false)
    }

    /// Returns the standard wirings with caching decorators counting hits, misses and keys added.
    /// Timings taken from this registry include the counters.
    pub fn instrumented() -> Self {
        Self::wirings(true)
    }

    fn wirings(with_stats: bool) -> Self {
        let mut registry = VariantRegistry::new();
        registry.register(NO_CACHING, || {
            Ok(Variant::new(NO_CACHING, Box::new(PlainCalculator)))
        });
        registry.register(MANUAL_CONCURRENT_MAP, move || {
            Ok(Variant::new(MANUAL_CONCURRENT_MAP, boxed(CachingCalculator::with_concurrent_map(PlainCalculator), with_stats)))
        });
        registry.register(MANUAL_CACHE_MANAGER, move || {
            let region = NamedRegion::resolve(Arc::new(CacheManager::new()), IDENTITY_REGION)?;
            Ok(Variant::new(MANUAL_CACHE_MANAGER, boxed(CachingCalculator::with_named_region(PlainCalculator, region), with_stats)))
        });
        registry.register(CUSTOM_ASPECT_CONCURRENT_MAP, move || {
            let target: Box<dyn Calculator> = Box::new(PlainCalculator);
            Ok(Variant::new(CUSTOM_ASPECT_CONCURRENT_MAP, boxed(CachingCalculator::with_concurrent_map(target), with_stats)))
        });
        registry.register(CACHEABLE_STATIC_DISPATCH, move || {
            let region = NamedRegion::resolve(Arc::new(CacheManager::with_cache_names([IDENTITY_REGION])), IDENTITY_REGION)?;
            Ok(Variant::new(CACHEABLE_STATIC_DISPATCH, boxed(CachingCalculator::with_named_region(PlainCalculator, region), with_stats)))
        });
        registry.register(CACHEABLE_DYNAMIC_DISPATCH, move || {
            let region = NamedRegion::resolve(Arc::new(CacheManager::with_cache_names([IDENTITY_REGION])), IDENTITY_REGION)?;
            let target: Box<dyn Calculator> = Box::new(PlainCalculator);
            Ok(Variant::new(CACHEABLE_DYNAMIC_DISPATCH, boxed(CachingCalculator::with_named_region(target, region), with_stats)))
        });
        registry.register(CACHEABLE_WOVEN, move || {
            let region = NamedRegion::resolve(Arc::new(CacheManager::new()), IDENTITY_REGION)?;
            let target: Arc<dyn Calculator> = Arc::new(PlainCalculator);
            Ok(Variant::new(CACHEABLE_WOVEN, boxed(CachingCalculator::with_named_region(target, region), with_stats)))
        });
        registry
    }

    /// Registers the factory under the label, replacing an existing factory with the same label.
    pub fn register<F>(&mut self, label: &str, factory: F)
        where F: Fn() -> Result<Variant, Errors> + Send + Sync + 'static {
        let factory: Box<VariantFactory> = Box::new(factory);
        match self.factories.iter_mut().find(|(existing, _)| existing == label) {
            Some(entry) => entry.1 = factory,
            None => self.factories.push((label.to_string(), factory)),
        }
    }

    pub fn labels(&self) -> Vec<Label> {
        self.factories.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.factories.iter().any(|(existing, _)| existing == label)
    }

    pub fn build_variant(&self, label: &str) -> Result<Variant, Errors> {
        let (_, factory) = self.factories
            .iter()
            .find(|(existing, _)| existing == label)
            .ok_or_else(|| Errors::UnknownVariant(label.to_string()))?;

        debug!("Building variant {}", label);
        factory()
    }
}

fn boxed<C, B>(calculator: CachingCalculator<C, B>, with_stats: bool) -> Box<dyn Calculator>
    where C: Calculator + 'static,
          B: StoreBackend + 'static {
    if with_stats {
        return Box::new(calculator.with_stats());
    }
    Box::new(calculator)
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
