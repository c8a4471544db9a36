use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group};

use cacheable::cacheable::calculator::Calculator;
use cacheable::cacheable::types::Number;
use cacheable::cacheable::variant::{CACHEABLE_DYNAMIC_DISPATCH, MANUAL_CACHE_MANAGER, MANUAL_CONCURRENT_MAP, NO_CACHING, Variant, VariantRegistry};

use crate::benchmarks::common::{execute_parallel, MODULUS};

const LABELS: [&str; 4] = [NO_CACHING, MANUAL_CONCURRENT_MAP, MANUAL_CACHE_MANAGER, CACHEABLE_DYNAMIC_DISPATCH];

pub fn identity_8_threads(criterion: &mut Criterion) {
    identity_parallel(criterion, 8);
}

pub fn identity_16_threads(criterion: &mut Criterion) {
    identity_parallel(criterion, 16);
}

fn identity_parallel(criterion: &mut Criterion, thread_count: u8) {
    let registry = VariantRegistry::standard();
    for label in LABELS {
        let variant = Arc::new(registry.build_variant(label).unwrap());
        let id = format!("Calculator.identity() | {} | {} threads", label, thread_count);
        execute_parallel(criterion, &id, prepare_execution_block(variant), thread_count);
    }
}

fn prepare_execution_block(variant: Arc<Variant>) -> Arc<impl Fn(u64) + Send + Sync + 'static> {
    Arc::new(move |index| {
        let x = (index % MODULUS) as Number;
        black_box(variant.calculator().identity(black_box(x)));
    })
}

criterion_group!(benches, identity_8_threads, identity_16_threads);
