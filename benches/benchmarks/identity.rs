use criterion::{Criterion, criterion_group};

use cacheable::cacheable::harness::run;
use cacheable::cacheable::variant::VariantRegistry;
use cacheable::cacheable::workload::Workload;

use crate::benchmarks::common::MODULUS;

pub fn identity_single_threaded(criterion: &mut Criterion) {
    let registry = VariantRegistry::standard();
    let mut group = criterion.benchmark_group("Calculator.identity() | No contention");

    for label in registry.labels() {
        let variant = registry.build_variant(&label).unwrap();
        run(variant.calculator(), &Workload::new(MODULUS, MODULUS).unwrap());

        group.bench_function(label.as_str(), |bencher| {
            bencher.iter_custom(|iterations| {
                run(variant.calculator(), &Workload::new(iterations, MODULUS).unwrap()).elapsed
            });
        });
    }
    group.finish();
}

criterion_group!(benches, identity_single_threaded);
