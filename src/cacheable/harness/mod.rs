use std::hint::black_box;
use std::time::Instant;

use log::{error, info};

use crate::cacheable::calculator::Calculator;
use crate::cacheable::config::BenchmarkConfig;
use crate::cacheable::errors::Errors;
use crate::cacheable::harness::report::{BenchmarkReport, RunResult, VariantOutcome, VariantReport};
use crate::cacheable::types::{Accumulation, Label};
use crate::cacheable::variant::VariantRegistry;
use crate::cacheable::workload::Workload;

pub mod report;

/// Feeds every input of the workload to the calculator, timing the loop.
/// The returned values are summed (wrapping) into `RunResult::accumulated` so the calls cannot be optimized away.
pub fn run<C>(calculator: &C, workload: &Workload) -> RunResult
    where C: Calculator + ?Sized {
    let mut accumulated: Accumulation = 0;
    let start = Instant::now();
    for input in workload.inputs() {
        accumulated = accumulated.wrapping_add(black_box(calculator.identity(black_box(input))));
    }
    let elapsed = start.elapsed();

    RunResult {
        elapsed,
        accumulated: black_box(accumulated),
        reps: workload.reps(),
    }
}

/// Harness builds each selected variant from the registry and times it under the same workload.
/// A variant that fails to build is reported as failed and the remaining variants still run.
pub struct Harness {
    config: BenchmarkConfig,
    registry: VariantRegistry,
    workload: Workload,
    warmup: Workload,
}

impl Harness {
    pub fn new(config: BenchmarkConfig, registry: VariantRegistry) -> Result<Harness, Errors> {
        let workload = Workload::new(config.reps, config.modulus)?;
        let warmup = Workload::new(config.warmup_reps, config.modulus)?;
        Ok(Harness {
            config,
            registry,
            workload,
            warmup,
        })
    }

    pub fn labels(&self) -> Vec<Label> {
        if self.config.variants.is_empty() {
            return self.registry.labels();
        }
        self.config.variants.clone()
    }

    pub fn execute(&self) -> BenchmarkReport {
        let labels = self.labels();
        info!(
            "Running {} variants with {} trials of {} reps, modulus {} and {} warmup reps",
            labels.len(), self.config.trials, self.config.reps, self.config.modulus, self.config.warmup_reps
        );

        let outcomes = labels.into_iter().map(|label| {
            match self.execute_variant(&label) {
                Ok(report) => {
                    info!("Variant {} completed in {:.3} ns/call", label, report.best_nanos_per_call());
                    VariantOutcome::Completed(report)
                }
                Err(error) => {
                    error!("Variant {} failed: {}", label, error);
                    VariantOutcome::Failed { label, error }
                }
            }
        }).collect::<Vec<_>>();

        BenchmarkReport { outcomes }
    }

    /// Builds a fresh variant, warms it up and runs the configured number of trials on the same instance.
    /// Every trial must accumulate the same sum as the first one.
    pub fn execute_variant(&self, label: &str) -> Result<VariantReport, Errors> {
        let variant = self.registry.build_variant(label)?;
        let calculator = variant.calculator();

        if self.warmup.reps() > 0 {
            run(calculator, &self.warmup);
        }

        let mut trials: Vec<RunResult> = Vec::with_capacity(self.config.trials as usize);
        for _ in 0..self.config.trials {
            let run_result = run(calculator, &self.workload);
            if let Some(first) = trials.first() {
                if first.accumulated != run_result.accumulated {
                    return Err(Errors::InconsistentAccumulation(label.to_string()));
                }
            }
            trials.push(run_result);
        }

        Ok(VariantReport {
            label: variant.label().to_string(),
            trials,
            stats: calculator.stats_summary(),
        })
    }
}
