use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::cacheable::errors::Errors;
use crate::cacheable::stats::StatsSummary;
use crate::cacheable::types::{Accumulation, Label, Reps};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// RunResult is the measurement of one timed run of a variant over a workload.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RunResult {
    pub elapsed: Duration,
    pub accumulated: Accumulation,
    pub reps: Reps,
}

impl RunResult {
    pub fn nanos_per_call(&self) -> f64 {
        if self.reps == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.reps as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantReport {
    pub label: Label,
    pub trials: Vec<RunResult>,
    pub stats: Option<StatsSummary>,
}

impl VariantReport {
    /// Returns the fastest trial.
    pub fn best(&self) -> Option<&RunResult> {
        self.trials.iter().min_by_key(|run_result| run_result.elapsed)
    }

    pub fn best_nanos_per_call(&self) -> f64 {
        self.best().map(|run_result| run_result.nanos_per_call()).unwrap_or(0.0)
    }

    pub fn mean_nanos_per_call(&self) -> f64 {
        let total_reps: Reps = self.trials.iter().map(|run_result| run_result.reps).sum();
        if total_reps == 0 {
            return 0.0;
        }
        let total_nanos: u128 = self.trials.iter().map(|run_result| run_result.elapsed.as_nanos()).sum();
        total_nanos as f64 / total_reps as f64
    }

    /// Throughput of the fastest trial.
    pub fn calls_per_second(&self) -> f64 {
        let nanos_per_call = self.best_nanos_per_call();
        if nanos_per_call == 0.0 {
            return 0.0;
        }
        NANOS_PER_SECOND / nanos_per_call
    }

    pub fn accumulated(&self) -> Option<Accumulation> {
        self.trials.first().map(|run_result| run_result.accumulated)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VariantOutcome {
    Completed(VariantReport),
    Failed { label: Label, error: Errors },
}

impl VariantOutcome {
    pub fn label(&self) -> &str {
        match self {
            VariantOutcome::Completed(report) => &report.label,
            VariantOutcome::Failed { label, .. } => label,
        }
    }
}

/// BenchmarkReport holds one outcome per variant, in the order the variants were run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BenchmarkReport {
    pub outcomes: Vec<VariantOutcome>,
}

impl BenchmarkReport {
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| matches!(outcome, VariantOutcome::Failed { .. }))
    }

    pub fn completed(&self) -> impl Iterator<Item=&VariantReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            VariantOutcome::Completed(report) => Some(report),
            VariantOutcome::Failed { .. } => None,
        })
    }

    /// Returns the label and error of every variant that did not complete, whether it failed to build or to run.
    pub fn failures(&self) -> impl Iterator<Item=(&str, &Errors)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            VariantOutcome::Completed(_) => None,
            VariantOutcome::Failed { label, error } => Some((label.as_str(), error)),
        })
    }

    pub fn report_of(&self, label: &str) -> Option<&VariantReport> {
        self.completed().find(|report| report.label == label)
    }
}

impl Display for VariantReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let hit_ratio = self.stats
            .as_ref()
            .map(|stats| format!("{:.4}", stats.hit_ratio))
            .unwrap_or_else(|| "-".to_string());

        write!(
            formatter,
            "{:<32} {:>10.3} ns/call (mean {:>10.3}) {:>16.0} calls/s  hit ratio {:>6}  trials {}",
            self.label,
            self.best_nanos_per_call(),
            self.mean_nanos_per_call(),
            self.calls_per_second(),
            hit_ratio,
            self.trials.len(),
        )
    }
}

impl Display for VariantOutcome {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantOutcome::Completed(report) => write!(formatter, "{}", report),
            VariantOutcome::Failed { label, error } => write!(formatter, "{:<32} FAILED: {}", label, error),
        }
    }
}

impl Display for BenchmarkReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            writeln!(formatter, "{}", outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::cacheable::errors::Errors;
    use crate::cacheable::harness::report::{BenchmarkReport, RunResult, VariantOutcome, VariantReport};
    use crate::cacheable::stats::StatsSummary;

    fn run_result(elapsed_nanos: u64, reps: u64) -> RunResult {
        RunResult { elapsed: Duration::from_nanos(elapsed_nanos), accumulated: 240, reps }
    }

    fn variant_report(label: &str, trials: Vec<RunResult>) -> VariantReport {
        VariantReport { label: label.to_string(), trials, stats: None }
    }

    #[test]
    fn nanos_per_call() {
        assert_eq!(2.5, run_result(80, 32).nanos_per_call());
        assert_eq!(0.0, run_result(80, 0).nanos_per_call());
    }

    #[test]
    fn best_trial() {
        let report = variant_report("no_caching", vec![run_result(100, 10), run_result(50, 10), run_result(70, 10)]);
        assert_eq!(Some(&run_result(50, 10)), report.best());
        assert_eq!(5.0, report.best_nanos_per_call());
    }

    #[test]
    fn mean_nanos_per_call() {
        let report = variant_report("no_caching", vec![run_result(100, 10), run_result(50, 10)]);
        assert_eq!(7.5, report.mean_nanos_per_call());
    }

    #[test]
    fn calls_per_second() {
        let report = variant_report("no_caching", vec![run_result(1_000, 1_000)]);
        assert_eq!(1_000_000_000.0, report.calls_per_second());
    }

    #[test]
    fn no_trials() {
        let report = variant_report("no_caching", Vec::new());
        assert!(report.best().is_none());
        assert_eq!(0.0, report.calls_per_second());
        assert_eq!(None, report.accumulated());
    }

    #[test]
    fn display_a_completed_variant_without_stats() {
        let line = variant_report("no_caching", vec![run_result(64, 32)]).to_string();

        assert!(line.starts_with("no_caching"));
        assert!(line.contains("2.000 ns/call"));
        assert!(line.contains("hit ratio      -"));
        assert!(line.ends_with("trials 1"));
    }

    #[test]
    fn display_a_completed_variant_with_stats() {
        let mut report = variant_report("manual_concurrent_map", vec![run_result(64, 32)]);
        report.stats = Some(StatsSummary { stats_by_type: HashMap::new(), hit_ratio: 0.5 });

        assert!(report.to_string().contains("hit ratio 0.5000"));
    }

    #[test]
    fn display_a_failed_variant() {
        let outcome = VariantOutcome::Failed { label: "memcached".to_string(), error: Errors::UnknownVariant("memcached".to_string()) };
        assert_eq!("memcached".to_string() + &" ".repeat(23) + " FAILED: [Setup memcached]: No variant is registered with the given label", outcome.to_string());
    }

    #[test]
    fn report_with_failures() {
        let report = BenchmarkReport {
            outcomes: vec![
                VariantOutcome::Completed(variant_report("no_caching", vec![run_result(64, 32)])),
                VariantOutcome::Failed { label: "memcached".to_string(), error: Errors::UnknownVariant("memcached".to_string()) },
            ]
        };

        assert!(report.has_failures());
        assert_eq!(1, report.completed().count());
        assert!(report.report_of("no_caching").is_some());
        assert!(report.report_of("memcached").is_none());
        assert_eq!(2, report.to_string().lines().count());
    }

    #[test]
    fn failures_include_setup_and_run_errors() {
        let report = BenchmarkReport {
            outcomes: vec![
                VariantOutcome::Failed { label: "memcached".to_string(), error: Errors::UnknownVariant("memcached".to_string()) },
                VariantOutcome::Completed(variant_report("no_caching", vec![run_result(64, 32)])),
                VariantOutcome::Failed { label: "drifting".to_string(), error: Errors::InconsistentAccumulation("drifting".to_string()) },
            ]
        };

        let failures = report.failures().collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("memcached", &Errors::UnknownVariant("memcached".to_string())),
                ("drifting", &Errors::InconsistentAccumulation("drifting".to_string())),
            ],
            failures
        );
    }

    #[test]
    fn report_without_failures() {
        let report = BenchmarkReport {
            outcomes: vec![VariantOutcome::Completed(variant_report("no_caching", vec![run_result(64, 32)]))]
        };
        assert!(!report.has_failures());
        assert_eq!("no_caching", report.outcomes[0].label());
    }
}
