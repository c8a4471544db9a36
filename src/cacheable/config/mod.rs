use crate::cacheable::errors::Errors;
use crate::cacheable::types::{Label, Modulus, Reps, Trials};

const TRIALS: Trials = 1;
const REPS: Reps = 1_000_000;
const MODULUS: Modulus = 16;
const WARMUP_REPS: Reps = 10_000;

/// BenchmarkConfig defines the parameters shared by every variant of a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkConfig {
    pub trials: Trials,
    pub reps: Reps,
    pub modulus: Modulus,
    pub warmup_reps: Reps,
    /// Labels of the variants to run, all registered variants if empty
    pub variants: Vec<Label>,
}

pub struct BenchmarkConfigBuilder {
    trials: Trials,
    reps: Reps,
    modulus: Modulus,
    warmup_reps: Reps,
    variants: Vec<Label>,
}

impl Default for BenchmarkConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkConfigBuilder {
    pub fn new() -> Self {
        BenchmarkConfigBuilder {
            trials: TRIALS,
            reps: REPS,
            modulus: MODULUS,
            warmup_reps: WARMUP_REPS,
            variants: Vec::new(),
        }
    }

    pub fn trials(mut self, trials: Trials) -> BenchmarkConfigBuilder {
        self.trials = trials;
        self
    }

    pub fn reps(mut self, reps: Reps) -> BenchmarkConfigBuilder {
        self.reps = reps;
        self
    }

    pub fn modulus(mut self, modulus: Modulus) -> BenchmarkConfigBuilder {
        self.modulus = modulus;
        self
    }

    pub fn warmup_reps(mut self, warmup_reps: Reps) -> BenchmarkConfigBuilder {
        self.warmup_reps = warmup_reps;
        self
    }

    pub fn variant(mut self, label: &str) -> BenchmarkConfigBuilder {
        self.variants.push(label.to_string());
        self
    }

    pub fn variants(mut self, labels: Vec<Label>) -> BenchmarkConfigBuilder {
        self.variants = labels;
        self
    }

    pub fn build(self) -> Result<BenchmarkConfig, Errors> {
        if self.trials == 0 {
            return Err(Errors::TrialsGtZero);
        }
        if self.reps == 0 {
            return Err(Errors::RepsGtZero);
        }
        if self.modulus == 0 {
            return Err(Errors::ModulusGtZero);
        }
        Ok(BenchmarkConfig {
            trials: self.trials,
            reps: self.reps,
            modulus: self.modulus,
            warmup_reps: self.warmup_reps,
            variants: self.variants,
        })
    }
}
