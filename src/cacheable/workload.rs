use crate::cacheable::errors::Errors;
use crate::cacheable::types::{Modulus, Number, Reps};

/// Workload is the deterministic input sequence fed to every variant: `i mod modulus` for `i` in `0..reps`.
/// After the first `modulus` calls every input repeats, so a memoizing variant answers the rest from its cache.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Workload {
    reps: Reps,
    modulus: Modulus,
}

impl Workload {
    pub fn new(reps: Reps, modulus: Modulus) -> Result<Workload, Errors> {
        if modulus == 0 {
            return Err(Errors::ModulusGtZero);
        }
        Ok(Workload { reps, modulus })
    }

    pub fn reps(&self) -> Reps {
        self.reps
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Returns the number of distinct inputs, which is the number of misses a cold memoizing variant sees.
    pub fn distinct_keys(&self) -> u64 {
        self.reps.min(self.modulus)
    }

    pub fn inputs(&self) -> WorkloadInputs {
        WorkloadInputs {
            index: 0,
            reps: self.reps,
            modulus: self.modulus,
        }
    }
}

pub struct WorkloadInputs {
    index: Reps,
    reps: Reps,
    modulus: Modulus,
}

impl Iterator for WorkloadInputs {
    type Item = Number;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.reps {
            return None;
        }
        let input = (self.index % self.modulus) as Number;
        self.index += 1;
        Some(input)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.reps - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WorkloadInputs {}
