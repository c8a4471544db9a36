/// Defines the integer domain of the memoized computation, both its input and its output
pub type Number = i64;

/// Defines the type of the sum accumulated over the return values of a benchmark run
pub type Accumulation = i64;

/// Defines the type for the number of calls made in a single benchmark run
pub type Reps = u64;

/// Defines the type for the modulus that bounds the distinct keys produced by a `crate::cacheable::workload::Workload`
pub type Modulus = u64;

/// Defines the type for the number of measured runs per variant
pub type Trials = u32;

/// Defines the type for the label of a benchmark variant
pub type Label = String;
