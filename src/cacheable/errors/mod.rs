use std::error::Error;
use std::fmt::{Display, Formatter};

const ERROR_MESSAGE_TRIALS_GT_ZERO: &str = "Total number of trials must be greater than zero";
const ERROR_MESSAGE_REPS_GT_ZERO: &str = "Total number of reps must be greater than zero";
const ERROR_MESSAGE_MODULUS_GT_ZERO: &str = "Workload modulus must be greater than zero";
const ERROR_MESSAGE_UNKNOWN_VARIANT: &str = "No variant is registered with the given label";
const ERROR_MESSAGE_CACHE_REGION_NOT_FOUND: &str = "Cache manager does not provide the cache region";
const ERROR_MESSAGE_INCONSISTENT_ACCUMULATION: &str = "Trials of the same variant accumulated different sums";

/// Errors enum define various application errors.
/// Errors are categorized as ConfigError, SetupError or RunError under [`ErrorType`] enum.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Errors {
    TrialsGtZero,
    RepsGtZero,
    ModulusGtZero,
    UnknownVariant(String),
    CacheRegionNotFound(String),
    InconsistentAccumulation(String),
}

pub(crate) enum ErrorType<'a> {
    ConfigError,
    SetupError(&'a str),
    RunError(&'a str),
}

impl Display for ErrorType<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorType::ConfigError =>
                write!(formatter, "Config error"),
            ErrorType::SetupError(subject) =>
                write!(formatter, "Setup {}", subject),
            ErrorType::RunError(label) =>
                write!(formatter, "Run {}", label),
        }
    }
}

impl Display for Errors {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Errors::TrialsGtZero =>
                write!(formatter, "[{}]: {}", ErrorType::ConfigError, ERROR_MESSAGE_TRIALS_GT_ZERO),
            Errors::RepsGtZero =>
                write!(formatter, "[{}]: {}", ErrorType::ConfigError, ERROR_MESSAGE_REPS_GT_ZERO),
            Errors::ModulusGtZero =>
                write!(formatter, "[{}]: {}", ErrorType::ConfigError, ERROR_MESSAGE_MODULUS_GT_ZERO),
            Errors::UnknownVariant(label) =>
                write!(formatter, "[{}]: {}", ErrorType::SetupError(label), ERROR_MESSAGE_UNKNOWN_VARIANT),
            Errors::CacheRegionNotFound(region) =>
                write!(formatter, "[{}]: {}", ErrorType::SetupError(region), ERROR_MESSAGE_CACHE_REGION_NOT_FOUND),
            Errors::InconsistentAccumulation(label) =>
                write!(formatter, "[{}]: {}", ErrorType::RunError(label), ERROR_MESSAGE_INCONSISTENT_ACCUMULATION),
        }
    }
}

impl Error for Errors {}
