pub mod calculator;
pub mod config;
pub mod errors;
pub mod harness;
pub mod stats;
pub mod store;
pub mod types;
pub mod variant;
pub mod workload;
