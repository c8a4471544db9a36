pub mod common;
pub mod identity;
pub mod identity_parallel;
