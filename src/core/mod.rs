//! Core logic — types, decomposition, path derivation, writing, orchestration.

pub mod decomposer;
pub mod error;
pub mod executor;
pub mod paths;
pub mod types;
pub mod writer;
