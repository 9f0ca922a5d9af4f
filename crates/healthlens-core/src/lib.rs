//! healthlens-core
//!
//! Pure domain types shared by the analysis, export and HTTP crates.
//! No AWS SDK or PDF dependency; this is the shared vocabulary of HealthLens.

pub mod error;
pub mod models;
