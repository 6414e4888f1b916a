//! Benchmark support crate for knows.
//!
//! Provides fixture schemas and parameter types used by the Criterion
//! generation benchmarks.

pub mod error;
pub mod params;
pub mod schemas;
