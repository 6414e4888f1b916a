//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use knows_core::GenerationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator configuration or a warm-up run failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
}
