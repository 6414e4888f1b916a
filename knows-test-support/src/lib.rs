//! Shared test utilities used across knows crates.

pub mod ci;
pub mod recording;
