//! Support library for the `knows` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! drive generation without spawning a subprocess.

pub mod cli;
pub mod logging;
