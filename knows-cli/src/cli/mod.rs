//! Command-line interface orchestration for the knows graph generator.
//!
//! A single command loads a schema (or falls back to the built-in people
//! schema), generates one graph and renders it in the requested encoding.

mod commands;
mod render;

pub use commands::{Cli, CliError, GenerationSummary, run_cli};
pub use render::{OutputFormat, render_graph};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
