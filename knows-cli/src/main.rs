//! `knows` binary: generate one property graph and write it to stdout.
//!
//! Logging comes up before argument handling so every failure, including a
//! rejected schema, reaches `stderr` as a structured event.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use knows_cli::{
    cli::{Cli, CliError, render_graph, run_cli},
    logging::{self, LoggingError},
};
use tracing::error;

fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to generate graph")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_graph(&summary.graph, summary.format, &mut out)
        .with_context(|| format!("failed to render {} output", summary.format.as_str()))?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, constraint_code) = err
                .downcast_ref::<CliError>()
                .map_or((None, None), CliError::codes);
            let message = format!("{err:#}");
            error!(
                error = message.as_str(),
                code,
                constraint_code,
                "generation failed"
            );
            ExitCode::FAILURE
        }
    }
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
