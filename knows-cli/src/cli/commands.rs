//! Argument parsing and command execution for the knows CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use knows_core::{GenerationError, Graph, GraphGeneratorBuilder, Schema, SchemaDocumentError};
use knows_providers_lexicon::Lexicon;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::OutputFormat;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "knows",
    about = "Generate property graphs with the requested node and edge counts."
)]
pub struct Cli {
    /// Number of nodes. Chosen at random in 2..=100 when omitted.
    pub nodes: Option<usize>,

    /// Number of edges. Chosen at random in nodes/2..=nodes when omitted.
    pub edges: Option<usize>,

    /// JSON schema document describing labels and properties.
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Seed for reproducible output. Drawn from entropy and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output encoding written to stdout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the schema document.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The schema document could not be decoded.
    #[error("invalid schema document `{path}`: {source}")]
    Schema {
        /// Path of the rejected document.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: SchemaDocumentError,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GenerationError),
}

impl CliError {
    /// Machine-readable generation and constraint codes, when the failure
    /// came from the engine.
    #[must_use]
    pub fn codes(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            Self::Core(core) => (
                Some(core.code().as_str()),
                core.constraint_code().map(|code| code.as_str()),
            ),
            Self::Io { .. } | Self::Schema { .. } => (None, None),
        }
    }
}

/// Outcome of one CLI invocation, ready to render.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Where the schema came from: a path or `built-in`.
    pub schema_source: String,
    /// Encoding requested for stdout.
    pub format: OutputFormat,
    /// The generated graph.
    pub graph: Graph,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the schema cannot be loaded or generation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use knows_cli::cli::{Cli, OutputFormat, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     nodes: Some(4),
///     edges: Some(3),
///     schema: None,
///     seed: Some(9),
///     format: OutputFormat::Json,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.nodes().len(), 4);
/// assert_eq!(summary.schema_source, "built-in");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(format = %cli.format.as_str(), schema = field::Empty, seed = ?cli.seed),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let Cli {
        nodes,
        edges,
        schema,
        seed,
        format,
    } = cli;
    let span = Span::current();

    let (schema, schema_source) = match schema {
        Some(path) => {
            span.record("schema", field::display(path.display()));
            (load_schema(&path)?, path.display().to_string())
        }
        None => {
            span.record("schema", "built-in");
            (Schema::people(), "built-in".to_owned())
        }
    };

    let mut builder = GraphGeneratorBuilder::new();
    if let Some(nodes) = nodes {
        builder = builder.with_node_count(nodes);
    }
    if let Some(edges) = edges {
        builder = builder.with_edge_count(edges);
    }
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let graph = builder.build()?.generate(&schema, &Lexicon::default())?;

    info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        schema = schema_source.as_str(),
        "command completed"
    );
    Ok(GenerationSummary {
        schema_source,
        format,
        graph,
    })
}

#[instrument(name = "cli.load_schema", err, fields(path = field::Empty))]
pub(super) fn load_schema(path: &Path) -> Result<Schema, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Schema::from_reader(BufReader::new(file)).map_err(|source| CliError::Schema {
        path: path.to_path_buf(),
        source,
    })
}
