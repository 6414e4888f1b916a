//! Text encodings of a generated [`Graph`].

use std::io::{self, Write};

use clap::ValueEnum;
use knows_core::{Graph, Properties};

/// Output encodings supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The serialized [`Graph`] as one JSON document.
    Json,
    /// YARS-PG node and edge declarations, one per line.
    Yarspg,
    /// `source target {properties}` per edge.
    EdgeList,
    /// Each node followed by its successors, repeated for parallel edges.
    AdjacencyList,
}

impl OutputFormat {
    /// Name accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yarspg => "yarspg",
            Self::EdgeList => "edge-list",
            Self::AdjacencyList => "adjacency-list",
        }
    }
}

/// Writes `graph` to `writer` in `format`, ending with a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use knows_cli::cli::{OutputFormat, render_graph};
/// # use knows_core::{GraphGeneratorBuilder, Schema};
/// # use knows_providers_lexicon::Lexicon;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = GraphGeneratorBuilder::new()
///     .with_node_count(3)
///     .with_edge_count(2)
///     .with_seed(1)
///     .build()?
///     .generate(&Schema::people(), &Lexicon::default())?;
/// let mut buffer = Vec::new();
/// render_graph(&graph, OutputFormat::EdgeList, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?.lines().count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn render_graph(graph: &Graph, format: OutputFormat, mut writer: impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, graph)?;
            writeln!(writer)
        }
        OutputFormat::Yarspg => render_yarspg(graph, writer),
        OutputFormat::EdgeList => render_edge_list(graph, writer),
        OutputFormat::AdjacencyList => render_adjacency_list(graph, writer),
    }
}

fn render_yarspg(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    for node in graph.nodes() {
        writeln!(
            writer,
            "({} {{{}}}[{}])",
            node.id(),
            quoted(node.label())?,
            yarspg_properties(node.properties())?
        )?;
    }
    for edge in graph.edges() {
        writeln!(
            writer,
            "({})-({{{}}}[{}])->({})",
            edge.source(),
            quoted(edge.label())?,
            yarspg_properties(edge.properties())?,
            edge.target()
        )?;
    }
    Ok(())
}

fn yarspg_properties(properties: &Properties) -> io::Result<String> {
    let pairs = properties
        .iter()
        .map(|(name, value)| -> io::Result<String> {
            Ok(format!("{}: {}", quoted(name)?, serde_json::to_string(value)?))
        })
        .collect::<io::Result<Vec<_>>>()?;
    Ok(pairs.join(", "))
}

fn quoted(text: &str) -> io::Result<String> {
    Ok(serde_json::to_string(text)?)
}

fn render_edge_list(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    for edge in graph.edges() {
        write!(writer, "{} {} ", edge.source(), edge.target())?;
        serde_json::to_writer(&mut writer, edge.properties())?;
        writeln!(writer)?;
    }
    Ok(())
}

fn render_adjacency_list(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    let mut successors = vec![Vec::new(); graph.nodes().len()];
    for edge in graph.edges() {
        if let Some(targets) = successors.get_mut(edge.source().index()) {
            targets.push(edge.target());
        }
    }
    for (node, targets) in graph.nodes().iter().zip(&successors) {
        write!(writer, "{}", node.id())?;
        for target in targets {
            write!(writer, " {target}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
