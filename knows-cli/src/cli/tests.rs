//! Unit tests for the CLI command, schema loading and renderers.

use super::commands::load_schema;
use super::test_helpers::{cli, create_schema_file, run_cli_expecting_error, temp_dir};
use super::{Cli, CliError, OutputFormat, render_graph, run_cli};

use clap::Parser;
use knows_core::{ConstraintErrorCode, GenerationErrorCode, Graph};
use knows_test_support::recording::RecordingLayer;
use rstest::rstest;
use serde_json::Value;
use tracing::Level;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const EMPLOYEE_SCHEMA: &str = r#"{
    "nodeLabel": "Employee",
    "edgeLabel": "collaborates",
    "nodeProperties": {
        "name": "String",
        "department": {"enum": ["HR", "Engineering", "Sales"]},
        "salary": {"type": "Int", "min": 30000, "max": 200000}
    },
    "edgeProperties": {
        "since": {"type": "Date", "symmetric": true}
    },
    "computedNodeProperties": {"connectionCount": "degree"}
}"#;

fn render_to_string(
    graph: &Graph,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_graph(graph, format, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
fn run_without_schema_uses_people() -> TestResult {
    let summary = run_cli(cli(Some(6), Some(5), None))?;

    assert_eq!(summary.schema_source, "built-in");
    assert_eq!(summary.graph.node_label(), "Person");
    assert_eq!(summary.graph.edge_label(), "knows");
    assert_eq!(summary.graph.nodes().len(), 6);
    assert_eq!(summary.graph.edges().len(), 5);
    Ok(())
}

#[rstest]
fn run_with_schema_file_applies_document() -> TestResult {
    let dir = temp_dir();
    let path = create_schema_file(&dir, "employees.json", EMPLOYEE_SCHEMA)?;

    let summary = run_cli(cli(Some(5), Some(4), Some(path.clone())))?;

    assert_eq!(summary.schema_source, path.display().to_string());
    assert_eq!(summary.graph.node_label(), "Employee");
    for node in summary.graph.nodes() {
        let keys: Vec<&str> = node.properties().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "department", "salary", "connectionCount"]);
    }
    Ok(())
}

#[rstest]
fn same_seed_renders_identical_output() -> TestResult {
    let first = run_cli(cli(Some(12), Some(20), None))?;
    let second = run_cli(cli(Some(12), Some(20), None))?;

    assert_eq!(
        render_to_string(&first.graph, OutputFormat::Yarspg)?,
        render_to_string(&second.graph, OutputFormat::Yarspg)?
    );
    Ok(())
}

#[rstest]
fn missing_schema_file_reports_path() {
    let dir = temp_dir();
    let path = dir.path().join("absent.json");

    let err = run_cli_expecting_error(
        cli(Some(3), None, Some(path.clone())),
        "missing file must fail",
    );

    match err {
        CliError::Io { path: ref reported, .. } => {
            assert_eq!(reported, &path);
            assert_eq!(err.codes(), (None, None));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case::not_json("{ nodeLabel")]
#[case::unknown_key(r#"{"nodeLabels": "Person"}"#)]
#[case::bad_computed(r#"{"computedNodeProperties": {"rank": "pagerank"}}"#)]
fn malformed_schema_is_rejected(#[case] contents: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_schema_file(&dir, "broken.json", contents)?;

    let err = load_schema(&path).expect_err("document must be rejected");

    assert!(matches!(err, CliError::Schema { .. }), "unexpected error: {err:?}");
    Ok(())
}

#[rstest]
fn constraint_errors_surface_core_codes() -> TestResult {
    let dir = temp_dir();
    let path = create_schema_file(
        &dir,
        "inverted.json",
        r#"{"nodeProperties": {"age": {"type": "Int", "min": 10, "max": 5}}}"#,
    )?;

    let err = run_cli_expecting_error(
        cli(Some(3), Some(1), Some(path)),
        "inverted range must fail",
    );

    assert_eq!(
        err.codes(),
        (
            Some(GenerationErrorCode::SchemaConstraint.as_str()),
            Some(ConstraintErrorCode::InvertedRange.as_str())
        )
    );
    match err {
        CliError::Core(core) => {
            assert_eq!(core.code(), GenerationErrorCode::SchemaConstraint);
            assert_eq!(core.constraint_code(), Some(ConstraintErrorCode::InvertedRange));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn single_node_with_edges_is_structural_error() {
    let err = run_cli_expecting_error(cli(Some(1), Some(1), None), "one node cannot host an edge");

    assert!(matches!(err, CliError::Core(ref core) if core.is_structural()));
}

#[rstest]
#[case::positional_counts(&["knows", "10", "15"], Some(10), Some(15), OutputFormat::Json)]
#[case::nodes_only(&["knows", "10"], Some(10), None, OutputFormat::Json)]
#[case::defaults(&["knows"], None, None, OutputFormat::Json)]
#[case::edge_list(&["knows", "-f", "edge-list"], None, None, OutputFormat::EdgeList)]
#[case::adjacency(&["knows", "4", "2", "--format", "adjacency-list"], Some(4), Some(2), OutputFormat::AdjacencyList)]
#[case::yarspg(&["knows", "--format=yarspg"], None, None, OutputFormat::Yarspg)]
fn clap_parses_arguments(
    #[case] args: &[&str],
    #[case] nodes: Option<usize>,
    #[case] edges: Option<usize>,
    #[case] format: OutputFormat,
) {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments must parse");
    assert_eq!(cli.nodes, nodes);
    assert_eq!(cli.edges, edges);
    assert_eq!(cli.format, format);
}

#[rstest]
fn clap_parses_seed_and_schema() {
    let cli = Cli::try_parse_from(["knows", "--seed", "42", "-s", "graph.json"])
        .expect("arguments must parse");
    assert_eq!(cli.seed, Some(42));
    assert_eq!(cli.schema.as_deref(), Some(std::path::Path::new("graph.json")));
}

#[rstest]
#[case::unknown_format(&["knows", "--format", "graphml"])]
#[case::negative_nodes(&["knows", "-3"])]
#[case::non_numeric_seed(&["knows", "--seed", "abc"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args.iter().copied()).is_err());
}

#[rstest]
fn json_output_is_a_single_document() -> TestResult {
    let summary = run_cli(cli(Some(4), Some(3), None))?;

    let rendered = render_to_string(&summary.graph, OutputFormat::Json)?;
    let document: Value = serde_json::from_str(&rendered)?;

    assert_eq!(document["nodeLabel"], "Person");
    assert_eq!(document["nodes"].as_array().map(Vec::len), Some(4));
    assert_eq!(document["edges"].as_array().map(Vec::len), Some(3));
    assert_eq!(document["nodes"][0]["id"], "N1");
    assert!(document["edges"][0]["properties"]["strength"].is_i64());
    Ok(())
}

#[rstest]
fn yarspg_output_declares_nodes_then_edges() -> TestResult {
    let summary = run_cli(cli(Some(3), Some(2), None))?;

    let rendered = render_to_string(&summary.graph, OutputFormat::Yarspg)?;
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with(r#"(N1 {"Person"}["firstName": ""#), "{}", lines[0]);
    for line in &lines[3..] {
        assert!(line.contains(r#")-({"knows"}["strength": "#), "{line}");
        assert!(line.ends_with(')'));
    }
    Ok(())
}

#[rstest]
fn edge_list_lines_carry_json_properties() -> TestResult {
    let summary = run_cli(cli(Some(5), Some(4), None))?;

    let rendered = render_to_string(&summary.graph, OutputFormat::EdgeList)?;

    assert_eq!(rendered.lines().count(), 4);
    for (line, edge) in rendered.lines().zip(summary.graph.edges()) {
        let mut parts = line.splitn(3, ' ');
        assert_eq!(parts.next(), Some(edge.source().to_string().as_str()));
        assert_eq!(parts.next(), Some(edge.target().to_string().as_str()));
        let properties: Value = serde_json::from_str(parts.next().unwrap_or_default())?;
        assert!(properties.get("lastMeetingDate").is_some());
    }
    Ok(())
}

#[rstest]
fn adjacency_list_lists_every_node_once() -> TestResult {
    let summary = run_cli(cli(Some(6), Some(8), None))?;

    let rendered = render_to_string(&summary.graph, OutputFormat::AdjacencyList)?;

    let successors: usize = rendered
        .lines()
        .map(|line| line.split(' ').count() - 1)
        .sum();
    assert_eq!(rendered.lines().count(), 6);
    assert_eq!(successors, 8);
    for (line, node) in rendered.lines().zip(summary.graph.nodes()) {
        assert_eq!(line.split(' ').next(), Some(node.id().to_string().as_str()));
    }
    Ok(())
}

#[rstest]
fn run_cli_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let path = create_schema_file(&dir, "employees.json", EMPLOYEE_SCHEMA)?;
    let (layer, _guard) = RecordingLayer::install();

    run_cli(Cli {
        format: OutputFormat::Yarspg,
        ..cli(Some(4), Some(2), Some(path))
    })?;

    let run = layer.span("cli.run").expect("cli.run span must exist");
    assert_eq!(run.field("format"), Some("yarspg"));
    assert!(run.field("schema").is_some_and(|value| value.ends_with("employees.json")));

    let load = layer
        .span("cli.load_schema")
        .expect("cli.load_schema span must exist");
    assert!(load.field("path").is_some_and(|value| value.ends_with("employees.json")));

    let generate = layer.span("core.generate").expect("core.generate span must exist");
    assert_eq!(generate.field("seed"), Some("7"));
    assert_eq!(generate.field("node_label"), Some("Employee"));
    assert!(layer.has_event(Level::INFO, "message", "command completed"));
    Ok(())
}
