mod common;

use std::sync::Arc;

use knows_core::{
    ComputedKind, ConstraintError, ConstraintErrorCode, EntityKind, GenerationError,
    GenerationErrorCode, GraphGeneratorBuilder, InvariantViolation, PropertyDef, Schema,
};
use rstest::rstest;

use common::{Echo, generator};

#[rstest]
#[case(
    ConstraintError::UnknownType { tag: Arc::from("Money"), available: Arc::from("Int") },
    ConstraintErrorCode::UnknownType,
)]
#[case(
    ConstraintError::InvertedRange { min: Arc::from("10"), max: Arc::from("5") },
    ConstraintErrorCode::InvertedRange,
)]
#[case(ConstraintError::EmptyEnum, ConstraintErrorCode::EmptyEnum)]
#[case(
    ConstraintError::UnsupportedEnumValue { index: 2 },
    ConstraintErrorCode::UnsupportedEnumValue,
)]
#[case(
    ConstraintError::NegativePrecision { got: -1 },
    ConstraintErrorCode::NegativePrecision,
)]
#[case(
    ConstraintError::PrecisionTooLarge { got: 20, limit: 15 },
    ConstraintErrorCode::PrecisionTooLarge,
)]
#[case(
    ConstraintError::EmptyPrecisionGrid {
        precision: 0,
        min: Arc::from("0.2"),
        max: Arc::from("0.8"),
    },
    ConstraintErrorCode::EmptyPrecisionGrid,
)]
#[case(
    ConstraintError::InvalidBound { bound: "min", reason: Arc::from("must be a date") },
    ConstraintErrorCode::InvalidBound,
)]
#[case(ConstraintError::InvalidMaxLength { got: 0 }, ConstraintErrorCode::InvalidMaxLength)]
#[case(ConstraintError::SymmetricNodeProperty, ConstraintErrorCode::SymmetricNodeProperty)]
#[case(ConstraintError::ComputedNameCollision, ConstraintErrorCode::ComputedNameCollision)]
fn returns_expected_constraint_code(
    #[case] error: ConstraintError,
    #[case] expected: ConstraintErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("CONSTRAINT_"));
}

#[rstest]
#[case(
    GenerationError::SchemaConstraint {
        entity: EntityKind::Edge,
        property: Arc::from("since"),
        error: ConstraintError::EmptyEnum,
    },
    GenerationErrorCode::SchemaConstraint,
    Some(ConstraintErrorCode::EmptyEnum),
)]
#[case(GenerationError::NoNodes { requested: 0 }, GenerationErrorCode::NoNodes, None)]
#[case(
    GenerationError::InsufficientNodes { nodes: 1, edges: 3 },
    GenerationErrorCode::InsufficientNodes,
    None,
)]
#[case(
    GenerationError::InvariantViolation(InvariantViolation::SelfLoop {
        position: 0,
        node: "N1".to_owned(),
    }),
    GenerationErrorCode::InvariantViolation,
    None,
)]
fn returns_expected_generation_code(
    #[case] error: GenerationError,
    #[case] expected: GenerationErrorCode,
    #[case] constraint_code: Option<ConstraintErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.constraint_code(), constraint_code);
}

#[rstest]
#[case::zero_nodes(0, None, GenerationErrorCode::NoNodes)]
#[case::zero_nodes_with_edges(0, Some(4), GenerationErrorCode::NoNodes)]
#[case::single_node(1, Some(1), GenerationErrorCode::InsufficientNodes)]
fn infeasible_counts_are_rejected_at_build(
    #[case] nodes: usize,
    #[case] edges: Option<usize>,
    #[case] expected: GenerationErrorCode,
) {
    let builder = GraphGeneratorBuilder::new().with_node_count(nodes);
    let builder = match edges {
        Some(edges) => builder.with_edge_count(edges),
        None => builder,
    };

    let err = builder.build().expect_err("counts must be rejected");

    assert_eq!(err.code(), expected);
}

#[test]
fn single_node_without_edges_is_accepted() {
    let graph = generator(1, 0, 5)
        .generate(&Schema::people(), &Echo)
        .expect("a lone node is a valid graph");

    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());
}

#[rstest]
#[case::unknown_type(
    Schema::builder().node_property("cost", PropertyDef::typed("Money")).build(),
    EntityKind::Node,
    ConstraintErrorCode::UnknownType,
)]
#[case::empty_enum(
    Schema::builder()
        .edge_property("kind", PropertyDef::enumeration(Vec::<String>::new()))
        .build(),
    EntityKind::Edge,
    ConstraintErrorCode::EmptyEnum,
)]
#[case::negative_precision(
    Schema::builder()
        .node_property("score", PropertyDef::typed("Float").with_precision(-2))
        .build(),
    EntityKind::Node,
    ConstraintErrorCode::NegativePrecision,
)]
#[case::empty_grid(
    Schema::builder()
        .node_property(
            "ratio",
            PropertyDef::typed("Float").with_min(0.2).with_max(0.8).with_precision(0),
        )
        .build(),
    EntityKind::Node,
    ConstraintErrorCode::EmptyPrecisionGrid,
)]
#[case::bad_date_bound(
    Schema::builder()
        .edge_property("since", PropertyDef::typed("Date").with_min("yesterday"))
        .build(),
    EntityKind::Edge,
    ConstraintErrorCode::InvalidBound,
)]
#[case::zero_max_length(
    Schema::builder()
        .node_property("bio", PropertyDef::typed("Text").with_max_length(0))
        .build(),
    EntityKind::Node,
    ConstraintErrorCode::InvalidMaxLength,
)]
#[case::symmetric_node_property(
    Schema::builder()
        .node_property("since", PropertyDef::typed("Date").symmetric())
        .build(),
    EntityKind::Node,
    ConstraintErrorCode::SymmetricNodeProperty,
)]
#[case::computed_collision(
    Schema::builder()
        .node_property("degree", PropertyDef::typed("Int"))
        .computed_node_property("degree", ComputedKind::Degree)
        .build(),
    EntityKind::ComputedNode,
    ConstraintErrorCode::ComputedNameCollision,
)]
fn schema_constraints_abort_generation(
    #[case] schema: Schema,
    #[case] entity: EntityKind,
    #[case] expected: ConstraintErrorCode,
) {
    let err = generator(4, 4, 3)
        .generate(&schema, &Echo)
        .expect_err("schema must be rejected");

    assert!(matches!(
        err,
        GenerationError::SchemaConstraint { entity: found, .. } if found == entity
    ));
    assert_eq!(err.constraint_code(), Some(expected));
}

#[test]
fn unknown_type_lists_available_types() {
    let schema = Schema::builder()
        .node_property("cost", PropertyDef::typed("Money"))
        .build();

    let err = generator(2, 0, 1)
        .generate(&schema, &Echo)
        .expect_err("unknown type must be rejected");

    let message = err.to_string();
    assert!(message.starts_with("node property `cost`: unknown type `Money`"));
    assert!(message.contains("available types: Address, Bool, Boolean, City"));
}
