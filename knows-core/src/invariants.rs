//! Post-generation consistency checks.
//!
//! [`check`] never repairs a graph; the first failed check is reported as an
//! [`InvariantViolation`]. The generator runs it on every graph it returns,
//! and callers may run it on any graph they hold.

use thiserror::Error;

use crate::{
    error::EntityKind,
    graph::{Graph, NodeId},
    schema::{ComputedKind, Schema},
};

/// A generated graph broke one of the engine's guarantees.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvariantViolation {
    /// Node ids are not exactly `N1..Nn` in creation order.
    #[error("node at position {position} has id {found}")]
    NonSequentialId {
        /// Zero-based position in the node list.
        position: usize,
        /// Id found at that position.
        found: String,
    },
    /// An entity carries a label other than the schema's.
    #[error("{entity} {owner} has label `{found}`, expected `{expected}`")]
    LabelMismatch {
        /// Node or edge.
        entity: EntityKind,
        /// Node id or edge position.
        owner: String,
        /// Label declared by the schema.
        expected: String,
        /// Label found on the entity.
        found: String,
    },
    /// An edge starts and ends at the same node.
    #[error("edge {position} is a self-loop on {node}")]
    SelfLoop {
        /// Zero-based position in the edge list.
        position: usize,
        /// The repeated endpoint.
        node: String,
    },
    /// An edge refers to a node that does not exist.
    #[error("edge {position} refers to missing node {node}")]
    DanglingEndpoint {
        /// Zero-based position in the edge list.
        position: usize,
        /// The missing endpoint.
        node: String,
    },
    /// A declared property is absent from an entity.
    #[error("{entity} {owner} is missing property `{property}`")]
    MissingProperty {
        /// Node or edge.
        entity: EntityKind,
        /// Node id or edge position.
        owner: String,
        /// Name of the absent property.
        property: String,
    },
    /// Reverse-direction edges disagree on a symmetric property.
    #[error("symmetric property `{property}` differs between {from}->{to} ({forward}) and {to}->{from} ({backward})")]
    SymmetricMismatch {
        /// Name of the symmetric property.
        property: String,
        /// Tail of the forward edge.
        from: String,
        /// Head of the forward edge.
        to: String,
        /// Rendered value on the forward edge.
        forward: String,
        /// Rendered value on the reverse edge.
        backward: String,
    },
    /// A computed degree does not match the node's neighbour count.
    #[error("node {node} has {property} = {found}, expected {expected}")]
    DegreeMismatch {
        /// Node whose value is wrong.
        node: String,
        /// Name of the computed property.
        property: String,
        /// Number of distinct neighbours.
        expected: usize,
        /// Rendered stored value.
        found: String,
    },
}

/// Verifies `graph` against the guarantees of a run over `schema`.
///
/// # Errors
/// Returns the first [`InvariantViolation`] found.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use knows_core::{GraphGeneratorBuilder, RandomSource, Schema, TextKind, TextSource, invariants};
///
/// struct Fixed;
/// impl TextSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn text(&self, _: TextKind, _: Option<NonZeroUsize>, _: &mut RandomSource) -> String {
///         "x".to_owned()
///     }
/// }
///
/// let schema = Schema::people();
/// let graph = GraphGeneratorBuilder::new()
///     .with_node_count(6)
///     .with_edge_count(12)
///     .with_seed(3)
///     .build()?
///     .generate(&schema, &Fixed)?;
/// assert!(invariants::check(&graph, &schema).is_ok());
/// # Ok::<(), knows_core::GenerationError>(())
/// ```
pub fn check(graph: &Graph, schema: &Schema) -> Result<(), InvariantViolation> {
    check_nodes(graph, schema)?;
    check_edges(graph, schema)?;
    check_symmetric(graph, schema)?;
    check_computed(graph, schema)
}

fn check_nodes(graph: &Graph, schema: &Schema) -> Result<(), InvariantViolation> {
    for (position, node) in graph.nodes().iter().enumerate() {
        if node.id().index() != position {
            return Err(InvariantViolation::NonSequentialId {
                position,
                found: node.id().to_string(),
            });
        }
        if node.label() != schema.node_label() {
            return Err(InvariantViolation::LabelMismatch {
                entity: EntityKind::Node,
                owner: node.id().to_string(),
                expected: schema.node_label().to_owned(),
                found: node.label().to_owned(),
            });
        }
        let mut declared = schema
            .node_properties()
            .keys()
            .chain(schema.computed_node_properties().keys());
        if let Some(missing) = declared.find(|name| node.property(name).is_none()) {
            return Err(InvariantViolation::MissingProperty {
                entity: EntityKind::Node,
                owner: node.id().to_string(),
                property: missing.clone(),
            });
        }
    }
    Ok(())
}

fn check_edges(graph: &Graph, schema: &Schema) -> Result<(), InvariantViolation> {
    for (position, edge) in graph.edges().iter().enumerate() {
        if edge.source() == edge.target() {
            return Err(InvariantViolation::SelfLoop {
                position,
                node: edge.source().to_string(),
            });
        }
        if let Some(missing) = [edge.source(), edge.target()]
            .into_iter()
            .find(|id| graph.node(*id).is_none())
        {
            return Err(InvariantViolation::DanglingEndpoint {
                position,
                node: missing.to_string(),
            });
        }
        if edge.label() != schema.edge_label() {
            return Err(InvariantViolation::LabelMismatch {
                entity: EntityKind::Edge,
                owner: position.to_string(),
                expected: schema.edge_label().to_owned(),
                found: edge.label().to_owned(),
            });
        }
        if let Some(missing) = schema
            .edge_properties()
            .keys()
            .find(|name| edge.property(name).is_none())
        {
            return Err(InvariantViolation::MissingProperty {
                entity: EntityKind::Edge,
                owner: position.to_string(),
                property: missing.clone(),
            });
        }
    }
    Ok(())
}

fn check_symmetric(graph: &Graph, schema: &Schema) -> Result<(), InvariantViolation> {
    let symmetric: Vec<&str> = schema.symmetric_edge_properties().collect();
    if symmetric.is_empty() {
        return Ok(());
    }
    for edge in graph.edges() {
        for reverse in graph.edges_between(edge.target(), edge.source()) {
            for &name in &symmetric {
                let (Some(forward), Some(backward)) = (edge.property(name), reverse.property(name))
                else {
                    continue;
                };
                if !forward.same_as(backward) {
                    return Err(InvariantViolation::SymmetricMismatch {
                        property: name.to_owned(),
                        from: edge.source().to_string(),
                        to: edge.target().to_string(),
                        forward: forward.to_string(),
                        backward: backward.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_computed(graph: &Graph, schema: &Schema) -> Result<(), InvariantViolation> {
    for (name, kind) in schema.computed_node_properties() {
        match kind {
            ComputedKind::Degree => {
                for node in graph.nodes() {
                    check_degree(graph, node.id(), name)?;
                }
            }
        }
    }
    Ok(())
}

fn check_degree(graph: &Graph, id: NodeId, name: &str) -> Result<(), InvariantViolation> {
    let expected = graph.degree(id);
    let stored = graph.node(id).and_then(|node| node.property(name));
    let matches = stored
        .and_then(|value| value.as_integer())
        .and_then(|value| usize::try_from(value).ok())
        == Some(expected);
    if matches {
        return Ok(());
    }
    Err(InvariantViolation::DegreeMismatch {
        node: id.to_string(),
        property: name.to_owned(),
        expected,
        found: stored.map_or_else(|| "nothing".to_owned(), ToString::to_string),
    })
}
