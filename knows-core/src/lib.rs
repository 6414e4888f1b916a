//! Knows core library: schema-driven property graph generation.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assign;
mod computed;
mod error;
mod generator;
mod graph;
pub mod invariants;
mod random;
mod sampler;
mod schema;
#[cfg(test)]
mod test_utils;
mod topology;

pub use crate::{
    error::{
        ConstraintError, ConstraintErrorCode, EntityKind, GenerationError, GenerationErrorCode,
        Result,
    },
    generator::{GraphGenerator, GraphGeneratorBuilder},
    graph::{Edge, Graph, Node, NodeId, Properties, PropertyValue},
    invariants::InvariantViolation,
    random::RandomSource,
    sampler::{DEFAULT_TEXT_MAX_LENGTH, TextKind, TextSource},
    schema::{
        Bound, ComputedKind, Constraints, DEFAULT_EDGE_LABEL, DEFAULT_NODE_LABEL, PropertyDef,
        PropertyKind, Schema, SchemaBuilder, SchemaDocumentError,
    },
    topology::DEFAULT_NODE_RANGE,
};
