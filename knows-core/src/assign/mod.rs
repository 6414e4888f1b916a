//! Property assignment for nodes and edges.
//!
//! Every definition is resolved to a [`Sampler`] up front; assignment then
//! walks entities in creation order and properties in declaration order so
//! the random stream is consumed in a fixed sequence.

mod symmetric;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use tracing::debug;

use self::symmetric::SymmetricCache;
use crate::{
    error::{ConstraintError, EntityKind, GenerationError, Result},
    graph::{Edge, Node, Properties},
    random::RandomSource,
    sampler::{Sampler, TextSource},
    schema::{PropertyDef, Schema},
};

#[derive(Clone, Debug)]
struct ResolvedProperty {
    name: String,
    sampler: Sampler,
    symmetric: bool,
}

/// Samplers for every declared node and edge property of a schema.
#[derive(Clone, Debug)]
pub(crate) struct PropertyPlan {
    node: Vec<ResolvedProperty>,
    edge: Vec<ResolvedProperty>,
}

impl PropertyPlan {
    /// Resolves all definitions, failing on the first inconsistent one.
    pub(crate) fn resolve(schema: &Schema, reference: NaiveDateTime) -> Result<Self> {
        if let Some(name) = schema
            .computed_node_properties()
            .keys()
            .find(|name| schema.node_properties().contains_key(name.as_str()))
        {
            return Err(GenerationError::constraint(
                EntityKind::ComputedNode,
                name,
                ConstraintError::ComputedNameCollision,
            ));
        }
        Ok(Self {
            node: resolve_all(EntityKind::Node, schema.node_properties(), reference)?,
            edge: resolve_all(EntityKind::Edge, schema.edge_properties(), reference)?,
        })
    }

    /// Samples node properties, node by node.
    pub(crate) fn assign_nodes(
        &self,
        nodes: &mut [Node],
        rng: &mut RandomSource,
        text: &dyn TextSource,
    ) {
        for node in nodes {
            let properties = node.properties_mut();
            for property in &self.node {
                properties.insert(property.name.clone(), property.sampler.sample(rng, text));
            }
        }
    }

    /// Samples edge properties, sharing symmetric values across each pair.
    pub(crate) fn assign_edges(
        &self,
        edges: &mut [Edge],
        rng: &mut RandomSource,
        text: &dyn TextSource,
    ) {
        let has_symmetric = self.edge.iter().any(|property| property.symmetric);
        let mut cache = SymmetricCache::default();
        for edge in edges {
            let (source, target) = (edge.source(), edge.target());
            let mut fixed = Properties::new();
            for property in &self.edge {
                let value = match cache.lookup(source, target, &property.name) {
                    Some(shared) if property.symmetric => shared.clone(),
                    _ => property.sampler.sample(rng, text),
                };
                if property.symmetric {
                    fixed.insert(property.name.clone(), value.clone());
                }
                edge.properties_mut().insert(property.name.clone(), value);
            }
            if has_symmetric && !cache.contains(source, target) {
                cache.register(source, target, fixed);
            }
        }
        if has_symmetric {
            debug!(pairs = cache.len(), "symmetric edge values shared");
        }
    }
}

fn resolve_all(
    entity: EntityKind,
    definitions: &IndexMap<String, PropertyDef>,
    reference: NaiveDateTime,
) -> Result<Vec<ResolvedProperty>> {
    definitions
        .iter()
        .map(|(name, def)| {
            if entity == EntityKind::Node && def.is_symmetric() {
                return Err(GenerationError::constraint(
                    entity,
                    name,
                    ConstraintError::SymmetricNodeProperty,
                ));
            }
            let sampler = Sampler::resolve(def, reference)
                .map_err(|error| GenerationError::constraint(entity, name, error))?;
            Ok(ResolvedProperty {
                name: name.clone(),
                sampler,
                symmetric: def.is_symmetric(),
            })
        })
        .collect()
}
