//! Fixture schemas exercising different sampler mixes.
//!
//! Every fixture is paired with a fixed seed and reference time through
//! [`generator`] so benchmark runs replay the same graphs.

use std::fmt;

use chrono::{DateTime, Utc};
use knows_core::{ComputedKind, GraphGenerator, GraphGeneratorBuilder, PropertyDef, Schema};

use crate::{error::BenchSetupError, params::GenerateBenchParams};

/// Schema shapes measured by the benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaFixture {
    /// Labels only; measures topology alone.
    Bare,
    /// The built-in people schema.
    People,
    /// Numeric, enum, temporal and textual properties with symmetric edges
    /// and a computed degree.
    Catalogue,
}

impl SchemaFixture {
    /// Every fixture in benchmark order.
    pub const ALL: [Self; 3] = [Self::Bare, Self::People, Self::Catalogue];

    /// Short identifier used in benchmark ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::People => "people",
            Self::Catalogue => "catalogue",
        }
    }

    /// Builds the fixture schema.
    #[must_use]
    pub fn schema(self) -> Schema {
        match self {
            Self::Bare => Schema::builder().build(),
            Self::People => Schema::people(),
            Self::Catalogue => catalogue(),
        }
    }
}

impl fmt::Display for SchemaFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn catalogue() -> Schema {
    Schema::builder()
        .node_label("Product")
        .edge_label("boughtWith")
        .node_property("sku", PropertyDef::typed("Uuid"))
        .node_property("title", PropertyDef::typed("Sentence"))
        .node_property(
            "price",
            PropertyDef::typed("Float")
                .with_min(0.99)
                .with_max(999.99)
                .with_precision(2),
        )
        .node_property("stock", PropertyDef::typed("INT64").with_min(0_i64).with_max(500_i64))
        .node_property("category", PropertyDef::enumeration(["books", "garden", "toys"]))
        .node_property("listedAt", PropertyDef::typed("DateTime").with_min("-2y"))
        .node_property("description", PropertyDef::typed("Text").with_max_length(120))
        .edge_property(
            "firstPaired",
            PropertyDef::typed("Date")
                .with_min("2015-01-01")
                .with_max("2024-12-31")
                .symmetric(),
        )
        .edge_property("lift", PropertyDef::typed("Double").symmetric())
        .edge_property("orders", PropertyDef::typed("Int").with_min(1_i64).with_max(50_i64))
        .computed_node_property("pairedWith", ComputedKind::Degree)
        .build()
}

/// Builds a seeded generator for `params` anchored at the Unix epoch.
///
/// # Errors
/// Returns [`BenchSetupError::Generation`] when the counts are infeasible.
pub fn generator(
    params: GenerateBenchParams,
    seed: u64,
) -> Result<GraphGenerator, BenchSetupError> {
    let generator = GraphGeneratorBuilder::new()
        .with_node_count(params.nodes)
        .with_edge_count(params.edges)
        .with_seed(seed)
        .with_reference_time(DateTime::<Utc>::UNIX_EPOCH.naive_utc())
        .build()?;
    Ok(generator)
}
