//! Generator configuration and the orchestration of one generation run.
//!
//! A run resolves every property sampler, chooses the counts, then creates
//! nodes, node properties, edge endpoints, edge properties and computed
//! properties in that order from one seeded [`RandomSource`]. The finished
//! graph is checked against [`crate::invariants::check`] before it is
//! returned.

use chrono::{NaiveDateTime, NaiveTime, Utc};
use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    assign::PropertyPlan,
    computed,
    error::GenerationError,
    graph::{Edge, Graph, Node, NodeId},
    invariants,
    random::RandomSource,
    sampler::TextSource,
    schema::Schema,
    topology,
};

/// Configures and constructs [`GraphGenerator`] instances.
///
/// Every setting is optional: missing counts are drawn at generation time,
/// a missing seed is drawn from operating-system entropy, and the reference
/// time defaults to the start of the current UTC day.
///
/// # Examples
/// ```
/// use knows_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_node_count(10)
///     .with_edge_count(15)
///     .with_seed(42)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(generator.node_count(), Some(10));
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphGeneratorBuilder {
    node_count: Option<usize>,
    edge_count: Option<usize>,
    seed: Option<u64>,
    reference_time: Option<NaiveDateTime>,
}

impl GraphGeneratorBuilder {
    /// Creates a builder with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests exactly `count` nodes.
    #[must_use]
    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = Some(count);
        self
    }

    /// Requests exactly `count` edges.
    #[must_use]
    pub fn with_edge_count(mut self, count: usize) -> Self {
        self.edge_count = Some(count);
        self
    }

    /// Fixes the seed of the random stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Anchors `now` and relative offsets of `DateTime` bounds.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use knows_core::GraphGeneratorBuilder;
    ///
    /// let noon = NaiveDate::from_ymd_opt(2024, 6, 15)
    ///     .and_then(|date| date.and_hms_opt(12, 0, 0))
    ///     .expect("valid instant");
    /// let generator = GraphGeneratorBuilder::new()
    ///     .with_reference_time(noon)
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert_eq!(generator.reference_time(), noon);
    /// ```
    #[must_use]
    pub fn with_reference_time(mut self, reference: NaiveDateTime) -> Self {
        self.reference_time = Some(reference);
        self
    }

    /// Returns the requested node count, if any.
    #[must_use]
    pub fn node_count(&self) -> Option<usize> {
        self.node_count
    }

    /// Returns the requested edge count, if any.
    #[must_use]
    pub fn edge_count(&self) -> Option<usize> {
        self.edge_count
    }

    /// Validates explicit counts and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GenerationError::NoNodes`] when zero nodes are requested and
    /// [`GenerationError::InsufficientNodes`] when edges are requested on a
    /// single node.
    ///
    /// # Examples
    /// ```
    /// use knows_core::{GenerationErrorCode, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_node_count(1)
    ///     .with_edge_count(1)
    ///     .build()
    ///     .expect_err("one node cannot host an edge");
    /// assert_eq!(err.code(), GenerationErrorCode::InsufficientNodes);
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        if let Some(nodes) = self.node_count {
            topology::check_counts(nodes, self.edge_count.unwrap_or(0))?;
        }
        let reference_time = self
            .reference_time
            .unwrap_or_else(|| Utc::now().date_naive().and_time(NaiveTime::MIN));
        Ok(GraphGenerator {
            node_count: self.node_count,
            edge_count: self.edge_count,
            seed: self.seed,
            reference_time,
        })
    }
}

/// Turns a [`Schema`] into a populated [`Graph`].
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use knows_core::{
///     GraphGeneratorBuilder, PropertyDef, RandomSource, Schema, TextKind, TextSource,
/// };
///
/// struct Fixed;
/// impl TextSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn text(&self, _: TextKind, _: Option<NonZeroUsize>, _: &mut RandomSource) -> String {
///         "x".to_owned()
///     }
/// }
///
/// let schema = Schema::builder()
///     .node_property("age", PropertyDef::typed("Int").with_min(18_i64).with_max(99_i64))
///     .build();
/// let generator = GraphGeneratorBuilder::new()
///     .with_node_count(4)
///     .with_edge_count(0)
///     .with_seed(7)
///     .build()?;
/// let graph = generator.generate(&schema, &Fixed)?;
/// assert_eq!(graph, generator.generate(&schema, &Fixed)?);
/// assert!(graph.nodes().iter().all(|node| {
///     node.property("age")
///         .and_then(|age| age.as_integer())
///         .is_some_and(|age| (18..=99).contains(&age))
/// }));
/// # Ok::<(), knows_core::GenerationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    node_count: Option<usize>,
    edge_count: Option<usize>,
    seed: Option<u64>,
    reference_time: NaiveDateTime,
}

impl GraphGenerator {
    /// Returns the configured node count, if any.
    #[must_use]
    pub fn node_count(&self) -> Option<usize> {
        self.node_count
    }

    /// Returns the configured edge count, if any.
    #[must_use]
    pub fn edge_count(&self) -> Option<usize> {
        self.edge_count
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the instant `now` resolves to in `DateTime` bounds.
    #[must_use]
    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
    }

    /// Generates one graph.
    ///
    /// # Errors
    /// Returns [`GenerationError::SchemaConstraint`] when a property
    /// definition cannot be resolved, a structural error when drawn or
    /// requested counts are infeasible, and
    /// [`GenerationError::InvariantViolation`] if the finished graph fails its
    /// consistency checks. No partial graph is ever returned.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, schema, text),
        fields(
            text_source = %text.name(),
            node_label = schema.node_label(),
            edge_label = schema.edge_label(),
            seed = field::Empty,
            nodes = field::Empty,
            edges = field::Empty,
        ),
    )]
    pub fn generate(&self, schema: &Schema, text: &dyn TextSource) -> Result<Graph> {
        let mut rng = RandomSource::from_optional_seed(self.seed);
        let span = Span::current();
        span.record("seed", rng.seed());
        if self.seed.is_none() {
            info!(seed = rng.seed(), "no seed supplied, drew one from entropy");
        }

        let plan = PropertyPlan::resolve(schema, self.reference_time)?;
        let counts = topology::choose_counts(self.node_count, self.edge_count, &mut rng)?;
        span.record("nodes", counts.nodes);
        span.record("edges", counts.edges);

        let mut nodes: Vec<Node> = (0..counts.nodes)
            .map(|index| Node::new(NodeId::from_index(index), schema.node_label()))
            .collect();
        plan.assign_nodes(&mut nodes, &mut rng, text);

        let mut edges: Vec<Edge> = topology::draw_endpoints(counts, &mut rng)
            .into_iter()
            .map(|(source, target)| Edge::new(source, target, schema.edge_label()))
            .collect();
        plan.assign_edges(&mut edges, &mut rng, text);

        computed::apply(schema.computed_node_properties(), &mut nodes, &edges);

        let graph = Graph::from_parts(schema.node_label(), schema.edge_label(), nodes, edges);
        invariants::check(&graph, schema).map_err(GenerationError::InvariantViolation)?;
        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "graph generated"
        );
        Ok(graph)
    }
}
