//! Read-only property graph produced by a generation run.
//!
//! Serializers and visualizers consume [`Graph`] through its accessors; there
//! are no mutation operations once the generator hands it over.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    num::NonZeroUsize,
};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Identifier of a node, rendered as `N<k>` with `k` starting at 1.
///
/// # Examples
/// ```
/// use knows_core::NodeId;
///
/// let id = NodeId::from_ordinal(3).expect("ordinals start at 1");
/// assert_eq!(id.to_string(), "N3");
/// assert_eq!(id.index(), 2);
/// assert!(NodeId::from_ordinal(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Creates the id for the `ordinal`-th node (1-based).
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        NonZeroUsize::new(ordinal).map(Self)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// The 1-based ordinal `k` of `N<k>`.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.0.get()
    }

    /// Zero-based position of the node in [`Graph::nodes`].
    #[must_use]
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scalar value stored on a node or edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text, including ISO-8601 temporal values.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Floating-point number, already rounded to the declared precision.
    Float(f64),
    /// Boolean flag.
    Boolean(bool),
}

impl PropertyValue {
    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Equality that treats floats bit-for-bit, used for symmetric checks.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            _ => self == other,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// Property mapping in declaration order.
pub type Properties = IndexMap<String, PropertyValue>;

/// A generated node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    id: NodeId,
    label: String,
    properties: Properties,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: &str) -> Self {
        Self {
            id,
            label: label.to_owned(),
            properties: Properties::new(),
        }
    }

    /// Node identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Node label taken from the schema.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Properties in declaration order, computed properties last.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Looks up a single property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub(crate) fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

/// A generated directed edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    label: String,
    properties: Properties,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, label: &str) -> Self {
        Self {
            source,
            target,
            label: label.to_owned(),
            properties: Properties::new(),
        }
    }

    /// Tail of the edge.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Head of the edge.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Edge label taken from the schema.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Looks up a single property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub(crate) fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

/// Immutable property graph with an adjacency index.
///
/// # Examples
/// ```
/// use knows_core::{GraphGeneratorBuilder, Schema, TextKind, TextSource, RandomSource};
/// use std::num::NonZeroUsize;
///
/// struct Fixed;
/// impl TextSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn text(&self, _: TextKind, _: Option<NonZeroUsize>, _: &mut RandomSource) -> String {
///         "x".to_owned()
///     }
/// }
///
/// let graph = GraphGeneratorBuilder::new()
///     .with_node_count(3)
///     .with_edge_count(2)
///     .with_seed(1)
///     .build()?
///     .generate(&Schema::builder().build(), &Fixed)?;
/// assert_eq!(graph.nodes().len(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), knows_core::GenerationError>(())
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    node_label: String,
    edge_label: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    pair_index: HashMap<(NodeId, NodeId), Vec<usize>>,
    #[serde(skip)]
    adjacency: Vec<BTreeSet<NodeId>>,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.node_label == other.node_label
            && self.edge_label == other.edge_label
            && self.nodes == other.nodes
            && self.edges == other.edges
    }
}

/// Distinct neighbours of each of `node_count` nodes, either edge direction.
///
/// Endpoints outside `N1..=N{node_count}` are skipped.
pub(crate) fn neighbour_sets(node_count: usize, edges: &[Edge]) -> Vec<BTreeSet<NodeId>> {
    let mut adjacency = vec![BTreeSet::new(); node_count];
    for edge in edges {
        if let Some(neighbors) = adjacency.get_mut(edge.source.index()) {
            neighbors.insert(edge.target);
        }
        if let Some(neighbors) = adjacency.get_mut(edge.target.index()) {
            neighbors.insert(edge.source);
        }
    }
    adjacency
}

impl Graph {
    pub(crate) fn from_parts(
        node_label: &str,
        edge_label: &str,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        let mut pair_index: HashMap<(NodeId, NodeId), Vec<usize>> = HashMap::new();
        for (position, edge) in edges.iter().enumerate() {
            pair_index
                .entry((edge.source, edge.target))
                .or_default()
                .push(position);
        }
        let adjacency = neighbour_sets(nodes.len(), &edges);
        Self {
            node_label: node_label.to_owned(),
            edge_label: edge_label.to_owned(),
            nodes,
            edges,
            pair_index,
            adjacency,
        }
    }

    /// Label shared by every node.
    #[must_use]
    pub fn node_label(&self) -> &str {
        &self.node_label
    }

    /// Label shared by every edge.
    #[must_use]
    pub fn edge_label(&self) -> &str {
        &self.edge_label
    }

    /// Nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in creation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).filter(|node| node.id == id)
    }

    /// Edges running from `source` to `target`, in creation order.
    pub fn edges_between(
        &self,
        source: NodeId,
        target: NodeId,
    ) -> impl Iterator<Item = &Edge> + '_ {
        self.pair_index
            .get(&(source, target))
            .into_iter()
            .flatten()
            .filter_map(|&position| self.edges.get(position))
    }

    /// Distinct nodes joined to `id` by an edge in either direction.
    ///
    /// Returns `None` when `id` is not part of the graph.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(id.index())
    }

    /// Number of distinct neighbours of `id`.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).map_or(0, BTreeSet::len)
    }
}
