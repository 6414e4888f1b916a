//! In-memory schema model consumed by the generator.
//!
//! A [`Schema`] is a plain description: type tags and constraints are kept as
//! written and only interpreted when the generator resolves samplers, so an
//! inconsistent definition surfaces as a [`crate::GenerationError`] before
//! any entity is created.

mod document;

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

pub use self::document::SchemaDocumentError;

/// Node label applied when a schema does not declare one.
pub const DEFAULT_NODE_LABEL: &str = "Node";
/// Edge label applied when a schema does not declare one.
pub const DEFAULT_EDGE_LABEL: &str = "edge";

/// A `min` or `max` constraint as written in the schema.
///
/// Numeric kinds read integers or floats; temporal kinds read text.
#[derive(Clone, Debug, PartialEq)]
pub enum Bound {
    /// An integral bound.
    Integer(i64),
    /// A fractional bound.
    Float(f64),
    /// A textual bound such as `2020-01-01` or `-30y`.
    Text(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Bound {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Declared kind of a property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKind {
    /// A named type such as `Int`, `Date` or `Email`, possibly an alias.
    Typed(String),
    /// A closed set of values listed in [`Constraints::enum_values`].
    Enum,
}

/// Optional constraints attached to a property definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Inclusive lower bound.
    pub min: Option<Bound>,
    /// Inclusive upper bound.
    pub max: Option<Bound>,
    /// Fractional digits kept by `Float` and `Double`.
    pub precision: Option<i64>,
    /// Maximum length, in characters, of textual values.
    pub max_length: Option<i64>,
    /// Candidate values of an enum property.
    pub enum_values: Vec<Value>,
}

/// Definition of a single sampled property.
///
/// # Examples
/// ```
/// use knows_core::{PropertyDef, PropertyKind};
///
/// let salary = PropertyDef::typed("Int").with_min(30_000_i64).with_max(200_000_i64);
/// assert_eq!(salary.kind(), &PropertyKind::Typed("Int".into()));
/// assert!(!salary.is_symmetric());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDef {
    kind: PropertyKind,
    constraints: Constraints,
    symmetric: bool,
}

impl PropertyDef {
    /// Creates a definition of the named type without constraints.
    #[must_use]
    pub fn typed(tag: impl Into<String>) -> Self {
        Self {
            kind: PropertyKind::Typed(tag.into()),
            constraints: Constraints::default(),
            symmetric: false,
        }
    }

    /// Creates an enum definition choosing among `values`.
    #[must_use]
    pub fn enumeration<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            kind: PropertyKind::Enum,
            constraints: Constraints {
                enum_values: values.into_iter().map(Into::into).collect(),
                ..Constraints::default()
            },
            symmetric: false,
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn with_min(mut self, min: impl Into<Bound>) -> Self {
        self.constraints.min = Some(min.into());
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_max(mut self, max: impl Into<Bound>) -> Self {
        self.constraints.max = Some(max.into());
        self
    }

    /// Sets the number of fractional digits for `Float`/`Double`.
    #[must_use]
    pub fn with_precision(mut self, precision: i64) -> Self {
        self.constraints.precision = Some(precision);
        self
    }

    /// Sets the maximum length of textual values.
    #[must_use]
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.constraints.max_length = Some(max_length);
        self
    }

    /// Marks the property as shared between reverse-direction edges.
    #[must_use]
    pub fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }

    /// Declared kind.
    #[must_use]
    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    /// Declared constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Whether reverse-direction edges share this property's value.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub(crate) fn constraints_mut(&mut self) -> &mut Constraints {
        &mut self.constraints
    }
}

/// Node property derived from the final topology.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComputedKind {
    /// Number of distinct neighbours, ignoring edge direction.
    Degree,
}

impl ComputedKind {
    /// Names accepted in schema documents.
    pub const NAMES: [&'static str; 1] = ["degree"];

    /// Parses the schema-document name of a computed kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "degree" => Some(Self::Degree),
            _ => None,
        }
    }
}

impl fmt::Display for ComputedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degree => f.write_str("degree"),
        }
    }
}

/// Labels, property definitions and computed properties of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    node_label: String,
    edge_label: String,
    node_properties: IndexMap<String, PropertyDef>,
    edge_properties: IndexMap<String, PropertyDef>,
    computed_node_properties: IndexMap<String, ComputedKind>,
}

impl Schema {
    /// Starts an empty schema with the default labels.
    ///
    /// # Examples
    /// ```
    /// use knows_core::{ComputedKind, PropertyDef, Schema};
    ///
    /// let schema = Schema::builder()
    ///     .node_label("Employee")
    ///     .node_property("salary", PropertyDef::typed("Int").with_min(1_i64).with_max(9_i64))
    ///     .computed_node_property("connectionCount", ComputedKind::Degree)
    ///     .build();
    /// assert_eq!(schema.node_label(), "Employee");
    /// assert_eq!(schema.edge_label(), "edge");
    /// assert_eq!(schema.node_properties().len(), 1);
    /// ```
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The built-in "Person knows Person" schema used when no schema file is
    /// supplied.
    #[must_use]
    pub fn people() -> Self {
        Self::builder()
            .node_label("Person")
            .edge_label("knows")
            .node_property("firstName", PropertyDef::typed("FirstName"))
            .node_property("lastName", PropertyDef::typed("LastName"))
            .edge_property("strength", PropertyDef::typed("Int").with_min(1_i64).with_max(100_i64))
            .edge_property(
                "lastMeetingDate",
                PropertyDef::typed("Date")
                    .with_min("1955-01-01")
                    .with_max("2025-06-28")
                    .symmetric(),
            )
            .build()
    }

    /// Label applied to every node.
    #[must_use]
    pub fn node_label(&self) -> &str {
        &self.node_label
    }

    /// Label applied to every edge.
    #[must_use]
    pub fn edge_label(&self) -> &str {
        &self.edge_label
    }

    /// Sampled node properties in declaration order.
    #[must_use]
    pub fn node_properties(&self) -> &IndexMap<String, PropertyDef> {
        &self.node_properties
    }

    /// Sampled edge properties in declaration order.
    #[must_use]
    pub fn edge_properties(&self) -> &IndexMap<String, PropertyDef> {
        &self.edge_properties
    }

    /// Computed node properties in declaration order.
    #[must_use]
    pub fn computed_node_properties(&self) -> &IndexMap<String, ComputedKind> {
        &self.computed_node_properties
    }

    /// Names of edge properties marked `symmetric`.
    pub fn symmetric_edge_properties(&self) -> impl Iterator<Item = &str> + '_ {
        self.edge_properties
            .iter()
            .filter(|(_, def)| def.is_symmetric())
            .map(|(name, _)| name.as_str())
    }
}

/// Incrementally assembles a [`Schema`].
#[derive(Clone, Debug)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self {
            schema: Schema {
                node_label: DEFAULT_NODE_LABEL.to_owned(),
                edge_label: DEFAULT_EDGE_LABEL.to_owned(),
                node_properties: IndexMap::new(),
                edge_properties: IndexMap::new(),
                computed_node_properties: IndexMap::new(),
            },
        }
    }
}

impl SchemaBuilder {
    /// Overrides the node label.
    #[must_use]
    pub fn node_label(mut self, label: impl Into<String>) -> Self {
        self.schema.node_label = label.into();
        self
    }

    /// Overrides the edge label.
    #[must_use]
    pub fn edge_label(mut self, label: impl Into<String>) -> Self {
        self.schema.edge_label = label.into();
        self
    }

    /// Declares a sampled node property. Redeclaring a name replaces the
    /// definition but keeps its original position.
    #[must_use]
    pub fn node_property(mut self, name: impl Into<String>, def: PropertyDef) -> Self {
        self.schema.node_properties.insert(name.into(), def);
        self
    }

    /// Declares a sampled edge property.
    #[must_use]
    pub fn edge_property(mut self, name: impl Into<String>, def: PropertyDef) -> Self {
        self.schema.edge_properties.insert(name.into(), def);
        self
    }

    /// Declares a node property derived from the final topology.
    #[must_use]
    pub fn computed_node_property(mut self, name: impl Into<String>, kind: ComputedKind) -> Self {
        self.schema.computed_node_properties.insert(name.into(), kind);
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        self.schema
    }
}
