//! Error types for the knows core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::invariants::InvariantViolation;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Which side of the schema a property definition belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    /// A property declared under `nodeProperties`.
    Node,
    /// A property declared under `edgeProperties`.
    Edge,
    /// A property declared under `computedNodeProperties`.
    ComputedNode,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Node => "node",
            Self::Edge => "edge",
            Self::ComputedNode => "computed node",
        })
    }
}

/// A property definition whose type tag or constraints cannot be honoured.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConstraintError {
    /// The declared type tag matches neither a canonical name nor an alias.
    #[error("unknown type `{tag}`; available types: {available}")]
    UnknownType {
        /// Raw tag as written in the schema.
        tag: Arc<str>,
        /// Comma-separated canonical type names.
        available: Arc<str>,
    },
    /// `min` is greater than `max`.
    #[error("min {min} is greater than max {max}")]
    InvertedRange {
        /// Rendered lower bound.
        min: Arc<str>,
        /// Rendered upper bound.
        max: Arc<str>,
    },
    /// An enum property declared no values.
    #[error("enum must be a non-empty array")]
    EmptyEnum,
    /// An enum value was not a JSON scalar.
    #[error("enum value at position {index} must be a string, number or boolean")]
    UnsupportedEnumValue {
        /// Zero-based position of the rejected value.
        index: usize,
    },
    /// `precision` was negative.
    #[error("precision must be non-negative (got {got})")]
    NegativePrecision {
        /// The rejected precision.
        got: i64,
    },
    /// `precision` exceeded the number of digits an `f64` can carry.
    #[error("precision must be at most {limit} (got {got})")]
    PrecisionTooLarge {
        /// The rejected precision.
        got: i64,
        /// Largest supported precision.
        limit: u32,
    },
    /// No value with the requested precision lies within `[min, max]`.
    #[error("no value with {precision} fractional digit(s) lies between {min} and {max}")]
    EmptyPrecisionGrid {
        /// Requested number of fractional digits.
        precision: u32,
        /// Rendered lower bound.
        min: Arc<str>,
        /// Rendered upper bound.
        max: Arc<str>,
    },
    /// A `min` or `max` bound had the wrong shape for the property type.
    #[error("`{bound}` {reason}")]
    InvalidBound {
        /// Either `min` or `max`.
        bound: &'static str,
        /// Human-readable description of the problem.
        reason: Arc<str>,
    },
    /// `maxLength` was zero or negative.
    #[error("maxLength must be at least 1 (got {got})")]
    InvalidMaxLength {
        /// The rejected length.
        got: i64,
    },
    /// `symmetric` was set on a node property.
    #[error("symmetric applies to edge properties only")]
    SymmetricNodeProperty,
    /// A computed property shares its name with a sampled node property.
    #[error("computed property collides with a declared node property")]
    ComputedNameCollision,
}

define_error_codes! {
    /// Stable codes describing [`ConstraintError`] variants.
    enum ConstraintErrorCode for ConstraintError {
        /// The declared type tag is unknown.
        UnknownType => UnknownType { .. } => "CONSTRAINT_UNKNOWN_TYPE",
        /// `min` is greater than `max`.
        InvertedRange => InvertedRange { .. } => "CONSTRAINT_INVERTED_RANGE",
        /// An enum property declared no values.
        EmptyEnum => EmptyEnum => "CONSTRAINT_EMPTY_ENUM",
        /// An enum value was not a JSON scalar.
        UnsupportedEnumValue => UnsupportedEnumValue { .. } => "CONSTRAINT_UNSUPPORTED_ENUM_VALUE",
        /// `precision` was negative.
        NegativePrecision => NegativePrecision { .. } => "CONSTRAINT_NEGATIVE_PRECISION",
        /// `precision` was too large.
        PrecisionTooLarge => PrecisionTooLarge { .. } => "CONSTRAINT_PRECISION_TOO_LARGE",
        /// No value with the requested precision fits the range.
        EmptyPrecisionGrid => EmptyPrecisionGrid { .. } => "CONSTRAINT_EMPTY_PRECISION_GRID",
        /// A bound had the wrong shape.
        InvalidBound => InvalidBound { .. } => "CONSTRAINT_INVALID_BOUND",
        /// `maxLength` was not positive.
        InvalidMaxLength => InvalidMaxLength { .. } => "CONSTRAINT_INVALID_MAX_LENGTH",
        /// `symmetric` was set on a node property.
        SymmetricNodeProperty => SymmetricNodeProperty => "CONSTRAINT_SYMMETRIC_NODE_PROPERTY",
        /// A computed property name collides with a node property.
        ComputedNameCollision => ComputedNameCollision => "CONSTRAINT_COMPUTED_NAME_COLLISION",
    }
}

/// Error type produced when configuring or running [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A property definition is internally inconsistent.
    #[error("{entity} property `{property}`: {error}")]
    SchemaConstraint {
        /// Which property table the definition came from.
        entity: EntityKind,
        /// Name of the offending property.
        property: Arc<str>,
        #[source]
        /// The specific constraint that failed.
        error: ConstraintError,
    },
    /// The requested graph has no nodes.
    #[error("node count must be at least 1 (got {requested})")]
    NoNodes {
        /// The rejected node count.
        requested: usize,
    },
    /// Edges were requested but fewer than two nodes are available.
    #[error("cannot place {edges} edge(s) without self-loops on {nodes} node(s)")]
    InsufficientNodes {
        /// Number of nodes available.
        nodes: usize,
        /// Number of edges requested.
        edges: usize,
    },
    /// A post-generation consistency check failed; this indicates an engine bug.
    #[error("generated graph violates an invariant: {0}")]
    InvariantViolation(#[source] InvariantViolation),
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A property definition is internally inconsistent.
        SchemaConstraint => SchemaConstraint { .. } => "KNOWS_SCHEMA_CONSTRAINT",
        /// The requested graph has no nodes.
        NoNodes => NoNodes { .. } => "KNOWS_NO_NODES",
        /// Edges were requested with fewer than two nodes.
        InsufficientNodes => InsufficientNodes { .. } => "KNOWS_INSUFFICIENT_NODES",
        /// A post-generation consistency check failed.
        InvariantViolation => InvariantViolation(..) => "KNOWS_INVARIANT_VIOLATION",
    }
}

impl GenerationError {
    /// Retrieve the inner [`ConstraintErrorCode`] when the error originated in
    /// a property definition.
    pub const fn constraint_code(&self) -> Option<ConstraintErrorCode> {
        match self {
            Self::SchemaConstraint { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Returns `true` for the structural family of errors (infeasible counts).
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::NoNodes { .. } | Self::InsufficientNodes { .. })
    }

    pub(crate) fn constraint(
        entity: EntityKind,
        property: &str,
        error: ConstraintError,
    ) -> Self {
        Self::SchemaConstraint {
            entity,
            property: Arc::from(property),
            error,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenerationError>;
