//! JSON schema document loader.
//!
//! Accepts documents of the following shape:
//!
//! ```json
//! {
//!     "nodeLabel": "Employee",
//!     "edgeLabel": "collaborates",
//!     "nodeProperties": {
//!         "name": "String",
//!         "department": {"enum": ["HR", "Engineering", "Sales"]},
//!         "salary": {"type": "Int", "min": 30000, "max": 200000}
//!     },
//!     "edgeProperties": {
//!         "since": {"type": "Date", "symmetric": true}
//!     },
//!     "computedNodeProperties": {"connectionCount": "degree"}
//! }
//! ```
//!
//! Shape errors are reported per property. Whether a type tag exists and
//! whether constraints agree with each other is left to sampler resolution.

use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Bound, ComputedKind, PropertyDef, Schema, SchemaBuilder};
use crate::error::EntityKind;

const PROPERTY_KEYS: [&str; 7] = [
    "type",
    "enum",
    "min",
    "max",
    "precision",
    "maxLength",
    "symmetric",
];

/// Errors raised while decoding a schema document.
#[derive(Debug, Error)]
pub enum SchemaDocumentError {
    /// The document is not valid JSON or does not have the expected top-level shape.
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
    /// A label was present but empty.
    #[error("{field} cannot be empty")]
    EmptyLabel {
        /// Either `nodeLabel` or `edgeLabel`.
        field: &'static str,
    },
    /// A property definition had an unexpected shape.
    #[error("{entity} property `{property}`: {reason}")]
    InvalidProperty {
        /// Which property table the definition came from.
        entity: EntityKind,
        /// Name of the offending property.
        property: String,
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A computed property named an unsupported computation.
    #[error("unknown computed property type `{kind}` for `{property}`; available types: {available}")]
    UnknownComputedKind {
        /// Name of the computed property.
        property: String,
        /// Computation requested by the document.
        kind: String,
        /// Comma-separated supported computations.
        available: String,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SchemaDocument {
    node_label: Option<String>,
    edge_label: Option<String>,
    #[serde(default)]
    node_properties: IndexMap<String, Value>,
    #[serde(default)]
    edge_properties: IndexMap<String, Value>,
    #[serde(default)]
    computed_node_properties: IndexMap<String, String>,
}

impl Schema {
    /// Decodes a schema from JSON text.
    ///
    /// # Errors
    /// Returns [`SchemaDocumentError`] when the text is not valid JSON, a
    /// label is empty, a property has an unexpected shape, or a computed
    /// property names an unknown computation.
    ///
    /// # Examples
    /// ```
    /// use knows_core::Schema;
    ///
    /// let schema = Schema::from_json_str(r#"{
    ///     "nodeLabel": "City",
    ///     "nodeProperties": {"population": {"type": "Int", "min": 1}},
    ///     "computedNodeProperties": {"roads": "degree"}
    /// }"#)?;
    /// assert_eq!(schema.node_label(), "City");
    /// assert_eq!(schema.edge_label(), "edge");
    /// assert!(schema.node_properties().contains_key("population"));
    /// # Ok::<(), knows_core::SchemaDocumentError>(())
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, SchemaDocumentError> {
        let document: SchemaDocument = serde_json::from_str(text)?;
        document.into_schema()
    }

    /// Decodes a schema from a JSON byte stream.
    ///
    /// # Errors
    /// Returns [`SchemaDocumentError`] under the same conditions as
    /// [`Schema::from_json_str`], including I/O failures surfaced by the reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, SchemaDocumentError> {
        let document: SchemaDocument = serde_json::from_reader(reader)?;
        document.into_schema()
    }
}

impl SchemaDocument {
    fn into_schema(self) -> Result<Schema, SchemaDocumentError> {
        let mut builder = SchemaBuilder::default();
        if let Some(label) = self.node_label {
            builder = builder.node_label(non_empty(label, "nodeLabel")?);
        }
        if let Some(label) = self.edge_label {
            builder = builder.edge_label(non_empty(label, "edgeLabel")?);
        }
        for (name, raw) in self.node_properties {
            let def = parse_property(EntityKind::Node, &name, raw)?;
            builder = builder.node_property(name, def);
        }
        for (name, raw) in self.edge_properties {
            let def = parse_property(EntityKind::Edge, &name, raw)?;
            builder = builder.edge_property(name, def);
        }
        for (name, raw_kind) in self.computed_node_properties {
            let Some(kind) = ComputedKind::from_name(&raw_kind) else {
                return Err(SchemaDocumentError::UnknownComputedKind {
                    property: name,
                    kind: raw_kind,
                    available: ComputedKind::NAMES.join(", "),
                });
            };
            builder = builder.computed_node_property(name, kind);
        }
        Ok(builder.build())
    }
}

fn non_empty(label: String, field: &'static str) -> Result<String, SchemaDocumentError> {
    if label.is_empty() {
        return Err(SchemaDocumentError::EmptyLabel { field });
    }
    Ok(label)
}

fn parse_property(
    entity: EntityKind,
    name: &str,
    raw: Value,
) -> Result<PropertyDef, SchemaDocumentError> {
    let invalid = |reason: String| SchemaDocumentError::InvalidProperty {
        entity,
        property: name.to_owned(),
        reason,
    };
    match raw {
        Value::String(tag) if tag.is_empty() => Err(invalid("type cannot be empty".to_owned())),
        Value::String(tag) => Ok(PropertyDef::typed(tag)),
        Value::Object(fields) => parse_detailed(fields).map_err(invalid),
        other => Err(invalid(format!(
            "definition must be a type name or an object, found {}",
            json_kind(&other)
        ))),
    }
}

fn parse_detailed(mut fields: Map<String, Value>) -> Result<PropertyDef, String> {
    if let Some(unknown) = fields.keys().find(|key| !PROPERTY_KEYS.contains(&key.as_str())) {
        return Err(format!("unknown key `{unknown}`"));
    }

    let mut def = match (fields.remove("type"), fields.remove("enum")) {
        (Some(_), Some(_)) => return Err("must have either 'type' or 'enum', not both".to_owned()),
        (None, None) => return Err("must have 'type' or 'enum' field".to_owned()),
        (Some(Value::String(tag)), None) if !tag.is_empty() => PropertyDef::typed(tag),
        (Some(_), None) => return Err("'type' must be a non-empty string".to_owned()),
        (None, Some(Value::Array(values))) => PropertyDef::enumeration(values),
        (None, Some(_)) => return Err("'enum' must be an array".to_owned()),
    };

    if let Some(raw) = fields.remove("min") {
        def = def.with_min(parse_bound(raw, "min")?);
    }
    if let Some(raw) = fields.remove("max") {
        def = def.with_max(parse_bound(raw, "max")?);
    }
    if let Some(raw) = fields.remove("precision") {
        def.constraints_mut().precision = Some(parse_integer(&raw, "precision")?);
    }
    if let Some(raw) = fields.remove("maxLength") {
        def.constraints_mut().max_length = Some(parse_integer(&raw, "maxLength")?);
    }
    match fields.remove("symmetric") {
        None | Some(Value::Bool(false)) => {}
        Some(Value::Bool(true)) => def = def.symmetric(),
        Some(_) => return Err("'symmetric' must be a boolean".to_owned()),
    }
    Ok(def)
}

fn parse_bound(raw: Value, field: &str) -> Result<Bound, String> {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .map(Bound::Integer)
            .or_else(|| number.as_f64().map(Bound::Float))
            .ok_or_else(|| format!("'{field}' is out of range")),
        Value::String(text) => Ok(Bound::Text(text)),
        other => Err(format!(
            "'{field}' must be a number or a string, found {}",
            json_kind(&other)
        )),
    }
}

fn parse_integer(raw: &Value, field: &str) -> Result<i64, String> {
    raw.as_i64()
        .ok_or_else(|| format!("'{field}' must be an integer"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
