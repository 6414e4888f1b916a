//! Type generator registry.
//!
//! A [`PropertyDef`] is resolved once per run into a [`Sampler`]; every
//! constraint problem surfaces during resolution so that sampling itself is
//! infallible.

mod numeric;
mod temporal;
mod text;
mod type_tag;

use chrono::NaiveDateTime;
use serde_json::Value;

pub use self::text::{DEFAULT_TEXT_MAX_LENGTH, TextKind, TextSource};
pub(crate) use self::type_tag::TypeTag;
use self::{
    numeric::{FloatSampler, IntSampler},
    temporal::{DateSampler, DateTimeSampler, TimeSampler},
    text::TextSampler,
};
use crate::{
    error::ConstraintError,
    graph::PropertyValue,
    random::RandomSource,
    schema::{PropertyDef, PropertyKind},
};

const INT_DEFAULT_RANGE: std::ops::RangeInclusive<i64> = 0..=10_000;
const YEAR_DEFAULT_RANGE: std::ops::RangeInclusive<i64> = 1950..=2025;
const FLOAT_DEFAULT_PRECISION: u32 = 2;
const DOUBLE_DEFAULT_PRECISION: u32 = 4;

/// Draws values for one property definition.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Sampler {
    Int(IntSampler),
    Float(FloatSampler),
    Boolean,
    Date(DateSampler),
    DateTime(DateTimeSampler),
    Time(TimeSampler),
    Text(TextSampler),
    Enum(EnumSampler),
}

impl Sampler {
    /// Resolves `def` against the registry.
    ///
    /// `reference` anchors `now` and relative offsets of `DateTime` bounds.
    pub(crate) fn resolve(
        def: &PropertyDef,
        reference: NaiveDateTime,
    ) -> Result<Self, ConstraintError> {
        let constraints = def.constraints();
        if let Some(got) = constraints.precision.filter(|precision| *precision < 0) {
            return Err(ConstraintError::NegativePrecision { got });
        }
        let tag = match def.kind() {
            PropertyKind::Enum => {
                return EnumSampler::resolve(&constraints.enum_values).map(Self::Enum);
            }
            PropertyKind::Typed(raw) => {
                TypeTag::resolve(raw).ok_or_else(|| ConstraintError::UnknownType {
                    tag: raw.as_str().into(),
                    available: TypeTag::available().into(),
                })?
            }
        };
        Ok(match tag {
            TypeTag::Int | TypeTag::Integer => {
                Self::Int(IntSampler::resolve(constraints, INT_DEFAULT_RANGE)?)
            }
            TypeTag::Year => Self::Int(IntSampler::resolve(constraints, YEAR_DEFAULT_RANGE)?),
            TypeTag::Float => {
                Self::Float(FloatSampler::resolve(constraints, FLOAT_DEFAULT_PRECISION)?)
            }
            TypeTag::Double => {
                Self::Float(FloatSampler::resolve(constraints, DOUBLE_DEFAULT_PRECISION)?)
            }
            TypeTag::Boolean | TypeTag::Bool => Self::Boolean,
            TypeTag::Date => Self::Date(DateSampler::resolve(constraints)?),
            TypeTag::DateTime => Self::DateTime(DateTimeSampler::resolve(constraints, reference)?),
            TypeTag::Time => Self::Time(TimeSampler::resolve(constraints)?),
            TypeTag::Text(kind) => Self::Text(TextSampler::resolve(kind, constraints)?),
        })
    }

    /// Draws one value.
    pub(crate) fn sample(&self, rng: &mut RandomSource, text: &dyn TextSource) -> PropertyValue {
        match self {
            Self::Int(sampler) => PropertyValue::Integer(sampler.sample(rng)),
            Self::Float(sampler) => PropertyValue::Float(sampler.sample(rng)),
            Self::Boolean => PropertyValue::Boolean(rng.coin()),
            Self::Date(sampler) => PropertyValue::String(sampler.sample(rng)),
            Self::DateTime(sampler) => PropertyValue::String(sampler.sample(rng)),
            Self::Time(sampler) => PropertyValue::String(sampler.sample(rng)),
            Self::Text(sampler) => PropertyValue::String(sampler.sample(rng, text)),
            Self::Enum(sampler) => sampler.sample(rng),
        }
    }
}

/// Uniform choice over a non-empty list of scalars.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EnumSampler {
    first: PropertyValue,
    rest: Vec<PropertyValue>,
}

impl EnumSampler {
    fn resolve(values: &[Value]) -> Result<Self, ConstraintError> {
        let mut scalars = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                scalar(value).ok_or(ConstraintError::UnsupportedEnumValue { index })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();
        let first = scalars.next().ok_or(ConstraintError::EmptyEnum)?;
        Ok(Self {
            first,
            rest: scalars.collect(),
        })
    }

    fn sample(&self, rng: &mut RandomSource) -> PropertyValue {
        let position = rng.index(self.rest.len() + 1);
        position
            .checked_sub(1)
            .and_then(|offset| self.rest.get(offset))
            .unwrap_or(&self.first)
            .clone()
    }
}

fn scalar(value: &Value) -> Option<PropertyValue> {
    match value {
        Value::String(text) => Some(PropertyValue::String(text.clone())),
        Value::Bool(flag) => Some(PropertyValue::Boolean(*flag)),
        Value::Number(number) => number
            .as_i64()
            .map(PropertyValue::Integer)
            .or_else(|| number.as_f64().map(PropertyValue::Float)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
