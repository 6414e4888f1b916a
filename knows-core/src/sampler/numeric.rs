//! Integer and fixed-precision float samplers.

use std::{ops::RangeInclusive, sync::Arc};

use crate::{
    error::ConstraintError,
    random::RandomSource,
    schema::{Bound, Constraints},
};

/// Largest number of fractional digits an `f64` represents faithfully.
pub(crate) const MAX_PRECISION: u32 = 15;

/// Relative distance below which a scaled bound counts as a grid point.
const GRID_TOLERANCE: f64 = 1e-9;

/// Uniform integer over an inclusive range.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IntSampler {
    range: RangeInclusive<i64>,
}

impl IntSampler {
    pub(crate) fn resolve(
        constraints: &Constraints,
        defaults: RangeInclusive<i64>,
    ) -> Result<Self, ConstraintError> {
        let min = integer_bound(constraints.min.as_ref(), "min")?.unwrap_or(*defaults.start());
        let max = integer_bound(constraints.max.as_ref(), "max")?.unwrap_or(*defaults.end());
        if min > max {
            return Err(inverted(min, max));
        }
        Ok(Self { range: min..=max })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource) -> i64 {
        rng.int_in(self.range.clone())
    }
}

fn integer_bound(
    bound: Option<&Bound>,
    name: &'static str,
) -> Result<Option<i64>, ConstraintError> {
    match bound {
        None => Ok(None),
        Some(Bound::Integer(value)) => Ok(Some(*value)),
        // Integral floats below 2^63 convert exactly.
        Some(Bound::Float(value)) if value.fract() == 0.0 && value.abs() < 9.2e18 => {
            Ok(Some(*value as i64))
        }
        Some(Bound::Float(value)) => Err(invalid_bound(
            name,
            format!("must be an integer (got {value})"),
        )),
        Some(Bound::Text(text)) => Err(invalid_bound(
            name,
            format!("must be a number (got {text:?})"),
        )),
    }
}

/// Float drawn over `[min, max]` and rounded half-up onto a decimal grid.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatSampler {
    min: f64,
    max: f64,
    scale: f64,
    grid: RangeInclusive<f64>,
}

impl FloatSampler {
    pub(crate) fn resolve(
        constraints: &Constraints,
        default_precision: u32,
    ) -> Result<Self, ConstraintError> {
        let min = float_bound(constraints.min.as_ref(), "min")?.unwrap_or(0.0);
        let max = float_bound(constraints.max.as_ref(), "max")?.unwrap_or(1000.0);
        if min > max {
            return Err(inverted(min, max));
        }
        if !(max - min).is_finite() {
            return Err(invalid_bound(
                "max",
                "spans a range too wide to sample".to_owned(),
            ));
        }

        let precision = match constraints.precision {
            None => default_precision,
            Some(got) if got < 0 => return Err(ConstraintError::NegativePrecision { got }),
            Some(got) => u32::try_from(got)
                .ok()
                .filter(|digits| *digits <= MAX_PRECISION)
                .ok_or(ConstraintError::PrecisionTooLarge {
                    got,
                    limit: MAX_PRECISION,
                })?,
        };

        let scale = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
        let low = snap_to_step(min * scale).ceil();
        let high = snap_to_step(max * scale).floor();
        if !low.is_finite() || !high.is_finite() {
            return Err(invalid_bound(
                "max",
                format!("is too large for {precision} fractional digit(s)"),
            ));
        }
        if low > high {
            return Err(ConstraintError::EmptyPrecisionGrid {
                precision,
                min: render(min),
                max: render(max),
            });
        }
        Ok(Self {
            min,
            max,
            scale,
            grid: low..=high,
        })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource) -> f64 {
        let raw = rng.float_in(self.min..=self.max);
        let steps = (raw * self.scale + 0.5)
            .floor()
            .clamp(*self.grid.start(), *self.grid.end());
        (steps / self.scale).clamp(self.min, self.max)
    }
}

/// Rounds `scaled` to the nearest integer when it differs only by
/// representation error, so decimal bounds such as `0.29` keep their own
/// grid point.
fn snap_to_step(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= GRID_TOLERANCE * scaled.abs().max(1.0) {
        nearest
    } else {
        scaled
    }
}

fn float_bound(
    bound: Option<&Bound>,
    name: &'static str,
) -> Result<Option<f64>, ConstraintError> {
    let value = match bound {
        None => return Ok(None),
        Some(Bound::Integer(value)) => *value as f64,
        Some(Bound::Float(value)) => *value,
        Some(Bound::Text(text)) => {
            return Err(invalid_bound(name, format!("must be a number (got {text:?})")));
        }
    };
    if !value.is_finite() {
        return Err(invalid_bound(name, format!("must be finite (got {value})")));
    }
    Ok(Some(value))
}

fn inverted(min: impl ToString, max: impl ToString) -> ConstraintError {
    ConstraintError::InvertedRange {
        min: Arc::from(min.to_string()),
        max: Arc::from(max.to_string()),
    }
}

fn invalid_bound(bound: &'static str, reason: String) -> ConstraintError {
    ConstraintError::InvalidBound {
        bound,
        reason: Arc::from(reason),
    }
}

fn render(value: f64) -> Arc<str> {
    Arc::from(value.to_string())
}
