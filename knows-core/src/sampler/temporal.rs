//! Calendar samplers rendering ISO-8601 text.
//!
//! `Date` bounds are plain `YYYY-MM-DD` dates. `DateTime` bounds additionally
//! accept full date-times, `now`, and offsets such as `-30y` or `+2w3d`
//! measured from the generator's reference time, so the same seed always
//! yields the same instants.

use std::sync::Arc;

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::{
    error::ConstraintError,
    random::RandomSource,
    schema::{Bound, Constraints},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

const DEFAULT_MIN_DATE: (i32, u32, u32) = (1970, 1, 1);
const DEFAULT_MAX_DATE: (i32, u32, u32) = (2025, 12, 31);
const DEFAULT_DATE_TIME_MIN: &str = "-30y";

/// Uniform calendar day.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DateSampler {
    start: NaiveDate,
    span_days: i64,
}

impl DateSampler {
    pub(crate) fn resolve(constraints: &Constraints) -> Result<Self, ConstraintError> {
        let start = match constraints.min.as_ref() {
            Some(bound) => parse_date(bound, "min")?,
            None => default_date(DEFAULT_MIN_DATE),
        };
        let end = match constraints.max.as_ref() {
            Some(bound) => parse_date(bound, "max")?,
            None => default_date(DEFAULT_MAX_DATE),
        };
        if start > end {
            return Err(inverted(start, end));
        }
        Ok(Self {
            start,
            span_days: (end - start).num_days(),
        })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource) -> String {
        let offset = TimeDelta::days(rng.int_in(0..=self.span_days));
        self.start
            .checked_add_signed(offset)
            .unwrap_or(self.start)
            .format(DATE_FORMAT)
            .to_string()
    }
}

fn default_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn parse_date(bound: &Bound, name: &'static str) -> Result<NaiveDate, ConstraintError> {
    let Bound::Text(text) = bound else {
        return Err(invalid_bound(name, format!("must be a YYYY-MM-DD date (got {bound})")));
    };
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|err| invalid_bound(name, format!("is not a YYYY-MM-DD date: {err}")))
}

/// Uniform whole second between two instants.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DateTimeSampler {
    start: NaiveDateTime,
    span_seconds: i64,
}

impl DateTimeSampler {
    pub(crate) fn resolve(
        constraints: &Constraints,
        reference: NaiveDateTime,
    ) -> Result<Self, ConstraintError> {
        let start = match constraints.min.as_ref() {
            Some(bound) => parse_instant(bound, "min", reference)?,
            None => parse_instant_text(DEFAULT_DATE_TIME_MIN, "min", reference)?,
        };
        let end = match constraints.max.as_ref() {
            Some(bound) => parse_instant(bound, "max", reference)?,
            None => reference,
        };
        if start > end {
            return Err(inverted(start, end));
        }
        let first = ceil_to_second(start)
            .filter(|first| *first <= end)
            .ok_or_else(|| {
                invalid_bound("min", format!("leaves no whole second before {end}"))
            })?;
        Ok(Self {
            start: first,
            span_seconds: (end - first).num_seconds(),
        })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource) -> String {
        let offset = TimeDelta::seconds(rng.int_in(0..=self.span_seconds));
        self.start
            .checked_add_signed(offset)
            .unwrap_or(self.start)
            .format(DATE_TIME_FORMAT)
            .to_string()
    }
}

/// First whole second at or after `instant`.
fn ceil_to_second(instant: NaiveDateTime) -> Option<NaiveDateTime> {
    if instant.nanosecond() == 0 {
        return Some(instant);
    }
    instant
        .with_nanosecond(0)?
        .checked_add_signed(TimeDelta::try_seconds(1)?)
}

fn parse_instant(
    bound: &Bound,
    name: &'static str,
    reference: NaiveDateTime,
) -> Result<NaiveDateTime, ConstraintError> {
    match bound {
        Bound::Text(text) => parse_instant_text(text, name, reference),
        other => Err(invalid_bound(
            name,
            format!("must be a date-time, `now` or a relative offset (got {other})"),
        )),
    }
}

fn parse_instant_text(
    text: &str,
    name: &'static str,
    reference: NaiveDateTime,
) -> Result<NaiveDateTime, ConstraintError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(reference);
    }
    if let Some(sign) = trimmed.chars().next().filter(|c| matches!(c, '+' | '-')) {
        return apply_offset(reference, sign == '-', trimmed.get(1..).unwrap_or_default())
            .ok_or_else(|| invalid_bound(name, format!("is not a valid relative offset: {text:?}")));
    }
    if let Ok(instant) = trimmed.parse::<NaiveDateTime>() {
        return Ok(instant);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(invalid_bound(
        name,
        format!("must be a date-time, `now` or a relative offset (got {text:?})"),
    ))
}

/// Applies a sequence of `<count><unit>` groups such as `1y6M` or `2w3d`.
///
/// Units: `y` years, `M` months, `w` weeks, `d` days, `h` hours, `m`
/// minutes, `s` seconds. Years and months follow the calendar.
fn apply_offset(reference: NaiveDateTime, backwards: bool, groups: &str) -> Option<NaiveDateTime> {
    if groups.is_empty() {
        return None;
    }
    let mut instant = reference;
    let mut digits = String::new();
    for ch in groups.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let count: u32 = digits.parse().ok()?;
        digits.clear();
        instant = match ch {
            'y' | 'M' => {
                let months = Months::new(if ch == 'y' { count.checked_mul(12)? } else { count });
                if backwards {
                    instant.checked_sub_months(months)?
                } else {
                    instant.checked_add_months(months)?
                }
            }
            _ => {
                let unit = match ch {
                    'w' => TimeDelta::try_weeks(1)?,
                    'd' => TimeDelta::try_days(1)?,
                    'h' => TimeDelta::try_hours(1)?,
                    'm' => TimeDelta::try_minutes(1)?,
                    's' => TimeDelta::try_seconds(1)?,
                    _ => return None,
                };
                let delta = unit.checked_mul(i32::try_from(count).ok()?)?;
                if backwards {
                    instant.checked_sub_signed(delta)?
                } else {
                    instant.checked_add_signed(delta)?
                }
            }
        };
    }
    digits.is_empty().then_some(instant)
}

/// Uniform second of the day.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TimeSampler {
    start: u32,
    end: u32,
}

impl TimeSampler {
    pub(crate) fn resolve(constraints: &Constraints) -> Result<Self, ConstraintError> {
        let start = match constraints.min.as_ref() {
            Some(bound) => parse_time(bound, "min")?,
            None => NaiveTime::MIN,
        };
        let end = match constraints.max.as_ref() {
            Some(bound) => parse_time(bound, "max")?,
            None => NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
        };
        if start > end {
            return Err(inverted(start, end));
        }
        Ok(Self {
            start: seconds_of_day(start),
            end: seconds_of_day(end),
        })
    }

    pub(crate) fn sample(&self, rng: &mut RandomSource) -> String {
        let second = rng.int_in(i64::from(self.start)..=i64::from(self.end));
        u32::try_from(second)
            .ok()
            .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
            .unwrap_or(NaiveTime::MIN)
            .format(TIME_FORMAT)
            .to_string()
    }
}

fn seconds_of_day(time: NaiveTime) -> u32 {
    time.signed_duration_since(NaiveTime::MIN)
        .num_seconds()
        .try_into()
        .unwrap_or(0)
}

fn parse_time(bound: &Bound, name: &'static str) -> Result<NaiveTime, ConstraintError> {
    let Bound::Text(text) = bound else {
        return Err(invalid_bound(name, format!("must be an HH:MM:SS time (got {bound})")));
    };
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .map_err(|err| invalid_bound(name, format!("is not an HH:MM:SS time: {err}")))
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
