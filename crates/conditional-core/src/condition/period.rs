//! Conditional period
//!
//! A period associates an interval (category numbers or durations) with a
//! result duration. The upper bound is included; `0` (or a zero-length
//! duration) as upper bound lifts the `upper >= lower` check at construction.

use super::parser::{PeriodParser, RawPeriod};
use super::types::{Bound, ConditionalType};
use crate::error::{PeriodError, Result};
use crate::types::{Interval, Operand};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Immutable rule: "values in `[lower, upper]` give `result`"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionalPeriod {
    lower: Bound,
    upper: Bound,
    result: Interval,
}

impl ConditionalPeriod {
    /// Create a period from explicit fields
    ///
    /// Checks run in a fixed order (lower, upper, result); the first failing
    /// check is reported.
    ///
    /// - `lower`: integer >= 1 for categories; interval or duration string for durations
    /// - `upper`: integer >= 0 for categories; interval or duration string for durations
    /// - `result`: interval or duration string
    pub fn new(
        kind: ConditionalType,
        lower: impl Into<Operand>,
        upper: impl Into<Operand>,
        result: impl Into<Operand>,
    ) -> Result<Self> {
        let lower = read_lower(kind, &lower.into()).map_err(PeriodError::InvalidLowerBound)?;
        let upper = read_upper(kind, &upper.into()).map_err(PeriodError::InvalidUpperBound)?;

        if !upper.is_unbounded() && upper.compare(&lower) == Some(Ordering::Less) {
            return Err(PeriodError::InvalidBoundOrder {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        let result = read_interval(&result.into()).map_err(PeriodError::InvalidResult)?;

        Ok(Self {
            lower,
            upper,
            result,
        })
    }

    /// Create a period from scanned tokens, validating the type tag first
    pub fn from_raw(raw: RawPeriod) -> Result<Self> {
        let kind: ConditionalType = raw.tag.parse()?;
        Self::new(kind, raw.lower, raw.upper, raw.result)
    }

    /// Parse the canonical string form (`C1-3P3D`, `DP1DP2DP3D`)
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_raw(PeriodParser::parse(input)?)
    }

    /// Type of the period, derived from its bounds
    pub fn kind(&self) -> ConditionalType {
        self.lower.kind()
    }

    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    pub fn result(&self) -> &Interval {
        &self.result
    }

    /// Check whether `lower <= value <= upper`
    ///
    /// The value is read like the lower bound. The stored upper bound is
    /// compared literally: a `0` / zero-length upper matches nothing here,
    /// the sentinel only applies to the construction check.
    pub fn matches(&self, value: impl Into<Operand>) -> Result<bool> {
        let value = read_lower(self.kind(), &value.into()).map_err(PeriodError::InvalidMatchValue)?;
        Ok(self.contains(&value))
    }

    /// Interval test on an already-normalized bound
    ///
    /// A bound of the other type is never contained.
    pub fn contains(&self, value: &Bound) -> bool {
        matches!(
            self.lower.compare(value),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.upper.compare(value),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

/// Lower bounds (and match values): positive integer or interval
pub(crate) fn read_lower(kind: ConditionalType, value: &Operand) -> std::result::Result<Bound, String> {
    match kind {
        ConditionalType::Category => match value {
            Operand::Integer(n) if *n > 0 => Ok(Bound::Category(*n)),
            other => Err(format!(
                "must be a valid category (non-null, positive integer). Input was: ({} {})",
                other.kind_name(),
                other
            )),
        },
        ConditionalType::Duration => read_interval(value).map(Bound::Duration),
    }
}

/// Upper bounds: non-negative integer or interval
fn read_upper(kind: ConditionalType, value: &Operand) -> std::result::Result<Bound, String> {
    match kind {
        ConditionalType::Category => match value {
            Operand::Integer(n) if *n >= 0 => Ok(Bound::Category(*n)),
            other => Err(format!(
                "must be a valid category (>= 0). Input was: ({} {})",
                other.kind_name(),
                other
            )),
        },
        ConditionalType::Duration => read_interval(value).map(Bound::Duration),
    }
}

fn read_interval(value: &Operand) -> std::result::Result<Interval, String> {
    match value.to_interval() {
        Some(Ok(interval)) => Ok(interval),
        Some(Err(err)) => Err(format!(
            "must be a valid duration, or a string used to construct one: {}",
            err
        )),
        None => Err(format!(
            "must be a valid duration, or a string used to construct one. Input was: ({} {})",
            value.kind_name(),
            value
        )),
    }
}

impl fmt::Display for ConditionalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind().tag(), self.lower)?;
        if self.kind() == ConditionalType::Category {
            write!(f, "-")?;
        }
        write!(f, "{}{}", self.upper, self.result.spec())
    }
}

impl FromStr for ConditionalPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ConditionalPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConditionalPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ConditionalPeriod::parse(&raw).map_err(de::Error::custom)
    }
}
