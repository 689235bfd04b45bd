//! Condition types: the period kind and its interval bounds

use crate::error::PeriodError;
use crate::types::Interval;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Kind of interval a period is expressed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionalType {
    /// Interval over positive integers (tag `C`)
    Category,
    /// Interval over durations (tag `D`)
    Duration,
}

impl ConditionalType {
    /// One-character canonical tag
    pub fn tag(&self) -> char {
        match self {
            ConditionalType::Category => 'C',
            ConditionalType::Duration => 'D',
        }
    }

    /// Resolve a type from its tag
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'C' => Some(ConditionalType::Category),
            'D' => Some(ConditionalType::Duration),
            _ => None,
        }
    }

    /// Human-readable name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            ConditionalType::Category => "category",
            ConditionalType::Duration => "duration",
        }
    }
}

impl fmt::Display for ConditionalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ConditionalType {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => {
                Self::from_tag(tag).ok_or_else(|| PeriodError::InvalidType(s.to_string()))
            }
            _ => Err(PeriodError::InvalidType(s.to_string())),
        }
    }
}

/// One end of a period interval
///
/// The variant carries the period type, so a bound can never be read with
/// the wrong ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Category number (`0` is only valid as the unbounded upper sentinel)
    Category(i64),
    /// Duration (zero length is only valid as the unbounded upper sentinel)
    Duration(Interval),
}

impl Bound {
    /// Type of the period this bound belongs to
    pub fn kind(&self) -> ConditionalType {
        match self {
            Bound::Category(_) => ConditionalType::Category,
            Bound::Duration(_) => ConditionalType::Duration,
        }
    }

    /// Check for the "no upper limit" sentinel (`0` or a zero-length duration)
    pub fn is_unbounded(&self) -> bool {
        match self {
            Bound::Category(n) => *n == 0,
            Bound::Duration(interval) => interval.is_zero(),
        }
    }

    pub fn as_category(&self) -> Option<i64> {
        match self {
            Bound::Category(n) => Some(*n),
            Bound::Duration(_) => None,
        }
    }

    pub fn as_interval(&self) -> Option<&Interval> {
        match self {
            Bound::Category(_) => None,
            Bound::Duration(interval) => Some(interval),
        }
    }

    /// Compare two bounds under their type's ordering
    ///
    /// Returns `None` when the bounds are of different types.
    pub fn compare(&self, other: &Bound) -> Option<Ordering> {
        match (self, other) {
            (Bound::Category(a), Bound::Category(b)) => Some(a.cmp(b)),
            (Bound::Duration(a), Bound::Duration(b)) => Some(a.compare(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Category(n) => write!(f, "{}", n),
            Bound::Duration(interval) => write!(f, "{}", interval.spec()),
        }
    }
}
