//! Loosely-typed input values
//!
//! Constructors and lookups accept integers, duration strings and
//! intervals interchangeably. `Operand` carries whichever was given until
//! the period's type decides how it must be read.

use super::interval::{Interval, IntervalError};
use std::fmt;

/// Input value for bounds, results and queries
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Integer value (category)
    Integer(i64),
    /// String to be read as an ISO-8601 duration or a relative phrase
    Text(String),
    /// Already-built interval
    Interval(Interval),
}

impl Operand {
    /// Describe the operand kind for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Text(_) => "string",
            Operand::Interval(_) => "interval",
        }
    }

    /// Read the operand as an interval, parsing strings on the way
    ///
    /// Integers are never intervals.
    pub fn to_interval(&self) -> Option<Result<Interval, IntervalError>> {
        match self {
            Operand::Integer(_) => None,
            Operand::Text(text) => Some(Interval::make(text)),
            Operand::Interval(interval) => Some(Ok(*interval)),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(n) => write!(f, "{}", n),
            Operand::Text(text) => write!(f, "{}", text),
            Operand::Interval(interval) => write!(f, "{}", interval),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<Interval> for Operand {
    fn from(value: Interval) -> Self {
        Operand::Interval(value)
    }
}

impl From<&Interval> for Operand {
    fn from(value: &Interval) -> Self {
        Operand::Interval(*value)
    }
}
