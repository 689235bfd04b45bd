//! Conditional Core - interval rules mapping a value to a result duration
//!
//! This crate provides:
//! - `ConditionalPeriod`: an interval over categories or durations with a
//!   result duration, and its compact string form (`C1-3P3D`, `DP1DP2DP3D`)
//! - `ConditionalCollection`: an ordered, single-type list of periods with
//!   first-match lookup
//! - `PeriodRegistry`: named collections loaded from YAML or JSON
//! - `Interval`: the calendar duration used for bounds and results
//! - Error types

pub mod collection;
pub mod condition;
pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use collection::{ConditionalCollection, IntoPeriod};
pub use condition::{Bound, ConditionalPeriod, ConditionalType, PeriodParser, RawPeriod};
pub use error::{PeriodError, Result};
pub use registry::PeriodRegistry;
pub use types::{Interval, IntervalError, Operand};
