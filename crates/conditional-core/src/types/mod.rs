//! Value types used by conditional periods
//!
//! - `Interval`: calendar duration (bounds of duration periods, every result)
//! - `Operand`: loosely-typed input accepted by constructors and lookups

pub mod interval;
pub mod operand;

pub use interval::{Interval, IntervalError};
pub use operand::Operand;
