//! Conditional Period Module
//!
//! A conditional period maps an interval condition to a result duration:
//! - between two categories (positive integers)
//! - between two durations
//!
//! # String Form
//!
//! ## Category
//! ```text
//! C<lower>-<upper><result>     C1-3P3D
//! ```
//!
//! ## Duration
//! ```text
//! D<lower><upper><result>      DP1DP2DP3D
//! ```
//!
//! Durations are written as ISO-8601 specs, which always start with `P`;
//! that is what separates the three duration tokens.
//!
//! ## Unbounded upper
//! An upper bound of `0` (or `PT0S`) is accepted below the lower bound:
//! ```text
//! C1-0P1D
//! DP1DPT0SP1D
//! ```

mod parser;
mod period;
mod types;

pub(crate) use period::read_lower;
pub use parser::{PeriodParser, RawPeriod};
pub use period::ConditionalPeriod;
pub use types::{Bound, ConditionalType};
