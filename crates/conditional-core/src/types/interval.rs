//! Calendar durations
//!
//! `Interval` is the duration value used for duration bounds and for every
//! period result. It is built from either an ISO-8601 duration string
//! (`P1Y2M3DT4H5M6S`, read with `ixdtf`) or a relative phrase (`1 day`,
//! `2 weeks and 3 days`, read with `humantime`), renders back to a canonical
//! ISO-8601 spec, and is ordered by its calendar length measured from a fixed
//! reference instant.

use chrono::{Months, NaiveDateTime, TimeDelta};
use ixdtf::{encoding::Utf8, parsers::IsoDurationParser, records::TimeDurationRecord};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Average Gregorian year and month, used once a duration leaves chrono's range
const AVERAGE_YEAR_SECS: i128 = 31_556_952;
const AVERAGE_MONTH_SECS: i128 = 2_629_746;

/// Duration parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("empty duration string")]
    Empty,

    #[error("invalid ISO-8601 duration '{0}'")]
    InvalidIso(String),

    #[error("invalid relative duration '{0}'")]
    InvalidRelative(String),

    #[error("duration component overflows in '{0}'")]
    Overflow(String),
}

/// A non-negative calendar duration
///
/// Weeks are folded into days. Equality is structural: `P1M` and `P30D` are
/// different intervals even where they compare equal in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    years: u32,
    months: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

/// Calendar unit of one `<number> <unit>` item of a relative phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Unit whose single length, as humantime reads it, is `secs`
    fn from_secs(secs: u64) -> Option<Self> {
        let unit = match secs {
            31_557_600 => Unit::Year,
            2_630_016 => Unit::Month,
            604_800 => Unit::Week,
            86_400 => Unit::Day,
            3_600 => Unit::Hour,
            60 => Unit::Minute,
            1 => Unit::Second,
            _ => return None,
        };
        Some(unit)
    }
}

impl Interval {
    /// The zero-length interval, used as the "unbounded" upper sentinel
    pub const ZERO: Interval = Interval {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create an interval from its components
    pub fn new(years: u32, months: u32, days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Create an interval of whole days
    pub fn from_days(days: u32) -> Self {
        Self {
            days,
            ..Self::ZERO
        }
    }

    /// Build an interval from an ISO-8601 duration or a relative phrase
    ///
    /// Strings starting with `P` are read as ISO-8601, anything else as a
    /// sequence of `<number> <unit>` items.
    pub fn make(input: &str) -> Result<Self, IntervalError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IntervalError::Empty);
        }

        if trimmed.starts_with('P') {
            Self::parse_iso(trimmed)
        } else {
            Self::parse_relative(trimmed)
        }
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Check whether every component is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Canonical ISO-8601 representation (`P1Y2M3DT4H5M6S`, `PT0S` when empty)
    pub fn spec(&self) -> String {
        let mut spec = String::from("P");

        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value > 0 {
                spec.push_str(&format!("{}{}", value, designator));
            }
        }

        let time = [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')];
        if time.iter().any(|(value, _)| *value > 0) {
            spec.push('T');
            for (value, designator) in time {
                if value > 0 {
                    spec.push_str(&format!("{}{}", value, designator));
                }
            }
        }

        if spec.len() == 1 {
            spec.push_str("T0S");
        }

        spec
    }

    /// Order two intervals by calendar length
    ///
    /// Both intervals are added to 1970-01-01T00:00:00 and the resulting
    /// instants are compared, so months and years keep their calendar length.
    /// An interval that lands past the last representable instant is longer
    /// than any interval that does not; two such intervals are ordered by
    /// their length in average Gregorian years and months.
    pub fn compare(&self, other: &Interval) -> Ordering {
        match (self.anchored(), other.anchored()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.average_secs().cmp(&other.average_secs()),
        }
    }

    fn anchored(&self) -> Option<NaiveDateTime> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;

        NaiveDateTime::default()
            .checked_add_months(Months::new(months))?
            .checked_add_signed(TimeDelta::try_seconds(self.clock_secs())?)
    }

    fn clock_secs(&self) -> i64 {
        i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
    }

    fn average_secs(&self) -> i128 {
        i128::from(self.years) * AVERAGE_YEAR_SECS
            + i128::from(self.months) * AVERAGE_MONTH_SECS
            + i128::from(self.clock_secs())
    }

    fn plus(mut self, unit: Unit, amount: u32) -> Option<Self> {
        match unit {
            Unit::Year => self.years = self.years.checked_add(amount)?,
            Unit::Month => self.months = self.months.checked_add(amount)?,
            Unit::Week => self.days = self.days.checked_add(amount.checked_mul(7)?)?,
            Unit::Day => self.days = self.days.checked_add(amount)?,
            Unit::Hour => self.hours = self.hours.checked_add(amount)?,
            Unit::Minute => self.minutes = self.minutes.checked_add(amount)?,
            Unit::Second => self.seconds = self.seconds.checked_add(amount)?,
        }
        Some(self)
    }

    fn parse_iso(input: &str) -> Result<Self, IntervalError> {
        let invalid = || IntervalError::InvalidIso(input.to_string());
        let overflow = || IntervalError::Overflow(input.to_string());

        let record = IsoDurationParser::<Utf8>::from_utf8(input.as_bytes())
            .parse()
            .map_err(|e| {
                log::trace!("ixdtf rejected '{}': {}", input, e);
                invalid()
            })?;

        // Negative and fractional durations have no period meaning
        if (record.sign as i8) < 0 {
            return Err(invalid());
        }

        let (hours, minutes, seconds) = match record.time {
            Some(TimeDurationRecord::Hours { hours, fraction: None }) => (hours, 0, 0),
            Some(TimeDurationRecord::Minutes {
                hours,
                minutes,
                fraction: None,
            }) => (hours, minutes, 0),
            Some(TimeDurationRecord::Seconds {
                hours,
                minutes,
                seconds,
                fraction: None,
            }) => (hours, minutes, seconds),
            Some(_) => return Err(invalid()),
            None => (0, 0, 0),
        };

        let mut interval = Self::ZERO;
        if let Some(date) = record.date {
            interval.years = u32::try_from(date.years).map_err(|_| overflow())?;
            interval.months = u32::try_from(date.months).map_err(|_| overflow())?;
            let weeks = u32::try_from(date.weeks).map_err(|_| overflow())?;
            let days = u32::try_from(date.days).map_err(|_| overflow())?;
            interval = interval
                .plus(Unit::Week, weeks)
                .and_then(|interval| interval.plus(Unit::Day, days))
                .ok_or_else(overflow)?;
        }
        interval.hours = u32::try_from(hours).map_err(|_| overflow())?;
        interval.minutes = u32::try_from(minutes).map_err(|_| overflow())?;
        interval.seconds = u32::try_from(seconds).map_err(|_| overflow())?;

        Ok(interval)
    }

    /// Read a relative phrase item by item
    ///
    /// Each `<number> <unit>` item goes to humantime alone and the unit is
    /// recovered from the per-unit length, so `1 month` stays one calendar
    /// month.
    fn parse_relative(input: &str) -> Result<Self, IntervalError> {
        let invalid = || IntervalError::InvalidRelative(input.to_string());

        let lowered = input.to_ascii_lowercase();
        let mut items: Vec<String> = Vec::new();
        for word in lowered
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty() && *word != "and")
        {
            match items.last_mut() {
                Some(item) if !word.starts_with(|c: char| c.is_ascii_digit()) => item.push_str(word),
                _ => items.push(word.to_string()),
            }
        }
        if items.is_empty() {
            return Err(invalid());
        }

        let mut interval = Self::ZERO;
        for item in &items {
            let digits = item
                .find(|c: char| !c.is_ascii_digit())
                .map_or(item.as_str(), |split| &item[..split]);
            if digits.is_empty() {
                return Err(invalid());
            }
            let amount: u32 = digits
                .parse()
                .map_err(|_| IntervalError::Overflow(input.to_string()))?;

            let length = humantime::parse_duration(item).map_err(|e| {
                log::trace!("humantime rejected '{}': {}", item, e);
                invalid()
            })?;
            if amount == 0 {
                continue;
            }
            if length.subsec_nanos() != 0 || length.as_secs() % u64::from(amount) != 0 {
                return Err(invalid());
            }
            let unit = Unit::from_secs(length.as_secs() / u64::from(amount)).ok_or_else(invalid)?;

            interval = interval
                .plus(unit, amount)
                .ok_or_else(|| IntervalError::Overflow(input.to_string()))?;
        }

        Ok(interval)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec())
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::make(s)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.spec())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Interval::make(&raw).map_err(de::Error::custom)
    }
}
