//! Conditional collection
//!
//! An ordered list of conditional periods of a single type. `find` returns
//! the first period whose interval contains the queried value, so insertion
//! order decides which rule wins when intervals overlap.

use crate::condition::{read_lower, Bound, ConditionalPeriod, ConditionalType};
use crate::error::{PeriodError, Result};
use crate::types::Operand;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Values that can be stored in a collection: a period or its string form
pub trait IntoPeriod {
    fn into_period(self) -> Result<ConditionalPeriod>;
}

impl IntoPeriod for ConditionalPeriod {
    fn into_period(self) -> Result<ConditionalPeriod> {
        Ok(self)
    }
}

impl IntoPeriod for &ConditionalPeriod {
    fn into_period(self) -> Result<ConditionalPeriod> {
        Ok(self.clone())
    }
}

impl IntoPeriod for &str {
    fn into_period(self) -> Result<ConditionalPeriod> {
        ConditionalPeriod::parse(self)
    }
}

impl IntoPeriod for String {
    fn into_period(self) -> Result<ConditionalPeriod> {
        ConditionalPeriod::parse(&self)
    }
}

impl IntoPeriod for &String {
    fn into_period(self) -> Result<ConditionalPeriod> {
        ConditionalPeriod::parse(self)
    }
}

/// Ordered, homogeneous list of conditional periods
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionalCollection {
    items: Vec<ConditionalPeriod>,
}

impl ConditionalCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding a single period
    pub fn create(value: impl IntoPeriod) -> Result<Self> {
        let mut collection = Self::new();
        collection.push(value, None)?;
        Ok(collection)
    }

    /// Parse the comma-joined string form (`C1-3P3D,C4-6P6D`)
    ///
    /// The empty string is the form of the empty collection.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::new());
        }
        let collection = Self::from_array(input.split(','))?;
        log::debug!("Parsed collection of {} period(s) from '{}'", collection.len(), input);
        Ok(collection)
    }

    /// Build a collection from periods or their string forms
    pub fn from_array<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoPeriod,
    {
        let mut collection = Self::new();
        for item in items {
            collection.push(item, None)?;
        }
        Ok(collection)
    }

    /// Build a collection from a JSON array of period strings
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<String> = serde_json::from_str(json)?;
        Self::from_array(items)
    }

    /// Insert a period at `index` (shifting later ones) or append it
    ///
    /// An index past the end appends. Fails with `TypeMismatch` when the
    /// collection already holds periods of another type.
    pub fn push(&mut self, value: impl IntoPeriod, index: Option<usize>) -> Result<&mut Self> {
        let period = value.into_period()?;
        self.check_kind(&period)?;

        match index {
            Some(index) => {
                let index = index.min(self.items.len());
                self.items.insert(index, period);
            }
            None => self.items.push(period),
        }

        Ok(self)
    }

    /// Replace the period at `index`, or append when `index` is past the end
    ///
    /// The type check is the same as for `push`.
    pub fn set(&mut self, index: usize, value: impl IntoPeriod) -> Result<&mut Self> {
        let period = value.into_period()?;
        self.check_kind(&period)?;

        match self.items.get_mut(index) {
            Some(slot) => *slot = period,
            None => self.items.push(period),
        }

        Ok(self)
    }

    /// Remove and return the period at `index`
    pub fn remove(&mut self, index: usize) -> Option<ConditionalPeriod> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&ConditionalPeriod> {
        self.items.get(index)
    }

    pub fn exists(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&ConditionalPeriod> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionalPeriod> {
        self.items.iter()
    }

    /// Type shared by every stored period, `None` while empty
    pub fn kind(&self) -> Option<ConditionalType> {
        self.items.first().map(ConditionalPeriod::kind)
    }

    /// Find the first period whose interval contains `value`
    ///
    /// `Ok(None)` means no period matched. Values that cannot be read as the
    /// collection's type fail with `InvalidSearchValue`.
    pub fn find(&self, value: impl Into<Operand>) -> Result<Option<&ConditionalPeriod>> {
        let value = value.into();

        let key = match self.kind() {
            Some(kind) => read_lower(kind, &value).map_err(PeriodError::InvalidSearchValue)?,
            None => {
                Self::read_untyped(&value)?;
                return Ok(None);
            }
        };

        let found = self.items.iter().find(|period| period.contains(&key));
        match found {
            Some(period) => log::debug!("Value {} matched period {}", value, period),
            None => log::debug!("Value {} matched no period", value),
        }

        Ok(found)
    }

    /// Canonical string of every period, in order
    pub fn to_array(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// JSON array of canonical period strings
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_array())?)
    }

    fn check_kind(&self, period: &ConditionalPeriod) -> Result<()> {
        match self.kind() {
            Some(expected) if expected != period.kind() => Err(PeriodError::TypeMismatch {
                expected: expected.name().to_string(),
                given: period.kind().name().to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// An empty collection has no type yet: accept anything either type could read
    fn read_untyped(value: &Operand) -> Result<Bound> {
        read_lower(ConditionalType::Category, value)
            .or_else(|_| read_lower(ConditionalType::Duration, value))
            .map_err(PeriodError::InvalidSearchValue)
    }
}

impl Index<usize> for ConditionalCollection {
    type Output = ConditionalPeriod;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a ConditionalCollection {
    type Item = &'a ConditionalPeriod;
    type IntoIter = std::slice::Iter<'a, ConditionalPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ConditionalCollection {
    type Item = ConditionalPeriod;
    type IntoIter = std::vec::IntoIter<ConditionalPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for ConditionalCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_array().join(","))
    }
}

impl FromStr for ConditionalCollection {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ConditionalCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

/// Accepted serialized shapes: a list of period strings or the joined form
#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionRepr {
    List(Vec<String>),
    Joined(String),
}

impl<'de> Deserialize<'de> for ConditionalCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let collection = match CollectionRepr::deserialize(deserializer)? {
            CollectionRepr::List(items) => ConditionalCollection::from_array(items),
            CollectionRepr::Joined(joined) => ConditionalCollection::parse(&joined),
        };
        collection.map_err(de::Error::custom)
    }
}
