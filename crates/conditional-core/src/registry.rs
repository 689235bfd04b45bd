//! Period Registry
//!
//! A registry names a set of conditional collections so they can be kept in
//! a single configuration document and looked up by table name.
//!
//! ```yaml
//! version: "0.1"
//! tables:
//!   delivery: "C1-3P3D,C4-6P6D"
//!   retention:
//!     - DP1DP1MP1Y
//!     - DP1M1DPT0SP2Y
//! ```

use crate::collection::ConditionalCollection;
use crate::condition::ConditionalPeriod;
use crate::error::{PeriodError, Result};
use crate::types::Operand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named conditional collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRegistry {
    /// Version of the registry format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Collections by table name
    #[serde(default)]
    pub tables: BTreeMap<String, ConditionalCollection>,
}

impl PeriodRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            version: Some("0.1".to_string()),
            tables: BTreeMap::new(),
        }
    }

    /// Set the registry version
    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }

    /// Add or replace a table
    pub fn with_table(mut self, name: impl Into<String>, collection: ConditionalCollection) -> Self {
        self.tables.insert(name.into(), collection);
        self
    }

    /// Load a registry from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let registry: Self = serde_yaml::from_str(yaml)?;
        log::debug!("Loaded registry with {} table(s) from YAML", registry.tables.len());
        Ok(registry)
    }

    /// Load a registry from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        log::debug!("Loaded registry with {} table(s) from JSON", registry.tables.len());
        Ok(registry)
    }

    /// Render the registry as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn table(&self, name: &str) -> Option<&ConditionalCollection> {
        self.tables.get(name)
    }

    /// Find the first matching period of a named table
    pub fn find(&self, table: &str, value: impl Into<Operand>) -> Result<Option<&ConditionalPeriod>> {
        self.table(table)
            .ok_or_else(|| PeriodError::UnknownTable(table.to_string()))?
            .find(value)
    }
}

impl Default for PeriodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
version: "0.1"
tables:
  delivery: "C1-3P3D,C4-6P6D"
  retention:
    - DP1DP1MP1Y
    - DP1M1DPT0SP2Y
"#;

    #[test]
    fn test_registry_from_yaml() {
        let registry = PeriodRegistry::from_yaml(YAML).unwrap();
        assert_eq!(registry.version.as_deref(), Some("0.1"));
        assert_eq!(registry.tables.len(), 2);
        assert_eq!(registry.table("delivery").unwrap().len(), 2);
        assert_eq!(registry.table("retention").unwrap().len(), 2);
    }

    #[test]
    fn test_registry_find() {
        let registry = PeriodRegistry::from_yaml(YAML).unwrap();

        let found = registry.find("delivery", 5).unwrap().unwrap();
        assert_eq!(found.to_string(), "C4-6P6D");
        assert!(registry.find("delivery", 7).unwrap().is_none());

        let found = registry.find("retention", "2 weeks").unwrap().unwrap();
        assert_eq!(found.result().spec(), "P1Y");
    }

    #[test]
    fn test_registry_unknown_table() {
        let registry = PeriodRegistry::new();
        match registry.find("missing", 1) {
            Err(PeriodError::UnknownTable(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected UnknownTable, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_invalid_period() {
        let yaml = r#"
tables:
  broken: "C3-1P1D"
"#;
        let err = PeriodRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, PeriodError::Yaml(_)));
    }

    #[test]
    fn test_registry_yaml_round_trip() {
        let registry = PeriodRegistry::new().with_table(
            "delivery",
            ConditionalCollection::parse("C1-3P3D,C4-6P6D").unwrap(),
        );
        let yaml = registry.to_yaml().unwrap();
        let back = PeriodRegistry::from_yaml(&yaml).unwrap();
        assert_eq!(back, registry);
    }

    #[test]
    fn test_registry_from_json() {
        let json = r#"{"tables": {"delivery": ["C1-3P3D"]}}"#;
        let registry = PeriodRegistry::from_json(json).unwrap();
        assert_eq!(registry.version, None);
        assert!(registry.find("delivery", 2).unwrap().is_some());
    }
}
