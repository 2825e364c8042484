//! Model catalog loading and validation
//!
//! The curated tables ship inside the binary as TOML and are parsed once at
//! startup. Order inside each table is preserved.

use crate::types::{ModelRecord, Outcome, ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curated tables compiled into the library
pub const BUILTIN_CATALOG: &str = include_str!("../data/models.toml");

/// The working and failing model tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Models that satisfied the success condition, in curated order
    #[serde(default)]
    pub working: Vec<ModelRecord>,
    /// Models that failed, in curated order
    #[serde(default)]
    pub failing: Vec<ModelRecord>,
}

impl Catalog {
    /// Load the built-in catalog
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;

        log::debug!(
            "Loaded catalog: {} working, {} failing",
            catalog.working.len(),
            catalog.failing.len()
        );

        Ok(catalog)
    }

    /// Build a catalog from in-memory tables
    pub fn from_records(working: Vec<ModelRecord>, failing: Vec<ModelRecord>) -> Result<Self> {
        let catalog = Self { working, failing };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Records of one outcome, in curated order
    pub fn records(&self, outcome: Outcome) -> &[ModelRecord] {
        match outcome {
            Outcome::Working => &self.working,
            Outcome::Failing => &self.failing,
        }
    }

    /// All records tagged with their outcome, working first
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, &ModelRecord)> {
        self.working
            .iter()
            .map(|r| (Outcome::Working, r))
            .chain(self.failing.iter().map(|r| (Outcome::Failing, r)))
    }

    /// Total number of records across both tables
    pub fn len(&self) -> usize {
        self.working.len() + self.failing.len()
    }

    /// True if neither table holds a record
    pub fn is_empty(&self) -> bool {
        self.working.is_empty() && self.failing.is_empty()
    }

    /// Check that names and providers are present and that no name repeats
    fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, Outcome> = HashMap::new();

        for (outcome, record) in self.iter() {
            if record.name.trim().is_empty() {
                return Err(ReportError::InvalidCatalog(format!(
                    "{} record with provider '{}' has an empty name",
                    outcome, record.provider
                )));
            }
            if record.provider.trim().is_empty() {
                return Err(ReportError::InvalidCatalog(format!(
                    "model '{}' has an empty provider",
                    record.name
                )));
            }
            if let Some(previous) = seen.insert(record.name.as_str(), outcome) {
                return Err(ReportError::InvalidCatalog(format!(
                    "model '{}' listed as {} and again as {}",
                    record.name, previous, outcome
                )));
            }
        }

        Ok(())
    }
}
