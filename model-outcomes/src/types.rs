//! Core types for the model outcomes library
//!
//! This module defines the records the catalog is made of, the outcome a record
//! is classified under, and the error type shared by every stage of the report
//! pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// A single curated model entry
///
/// Records are loaded once from the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Display name (e.g., "Nemotron Nano")
    pub name: String,
    /// Vendor that produced the model (e.g., "nvidia")
    pub provider: String,
    /// Free-form size token ("1.2B", "unknown", "auto", ...)
    pub size: String,
    /// Usage category the model was evaluated for
    pub category: String,
}

impl ModelRecord {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        size: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            size: size.into(),
            category: category.into(),
        }
    }

    /// Parameter count in billions, if the size token is numeric
    pub fn size_billions(&self) -> Option<f64> {
        parse_size_billions(&self.size)
    }
}

/// Which curated set a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Model satisfied the success condition
    Working,
    /// Model did not satisfy the success condition
    Failing,
}

impl Outcome {
    /// Status glyph printed in front of report lines
    pub fn glyph(self) -> &'static str {
        match self {
            Outcome::Working => "✅",
            Outcome::Failing => "❌",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Working => write!(f, "working"),
            Outcome::Failing => write!(f, "failing"),
        }
    }
}

/// Errors that can occur while loading the catalog or rendering the report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to parse model catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Invalid model catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to format report: {0}")]
    Format(#[from] fmt::Error),
}

/// Parse a size token such as `"405B"` or `"350M"` into billions of parameters.
///
/// Non-numeric tokens (`"unknown"`, `"auto"`, `"small"`) yield `None`.
pub fn parse_size_billions(token: &str) -> Option<f64> {
    let token = token.trim();
    let (number, scale) = match token.char_indices().last()? {
        (idx, 'B' | 'b') => (&token[..idx], 1.0),
        (idx, 'M' | 'm') => (&token[..idx], 0.001),
        _ => return None,
    };

    let value: f64 = number.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value * scale)
    } else {
        None
    }
}
