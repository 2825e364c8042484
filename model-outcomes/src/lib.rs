//! Model Outcomes Library
//!
//! Tabulates a curated catalog of language models against a working/failing
//! outcome and renders a per-provider text report.
//!
//! # Architecture
//!
//! The pipeline is a single linear pass:
//! - `catalog` loads the working and failing tables (embedded TOML)
//! - `tally` counts outcomes per provider and derives success rates
//! - `narrative` computes commentary from the counts
//! - `report` renders everything as fixed-format text
//!
//! The library does NOT print anything or initialise logging. That is left to
//! the application layer (model-outcomes-cli).
//!
//! # Example Usage
//!
//! ```
//! use model_outcomes::{Catalog, Report, ReportConfig};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let report = Report::build(&catalog, ReportConfig::default());
//!
//! let nvidia = report.tally().get("nvidia");
//! assert_eq!(nvidia.rounded_rate(), 100);
//!
//! let text = report.render().unwrap();
//! assert!(text.contains("[Recommended models]"));
//! ```

// Public modules
pub mod catalog;
pub mod config;
pub mod narrative;
pub mod report;
pub mod tally;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, BUILTIN_CATALOG};
pub use config::ReportConfig;
pub use narrative::{LargeModels, Narrative, ProviderTrait};
pub use report::Report;
pub use tally::{ProviderCounts, ProviderTally};
pub use types::{parse_size_billions, ModelRecord, Outcome, ReportError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: the embedded catalog loads and renders
        let catalog = Catalog::builtin().unwrap();
        let report = Report::build(&catalog, ReportConfig::default());
        assert!(!report.render().unwrap().is_empty());
    }
}
