//! Report layout configuration
//!
//! The defaults reproduce the reference report layout. Every field can be
//! overridden from a serialized config or with the builder methods.

use serde::{Deserialize, Serialize};

/// Layout and narrative settings for the text report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title printed inside the banner
    #[serde(default = "default_title")]
    pub title: String,

    /// Number of `=` characters in each banner line
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    /// Width of the upper-cased provider column (padded or truncated)
    #[serde(default = "default_provider_width")]
    pub provider_width: usize,

    /// Width the model name is padded to in the recommended list
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    /// Smallest provider group the narrative sections will mention
    #[serde(default = "default_min_group")]
    pub min_group: usize,

    /// Models strictly above this size (in whole billions) count as large
    #[serde(default = "default_large_model_threshold")]
    pub large_model_threshold_b: u32,
}

fn default_title() -> String {
    "Model Failure Analysis Report".to_string()
}

fn default_banner_width() -> usize {
    60
}

fn default_provider_width() -> usize {
    15
}

fn default_name_width() -> usize {
    20
}

fn default_min_group() -> usize {
    2
}

fn default_large_model_threshold() -> u32 {
    100
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            banner_width: default_banner_width(),
            provider_width: default_provider_width(),
            name_width: default_name_width(),
            min_group: default_min_group(),
            large_model_threshold_b: default_large_model_threshold(),
        }
    }
}

impl ReportConfig {
    /// Create a configuration with the reference layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the banner title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the banner width
    pub fn with_banner_width(mut self, width: usize) -> Self {
        self.banner_width = width;
        self
    }

    /// Builder method: set the provider column width
    pub fn with_provider_width(mut self, width: usize) -> Self {
        self.provider_width = width;
        self
    }

    /// Builder method: set the model name column width
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Builder method: set the minimum narrative group size
    pub fn with_min_group(mut self, min_group: usize) -> Self {
        self.min_group = min_group;
        self
    }

    /// Builder method: set the large model threshold in whole billions
    pub fn with_large_model_threshold(mut self, billions: u32) -> Self {
        self.large_model_threshold_b = billions;
        self
    }
}
