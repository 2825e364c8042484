//! Commentary sections derived from the tally
//!
//! Each section lists the providers whose models all landed on one side,
//! plus a line about large models. Everything here is computed from the
//! catalog, so the prose cannot disagree with the counts above it.

use crate::catalog::Catalog;
use crate::config::ReportConfig;
use crate::tally::ProviderTally;
use crate::types::Outcome;
use serde::Serialize;

/// A provider whose models all share one outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderTrait {
    /// Provider name as written in the catalog
    pub provider: String,
    /// Leading name token shared by all of the provider's models
    pub family: Option<String>,
    /// Number of models the provider has
    pub count: usize,
}

/// Models above the large model threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeModels {
    /// Size threshold in whole billions
    pub threshold_b: u32,
    /// Names in catalog order, working first
    pub names: Vec<String>,
    /// How many of the named models are in the failing table
    pub failing: usize,
}

impl LargeModels {
    /// Number of large models
    pub fn total(&self) -> usize {
        self.names.len()
    }

    /// Large models in the working table
    pub fn working(&self) -> usize {
        self.total() - self.failing
    }

    /// Section the line belongs to: `Failing` only with a strict failing majority
    pub fn majority(&self) -> Outcome {
        if self.failing * 2 > self.total() {
            Outcome::Failing
        } else {
            Outcome::Working
        }
    }
}

/// Computed failure and success commentary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    /// Providers whose models all failed, biggest group first
    pub failing: Vec<ProviderTrait>,
    /// Providers whose models all work, biggest group first
    pub working: Vec<ProviderTrait>,
    /// Models above the size threshold, if any
    pub large_models: Option<LargeModels>,
}

impl Narrative {
    /// Derive the commentary from the catalog and its tally
    pub fn build(catalog: &Catalog, tally: &ProviderTally, config: &ReportConfig) -> Self {
        Self {
            failing: uniform_providers(catalog, tally, Outcome::Failing, config.min_group),
            working: uniform_providers(catalog, tally, Outcome::Working, config.min_group),
            large_models: large_models(catalog, config.large_model_threshold_b),
        }
    }

    /// Traits listed under one outcome's section
    pub fn traits(&self, outcome: Outcome) -> &[ProviderTrait] {
        match outcome {
            Outcome::Working => &self.working,
            Outcome::Failing => &self.failing,
        }
    }

    /// Large model line if it belongs under the given outcome's section
    pub fn large_models_for(&self, outcome: Outcome) -> Option<&LargeModels> {
        self.large_models
            .as_ref()
            .filter(|large| large.majority() == outcome)
    }
}

fn uniform_providers(
    catalog: &Catalog,
    tally: &ProviderTally,
    outcome: Outcome,
    min_group: usize,
) -> Vec<ProviderTrait> {
    let mut traits: Vec<ProviderTrait> = tally
        .iter()
        .filter_map(|(provider, counts)| {
            let count = match outcome {
                Outcome::Working => counts.working,
                Outcome::Failing => counts.failing,
            };
            if count == 0 || count != counts.total() || count < min_group {
                return None;
            }
            Some(ProviderTrait {
                provider: provider.to_string(),
                family: shared_family(catalog, provider, outcome),
                count,
            })
        })
        .collect();

    // Biggest groups first; tally order already breaks ties by name
    traits.sort_by(|a, b| b.count.cmp(&a.count));
    traits
}

/// First whitespace token common to every model name of the provider
fn shared_family(catalog: &Catalog, provider: &str, outcome: Outcome) -> Option<String> {
    let mut tokens = catalog
        .records(outcome)
        .iter()
        .filter(|r| r.provider == provider)
        .map(|r| r.name.split_whitespace().next());

    let first = tokens.next()??;
    if tokens.all(|token| token == Some(first)) {
        Some(first.to_string())
    } else {
        None
    }
}

fn large_models(catalog: &Catalog, threshold_b: u32) -> Option<LargeModels> {
    let mut names = Vec::new();
    let mut failing = 0;

    for (outcome, record) in catalog.iter() {
        if record.size_billions().is_some_and(|size| size > f64::from(threshold_b)) {
            names.push(record.name.clone());
            if outcome == Outcome::Failing {
                failing += 1;
            }
        }
    }

    if names.is_empty() {
        None
    } else {
        Some(LargeModels {
            threshold_b,
            names,
            failing,
        })
    }
}
