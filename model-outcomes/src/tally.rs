//! Per-provider outcome counts

use crate::catalog::Catalog;
use crate::types::Outcome;
use serde::Serialize;
use std::collections::BTreeMap;

/// Working and failing counts for one provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProviderCounts {
    /// Records in the working table
    pub working: usize,
    /// Records in the failing table
    pub failing: usize,
}

impl ProviderCounts {
    /// Create counts from explicit values
    pub fn new(working: usize, failing: usize) -> Self {
        Self { working, failing }
    }

    /// Number of records for this provider
    pub fn total(&self) -> usize {
        self.working + self.failing
    }

    /// Share of working records as a percentage in `0.0..=100.0`.
    ///
    /// A provider without records has a rate of 0.
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.working as f64 / total as f64 * 100.0
    }

    /// Success rate rounded to the nearest whole percent, ties to even
    pub fn rounded_rate(&self) -> u32 {
        self.success_rate().round_ties_even() as u32
    }

    /// `Working` only when strictly more than half of the records work
    pub fn status(&self) -> Outcome {
        if self.success_rate() > 50.0 {
            Outcome::Working
        } else {
            Outcome::Failing
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Working => self.working += 1,
            Outcome::Failing => self.failing += 1,
        }
    }
}

/// Counts for every provider, ordered by provider name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderTally {
    providers: BTreeMap<String, ProviderCounts>,
}

impl ProviderTally {
    /// Count both tables of the catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut tally = Self::default();
        for (outcome, record) in catalog.iter() {
            tally.add(&record.provider, outcome);
        }

        for (provider, counts) in &tally.providers {
            log::trace!(
                "{}: {} working, {} failing",
                provider,
                counts.working,
                counts.failing
            );
        }

        tally
    }

    /// Record one outcome for a provider
    pub fn add(&mut self, provider: &str, outcome: Outcome) {
        self.providers
            .entry(provider.to_string())
            .or_default()
            .record(outcome);
    }

    /// Counts for a provider (zero counts if it never appeared)
    pub fn get(&self, provider: &str) -> ProviderCounts {
        self.providers.get(provider).copied().unwrap_or_default()
    }

    /// Providers and their counts in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderCounts)> {
        self.providers.iter().map(|(name, counts)| (name.as_str(), counts))
    }

    /// Number of distinct providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True if no provider has been counted
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_guard() {
        let counts = ProviderCounts::default();
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.success_rate(), 0.0);
        assert_eq!(counts.rounded_rate(), 0);
        assert_eq!(counts.status(), Outcome::Failing);
    }

    #[test]
    fn test_exactly_half_is_failure() {
        let counts = ProviderCounts::new(2, 2);
        assert_eq!(counts.rounded_rate(), 50);
        assert_eq!(counts.status(), Outcome::Failing);

        let counts = ProviderCounts::new(2, 1);
        assert_eq!(counts.rounded_rate(), 67);
        assert_eq!(counts.status(), Outcome::Working);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(ProviderCounts::new(1, 7).rounded_rate(), 12);
        assert_eq!(ProviderCounts::new(3, 5).rounded_rate(), 38);
        assert_eq!(ProviderCounts::new(1, 2).rounded_rate(), 33);
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin().unwrap();
        let tally = ProviderTally::from_catalog(&catalog);

        assert_eq!(tally.get("nvidia"), ProviderCounts::new(3, 0));
        assert_eq!(tally.get("nvidia").rounded_rate(), 100);
        assert_eq!(tally.get("qwen"), ProviderCounts::new(0, 4));
        assert_eq!(tally.get("qwen").rounded_rate(), 0);
        assert_eq!(tally.get("google"), ProviderCounts::new(0, 5));
        assert_eq!(tally.get("meta"), ProviderCounts::new(0, 3));
        assert_eq!(tally.get("missing"), ProviderCounts::default());
        assert_eq!(tally.len(), 17);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut tally = ProviderTally::default();
        tally.add("zeta", Outcome::Working);
        tally.add("alpha", Outcome::Failing);
        tally.add("meta", Outcome::Failing);

        let names: Vec<&str> = tally.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "meta", "zeta"]);
    }

    #[test]
    fn test_serializes_as_map() {
        let mut tally = ProviderTally::default();
        tally.add("nvidia", Outcome::Working);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"nvidia":{"working":1,"failing":0}}"#);
    }
}
