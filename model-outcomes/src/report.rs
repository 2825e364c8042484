//! Text report generation
//!
//! Renders the banner, the per-provider table, the computed commentary and
//! the recommended model list. Output is deterministic for a given catalog
//! and configuration.

use crate::catalog::Catalog;
use crate::config::ReportConfig;
use crate::narrative::{Narrative, ProviderTrait};
use crate::tally::ProviderTally;
use crate::types::{ModelRecord, Outcome, Result};
use std::fmt::{self, Write};

/// A fully computed report, ready to render
#[derive(Debug, Clone)]
pub struct Report {
    config: ReportConfig,
    tally: ProviderTally,
    narrative: Narrative,
    recommended: Vec<ModelRecord>,
}

impl Report {
    /// Compute the tally and commentary for a catalog
    pub fn build(catalog: &Catalog, config: ReportConfig) -> Self {
        let tally = ProviderTally::from_catalog(catalog);
        let narrative = Narrative::build(catalog, &tally, &config);

        Self {
            config,
            tally,
            narrative,
            recommended: catalog.working.clone(),
        }
    }

    /// Per-provider counts behind the table
    pub fn tally(&self) -> &ProviderTally {
        &self.tally
    }

    /// Computed commentary sections
    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    /// Working models in curated order
    pub fn recommended(&self) -> &[ModelRecord] {
        &self.recommended
    }

    /// Render the report into a string
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Render the report into any formatter sink
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_banner(out)?;
        self.write_providers(out)?;
        self.write_traits(out, Outcome::Failing)?;
        self.write_traits(out, Outcome::Working)?;
        self.write_recommended(out)
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> fmt::Result {
        let rule = "=".repeat(self.config.banner_width);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", self.config.title)?;
        writeln!(out, "{}", rule)
    }

    fn write_providers<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "[By provider]")?;

        let width = self.config.provider_width;
        for (provider, counts) in self.tally.iter() {
            writeln!(
                out,
                "{} {:<width$.width$}: {}/{} working ({}%)",
                counts.status().glyph(),
                provider.to_uppercase(),
                counts.working,
                counts.total(),
                counts.rounded_rate(),
                width = width,
            )?;
        }
        Ok(())
    }

    fn write_traits<W: Write>(&self, out: &mut W, outcome: Outcome) -> fmt::Result {
        let (heading, verb, rate_label) = match outcome {
            Outcome::Failing => ("[Common traits of failing models]", "failed", "failure rate"),
            Outcome::Working => ("[Common traits of working models]", "working", "success rate"),
        };

        writeln!(out)?;
        writeln!(out, "{}", heading)?;

        let traits = self.narrative.traits(outcome);
        let large = self.narrative.large_models_for(outcome);

        if traits.is_empty() && large.is_none() {
            return writeln!(out, "  (none)");
        }

        for provider_trait in traits {
            write_trait(out, provider_trait, verb, rate_label)?;
        }

        if let Some(large) = large {
            let matching = match outcome {
                Outcome::Failing => large.failing,
                Outcome::Working => large.working(),
            };
            writeln!(
                out,
                "Large models (>{}B): {} - {}/{} {}",
                large.threshold_b,
                large.names.join(", "),
                matching,
                large.total(),
                verb,
            )?;
        }
        Ok(())
    }

    fn write_recommended<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "[Recommended models]")?;

        let width = self.config.name_width;
        for record in &self.recommended {
            writeln!(
                out,
                "  {} {:<width$} ({})",
                Outcome::Working.glyph(),
                record.name,
                record.provider,
                width = width,
            )?;
        }
        Ok(())
    }
}

fn write_trait<W: Write>(
    out: &mut W,
    provider_trait: &ProviderTrait,
    verb: &str,
    rate_label: &str,
) -> fmt::Result {
    write!(out, "{}", provider_trait.provider.to_uppercase())?;
    if let Some(family) = &provider_trait.family {
        write!(out, " ({})", family)?;
    }
    writeln!(
        out,
        " models: {n}/{n} {} - 100% {}",
        verb,
        rate_label,
        n = provider_trait.count,
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
