// End-to-end checks on the rendered report for the built-in catalog
use model_outcomes::{Catalog, ModelRecord, Outcome, Report, ReportConfig};

fn builtin() -> (Catalog, Report) {
    let catalog = Catalog::builtin().unwrap();
    let report = Report::build(&catalog, ReportConfig::default());
    (catalog, report)
}

/// Lines between a section heading and the next blank line
fn section<'a>(text: &'a str, heading: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn counts_are_consistent() {
    let (_, report) = builtin();

    for (provider, counts) in report.tally().iter() {
        assert_eq!(counts.working + counts.failing, counts.total(), "{}", provider);
        assert!(counts.total() > 0);
        let rate = counts.success_rate();
        assert!((0.0..=100.0).contains(&rate), "{} rate {}", provider, rate);
        assert!(counts.rounded_rate() <= 100);
    }
}

#[test]
fn provider_section_is_sorted_and_complete() {
    let (catalog, report) = builtin();
    let text = report.render().unwrap();
    let lines = section(&text, "[By provider]");

    let mut expected: Vec<String> = catalog.iter().map(|(_, r)| r.provider.clone()).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(lines.len(), expected.len());

    for (line, provider) in lines.iter().zip(&expected) {
        let counts = report.tally().get(provider);
        let glyph = if counts.success_rate() > 50.0 { "✅" } else { "❌" };
        assert!(line.starts_with(glyph), "{}", line);
        assert!(line.contains(&provider.to_uppercase()), "{}", line);
    }
}

#[test]
fn nvidia_and_qwen_examples() {
    let (_, report) = builtin();

    let nvidia = report.tally().get("nvidia");
    assert_eq!((nvidia.working, nvidia.failing), (3, 0));
    assert_eq!(nvidia.rounded_rate(), 100);
    assert_eq!(nvidia.status(), Outcome::Working);

    let qwen = report.tally().get("qwen");
    assert_eq!((qwen.working, qwen.failing), (0, 4));
    assert_eq!(qwen.rounded_rate(), 0);
    assert_eq!(qwen.status(), Outcome::Failing);
}

#[test]
fn half_rate_gets_failure_glyph() {
    let catalog = Catalog::from_records(
        vec![ModelRecord::new("Even A", "split", "7B", "both")],
        vec![ModelRecord::new("Even B", "split", "7B", "both")],
    )
    .unwrap();
    let text = Report::build(&catalog, ReportConfig::default()).render().unwrap();
    assert!(text.contains("❌ SPLIT          : 1/2 working (50%)\n"));
}

#[test]
fn recommended_matches_working_set() {
    let (catalog, report) = builtin();
    let text = report.render().unwrap();
    let lines = section(&text, "[Recommended models]");

    assert_eq!(lines.len(), catalog.working.len());
    for (line, record) in lines.iter().zip(&catalog.working) {
        assert!(line.starts_with(&format!("  ✅ {}", record.name)), "{}", line);
        assert!(line.ends_with(&format!("({})", record.provider)), "{}", line);
    }
    assert_eq!(report.recommended(), catalog.working.as_slice());
}

#[test]
fn narrative_agrees_with_tally() {
    let (_, report) = builtin();

    for outcome in [Outcome::Working, Outcome::Failing] {
        for provider_trait in report.narrative().traits(outcome) {
            let counts = report.tally().get(&provider_trait.provider);
            assert_eq!(counts.total(), provider_trait.count);
            assert_eq!(counts.status(), outcome);
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    let (catalog, report) = builtin();
    let first = report.render().unwrap();
    let second = report.render().unwrap();
    let rebuilt = Report::build(&catalog, ReportConfig::default()).render().unwrap();

    assert_eq!(first, second);
    assert_eq!(first, rebuilt);
}
