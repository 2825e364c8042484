//! Model Outcomes CLI Application
//!
//! Prints the model failure analysis report for the built-in catalog.
//! Takes no arguments. Logging goes to stderr and is controlled by `RUST_LOG`,
//! so the report on stdout is identical on every run.

use anyhow::{Context, Result};
use model_outcomes::{Catalog, Report, ReportConfig};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    log::info!("Model Outcomes CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using report library v{}", model_outcomes::VERSION);

    let catalog = Catalog::builtin().context("Failed to load built-in model catalog")?;
    let report = Report::build(&catalog, ReportConfig::default());

    if log::log_enabled!(log::Level::Debug) {
        let tally = serde_json::to_string(report.tally()).context("Failed to serialize tally")?;
        log::debug!("Provider tally: {}", tally);
    }

    let text = report.render().context("Failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("Failed to write report to stdout")?;
    stdout.flush()?;

    Ok(())
}

/// Initialize logging from `RUST_LOG`, defaulting to warnings only
fn init_logging() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
