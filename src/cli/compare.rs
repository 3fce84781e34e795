//! Compare command handler.

use crate::changelog::GitChangeLogFinder;
use crate::config::{CompareConfig, Validatable};
use crate::diff::DeltaEngine;
use crate::parsers::ManifestNormalizer;
use crate::pipeline::{
    build_fetcher, build_tracker, exit_codes, load_snapshot, should_use_color, OutputTarget,
};
use crate::reports::{create_reporter, ReportEmitter, ReportMetadata};
use crate::tickets::{TicketPattern, TicketResolver};
use anyhow::{bail, Context, Result};
use std::io::Write;

/// Compare two launchpad releases and write the report, returning the
/// desired exit code.
///
/// Manifest retrieval and parsing failures are returned as errors. Change-log
/// and tracker failures only affect the artifact they occur for and are
/// logged.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let app = &config.app;

    let problems = app.validate();
    if !problems.is_empty() {
        let list: Vec<String> = problems.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", list.join("\n  "));
    }

    tracing::info!(
        "Computing differences between Launchpad versions {} and {}...",
        config.first,
        config.second
    );

    let fetcher = build_fetcher(app)?;
    let normalizer = ManifestNormalizer::new(app.manifest.format);
    let from = load_snapshot(&fetcher, &normalizer, &config.first)?;
    let to = load_snapshot(&fetcher, &normalizer, &config.second)?;

    let delta = DeltaEngine::new().diff(&from, &to);

    let pattern = TicketPattern::new(&app.tickets.prefix)?;
    let resolver = TicketResolver::new(pattern, build_tracker(&app.tickets)?);
    let emitter = ReportEmitter::new(
        app.changelog.first_party_group.as_str(),
        GitChangeLogFinder::new(&app.changelog.checkout),
        resolver,
    );

    let target = OutputTarget::from_option(app.output.file.clone());
    let reporter = create_reporter(
        app.output.format,
        should_use_color(app.output.no_color, &target),
    );
    let metadata = ReportMetadata::new(
        config.first.as_str(),
        config.second.as_str(),
        app.changelog.first_party_group.as_str(),
    );

    let mut writer = target.open()?;
    let report = emitter
        .emit(&delta, metadata, reporter.as_ref(), &mut writer)
        .context("Failed to write report")?;
    writer.flush().context("Failed to write report")?;
    drop(writer);

    if let OutputTarget::File(path) = &target {
        tracing::info!("Report written to {}", path.display());
    }
    let failed = report.failed_attributions();
    if failed > 0 {
        tracing::info!("{failed} changed artifact(s) could not be attributed to tickets");
    }

    Ok(exit_codes::SUCCESS)
}
