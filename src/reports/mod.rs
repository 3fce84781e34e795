//! Report generation for launchpad comparisons.
//!
//! [`ReportEmitter`] turns a [`DeltaResult`] into a [`ComparisonReport`],
//! looking up change logs and tickets for first-party artifacts. The report
//! is then rendered by a [`ReportGenerator`]:
//! - Plaintext: aligned `group : name : version` columns
//! - JSON: structured data for programmatic integration
//!
//! [`DeltaResult`]: crate::diff::DeltaResult

mod emitter;
mod json;
mod plaintext;
mod types;

pub use emitter::{ReportEmitter, DEFAULT_FIRST_PARTY_GROUP};
pub use json::JsonReporter;
pub use plaintext::PlaintextReporter;
pub use types::{Attribution, ChangedArtifact, ComparisonReport, ReportFormat, ReportMetadata};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Attribution failed: {0}")]
    AttributionError(#[from] crate::error::LaunchpadError),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report as a string
    fn generate(&self, report: &ComparisonReport) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(&self, report: &ComparisonReport, writer: &mut dyn Write) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Plaintext => {
            let reporter = PlaintextReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
