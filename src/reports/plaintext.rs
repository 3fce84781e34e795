//! Column-aligned text report.

use super::{ComparisonReport, ReportError, ReportFormat, ReportGenerator};
use super::types::{Attribution, ChangedArtifact};
use crate::model::ArtifactIdentity;
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

const GROUP_WIDTH: usize = 30;
const NAME_WIDTH: usize = 55;
const TICKET_WIDTH: usize = 10;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Left-align `text` in a column of `width` display cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Name column; the classifier is appended when present.
fn name_column(identity: &ArtifactIdentity) -> String {
    if identity.classifier.is_empty() {
        identity.name.clone()
    } else {
        format!("{}:{}", identity.name, identity.classifier)
    }
}

/// Plaintext reporter
pub struct PlaintextReporter {
    colored: bool,
}

impl PlaintextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn header(&self, out: &mut String, title: &str, color: &str) -> std::fmt::Result {
        writeln!(out, "{}", ansi_color(title, color, self.colored))
    }

    fn row(out: &mut String, identity: &ArtifactIdentity, version: &str) -> std::fmt::Result {
        writeln!(
            out,
            "    {} : {} : {version}",
            pad(&identity.group, GROUP_WIDTH),
            pad(&name_column(identity), NAME_WIDTH)
        )
    }

    fn changed(out: &mut String, entry: &ChangedArtifact) -> std::fmt::Result {
        Self::row(out, &entry.identity, &entry.change.to_string())?;
        match &entry.attribution {
            Attribution::Resolved { tickets, .. } => {
                for ticket in tickets {
                    writeln!(out, "        {} - {}", pad(&ticket.id, TICKET_WIDTH), ticket.summary)?;
                }
            }
            Attribution::IdsOnly { ids, .. } => {
                for id in ids {
                    writeln!(out, "        {id}")?;
                }
            }
            Attribution::NotFirstParty | Attribution::Failed { .. } => {}
        }
        Ok(())
    }
}

impl Default for PlaintextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PlaintextReporter {
    fn generate(&self, report: &ComparisonReport) -> Result<String, ReportError> {
        let mut out = String::new();

        self.header(&mut out, "Added", "green")?;
        for record in &report.added {
            Self::row(&mut out, &record.identity, &record.version)?;
        }

        self.header(&mut out, "Removed", "red")?;
        for record in &report.removed {
            Self::row(&mut out, &record.identity, &record.version)?;
        }

        self.header(&mut out, "Changed", "yellow")?;
        for entry in &report.changed {
            Self::changed(&mut out, entry)?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Plaintext
    }
}
