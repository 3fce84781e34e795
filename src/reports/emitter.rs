//! Drives change-log and ticket attribution for a delta.

use super::types::{Attribution, ChangedArtifact, ComparisonReport, ReportMetadata};
use super::{ReportError, ReportGenerator};
use crate::changelog::ChangeLogSource;
use crate::diff::DeltaResult;
use crate::error::Result;
use crate::model::{ArtifactIdentity, VersionChange};
use crate::tickets::{IssueTracker, TicketResolver};
use std::io::Write;

/// Default first-party group.
pub const DEFAULT_FIRST_PARTY_GROUP: &str = "org.apache.sling";

/// Builds reports from a delta, attributing first-party changes to tickets.
///
/// Only changed artifacts whose group equals `first_party_group` exactly
/// are looked up. A non-fatal failure while looking up one artifact (see
/// [`crate::error::LaunchpadError::is_fatal`]) is logged and recorded in its
/// [`Attribution`]; the other artifacts are unaffected. Fatal errors end
/// the run.
pub struct ReportEmitter<C, T> {
    first_party_group: String,
    changelog: C,
    tickets: TicketResolver<T>,
}

impl<C: ChangeLogSource, T: IssueTracker> ReportEmitter<C, T> {
    pub fn new(first_party_group: impl Into<String>, changelog: C, tickets: TicketResolver<T>) -> Self {
        Self {
            first_party_group: first_party_group.into(),
            changelog,
            tickets,
        }
    }

    #[must_use]
    pub fn first_party_group(&self) -> &str {
        &self.first_party_group
    }

    fn try_attribute(&self, identity: &ArtifactIdentity, change: &VersionChange) -> Result<Attribution> {
        let subjects = self
            .changelog
            .changes(&identity.name, &change.from, &change.to)?;
        let commits = subjects.len();

        if !self.tickets.tracker().is_enabled() {
            let ids = self
                .tickets
                .extract(subjects.as_slice())
                .into_iter()
                .map(|t| t.id)
                .collect();
            return Ok(Attribution::IdsOnly { commits, ids });
        }

        let tickets = self.tickets.resolve_tickets(subjects.as_slice())?;
        Ok(Attribution::Resolved { commits, tickets })
    }

    /// Attribution for one changed artifact.
    pub fn attribute(&self, identity: &ArtifactIdentity, change: &VersionChange) -> Result<Attribution> {
        if !identity.is_in_group(&self.first_party_group) {
            return Ok(Attribution::NotFirstParty);
        }

        match self.try_attribute(identity, change) {
            Ok(attribution) => Ok(attribution),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::warn!("Failed retrieving changes : {e}");
                Ok(Attribution::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Assemble the report; sections follow identity order.
    pub fn build(&self, delta: &DeltaResult, metadata: ReportMetadata) -> Result<ComparisonReport> {
        let changed = delta
            .changed
            .iter()
            .map(|(identity, change)| {
                Ok(ChangedArtifact {
                    identity: identity.clone(),
                    change: change.clone(),
                    attribution: self.attribute(identity, change)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ComparisonReport {
            metadata,
            summary: delta.summary(),
            added: delta.added.iter().cloned().collect(),
            removed: delta.removed.iter().cloned().collect(),
            changed,
        })
    }

    /// Build the report and write it with `generator`.
    pub fn emit(
        &self,
        delta: &DeltaResult,
        metadata: ReportMetadata,
        generator: &dyn ReportGenerator,
        writer: &mut dyn Write,
    ) -> std::result::Result<ComparisonReport, ReportError> {
        let report = self.build(delta, metadata)?;
        generator.write_report(&report, writer)?;
        Ok(report)
    }
}
