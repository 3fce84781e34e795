//! Commit subjects to ticket summaries.

use super::{IssueTracker, TicketPattern};
use crate::error::Result;
use crate::model::{TicketReference, TicketSummary};

/// Extracts ticket ids from commit subjects and resolves them in one batch.
pub struct TicketResolver<T> {
    pattern: TicketPattern,
    tracker: T,
}

impl<T: IssueTracker> TicketResolver<T> {
    pub fn new(pattern: TicketPattern, tracker: T) -> Self {
        Self { pattern, tracker }
    }

    pub fn pattern(&self) -> &TicketPattern {
        &self.pattern
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Ticket ids referenced by `subjects`, duplicates included.
    pub fn extract<S: AsRef<str>>(&self, subjects: &[S]) -> Vec<TicketReference> {
        self.pattern.extract_all(subjects)
    }

    /// Resolve the tickets referenced by `subjects`.
    ///
    /// An empty id list is answered without contacting the tracker.
    pub fn resolve_tickets<S: AsRef<str>>(&self, subjects: &[S]) -> Result<Vec<TicketSummary>> {
        let ids = self.extract(subjects);
        self.lookup(&ids)
    }

    /// Resolve already extracted ids.
    pub fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!("Looking up {} ticket(s) in {}", ids.len(), self.tracker.name());
        self.tracker.lookup(ids)
    }
}
