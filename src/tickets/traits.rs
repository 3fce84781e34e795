//! Issue tracker abstraction.

use crate::error::Result;
use crate::model::{TicketReference, TicketSummary};

/// Default issue tracker base URL.
pub const DEFAULT_TRACKER_URL: &str = "https://issues.apache.org/jira";

/// Looks up ticket summaries by id.
///
/// Ids unknown to the tracker are absent from the result; that is not an
/// error. No ordering of the result is guaranteed.
pub trait IssueTracker {
    fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>>;

    /// Name of the tracker (e.g., "JIRA").
    fn name(&self) -> &'static str;

    /// Whether lookups reach a real tracker.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<T: IssueTracker + ?Sized> IssueTracker for &T {
    fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        (**self).lookup(ids)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<T: IssueTracker + ?Sized> IssueTracker for Box<T> {
    fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        (**self).lookup(ids)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Tracker used when ticket lookups are switched off.
///
/// Returns nothing, so reports carry the extracted ids without summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTracker;

impl NoOpTracker {
    pub fn new() -> Self {
        Self
    }
}

impl IssueTracker for NoOpTracker {
    fn lookup(&self, _ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
