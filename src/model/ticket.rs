//! Issue tracker ticket types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticket id extracted from a commit subject line, e.g. `SLING-1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketReference {
    pub id: String,
}

impl TicketReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for TicketReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A ticket resolved through the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketSummary {
    pub id: String,
    pub summary: String,
}

impl TicketSummary {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
        }
    }
}
