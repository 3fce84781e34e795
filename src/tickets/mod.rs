//! Ticket attribution for changed artifacts.
//!
//! Commit subjects that start with a project ticket id (`SLING-1234 ...`)
//! are turned into [`TicketReference`]s by a [`TicketPattern`] and resolved
//! to summaries through an [`IssueTracker`].
//!
//! [`TicketReference`]: crate::model::TicketReference

mod extractor;
#[cfg(feature = "remote")]
pub mod jira;
mod resolver;
mod traits;

pub use extractor::{TicketPattern, DEFAULT_TICKET_PREFIX};
#[cfg(feature = "remote")]
pub use jira::{JiraClient, JiraClientConfig};
pub use resolver::TicketResolver;
pub use traits::{IssueTracker, NoOpTracker, DEFAULT_TRACKER_URL};
