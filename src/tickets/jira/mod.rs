//! JIRA issue tracker.

mod client;
mod response;

pub use client::{JiraClient, JiraClientConfig};
pub use response::{JiraFields, JiraIssue, SearchResponse};
