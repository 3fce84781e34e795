//! JIRA search API response structures.

use crate::model::TicketSummary;
use serde::Deserialize;

/// Body of `GET /rest/api/2/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
    #[serde(default)]
    pub total: usize,
    /// Present when `validateQuery=warn` dropped unknown keys
    #[serde(default)]
    pub warning_messages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: String,
}

impl From<JiraIssue> for TicketSummary {
    fn from(issue: JiraIssue) -> Self {
        Self::new(issue.key, issue.fields.summary)
    }
}
