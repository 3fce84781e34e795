//! JIRA REST client.

use super::response::SearchResponse;
use crate::error::{LaunchpadError, Result, TrackerErrorKind};
use crate::model::{TicketReference, TicketSummary};
use crate::tickets::{IssueTracker, DEFAULT_TRACKER_URL};
use reqwest::blocking::Client;
use std::time::Duration;

/// JIRA client configuration.
#[derive(Debug, Clone)]
pub struct JiraClientConfig {
    /// Base URL of the JIRA instance, without `/rest`
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for failed requests
    pub max_retries: u8,
    /// Maximum keys per search request
    pub batch_size: usize,
}

impl Default for JiraClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TRACKER_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            batch_size: 50,
        }
    }
}

/// HTTP client for the JIRA search API.
pub struct JiraClient {
    client: Client,
    config: JiraClientConfig,
}

fn network_error(msg: &str, err: reqwest::Error) -> LaunchpadError {
    LaunchpadError::tracker(msg, TrackerErrorKind::Network(err.to_string()))
}

fn api_error(msg: impl Into<String>) -> LaunchpadError {
    LaunchpadError::tracker("JIRA search", TrackerErrorKind::Api(msg.into()))
}

/// `key in (A-1,A-2)`
pub(crate) fn key_query(ids: &[TicketReference]) -> String {
    let keys: Vec<&str> = ids.iter().map(|t| t.id.as_str()).collect();
    format!("key in ({})", keys.join(","))
}

/// Longest wait between two attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Exponential backoff before retry `attempt`: 1s, 2s, 4s, ... capped at
/// [`MAX_BACKOFF`].
fn backoff_delay(attempt: u8) -> Duration {
    let secs = 1u64
        .checked_shl(u32::from(attempt.saturating_sub(1)))
        .unwrap_or(u64::MAX);
    Duration::from_secs(secs).min(MAX_BACKOFF)
}

impl JiraClient {
    /// Create a new JIRA client.
    pub fn new(config: JiraClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/rest/api/2/search", self.config.api_base.trim_end_matches('/'))
    }

    /// Search one chunk of keys with retries.
    fn search_with_retries(&self, ids: &[TicketReference]) -> Result<SearchResponse> {
        let url = self.search_url();
        let jql = key_query(ids);
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.send_search(&url, &jql, ids.len()) {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::debug!("Search attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| api_error("Unknown error")))
    }

    fn send_search(&self, url: &str, jql: &str, max_results: usize) -> Result<SearchResponse> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("jql", jql),
                ("fields", "key,summary"),
                ("validateQuery", "warn"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .map_err(|e| network_error("Failed to send search request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(format!(
                "JIRA returned error status {}: {}",
                status.as_u16(),
                body
            )));
        }

        response.json().map_err(|e| {
            LaunchpadError::tracker(
                "parsing search response",
                TrackerErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }
}

impl IssueTracker for JiraClient {
    fn lookup(&self, ids: &[TicketReference]) -> Result<Vec<TicketSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tickets = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(self.config.batch_size.max(1)) {
            let response = self.search_with_retries(chunk)?;
            for warning in &response.warning_messages {
                tracing::debug!("JIRA: {warning}");
            }
            tickets.extend(response.issues.into_iter().map(TicketSummary::from));
        }
        Ok(tickets)
    }

    fn name(&self) -> &'static str {
        "JIRA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = JiraClientConfig::default();
        assert_eq!(config.api_base, "https://issues.apache.org/jira");
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn test_backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(4), Duration::from_secs(8));
        assert_eq!(backoff_delay(7), MAX_BACKOFF);
        assert_eq!(backoff_delay(65), MAX_BACKOFF);
        assert_eq!(backoff_delay(u8::MAX), MAX_BACKOFF);
    }

    #[test]
    fn test_key_query() {
        let ids = [TicketReference::new("SLING-1"), TicketReference::new("SLING-22")];
        assert_eq!(key_query(&ids), "key in (SLING-1,SLING-22)");
    }

    #[test]
    fn test_search_url_trims_slash() {
        let client = JiraClient::new(JiraClientConfig {
            api_base: "https://jira.example.org/".to_string(),
            ..JiraClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.search_url(), "https://jira.example.org/rest/api/2/search");
    }

    #[test]
    fn test_empty_lookup_sends_nothing() {
        let client = JiraClient::new(JiraClientConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            max_retries: 0,
            ..JiraClientConfig::default()
        })
        .unwrap();
        assert!(client.lookup(&[]).unwrap().is_empty());
    }
}
