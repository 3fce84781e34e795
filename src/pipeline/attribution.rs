//! Issue tracker selection.

use crate::config::TicketConfig;
use crate::tickets::{IssueTracker, NoOpTracker};
use anyhow::Result;

/// Tracker for the ticket settings; [`NoOpTracker`] when lookups are off.
pub fn build_tracker(config: &TicketConfig) -> Result<Box<dyn IssueTracker>> {
    if !config.enabled {
        tracing::debug!("Issue tracker lookups disabled");
        return Ok(Box::new(NoOpTracker));
    }

    #[cfg(feature = "remote")]
    {
        use anyhow::Context;
        use crate::tickets::{JiraClient, JiraClientConfig};

        let client = JiraClient::new(JiraClientConfig {
            api_base: config.tracker_url.clone(),
            timeout: std::time::Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            batch_size: config.batch_size,
        })
        .context("Failed to set up issue tracker client")?;
        Ok(Box::new(client))
    }

    #[cfg(not(feature = "remote"))]
    {
        tracing::warn!(
            "Ticket lookups requested but the 'remote' feature is not enabled; \
             reporting ticket ids only"
        );
        Ok(Box::new(NoOpTracker))
    }
}
