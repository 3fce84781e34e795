//! Ticket id extraction from commit subjects.

use crate::error::{LaunchpadError, Result};
use crate::model::TicketReference;
use regex::Regex;

/// Ticket prefix used when none is configured.
pub const DEFAULT_TICKET_PREFIX: &str = "SLING";

/// Matches `<PREFIX>-<digits>` at the very start of a commit subject.
///
/// Subjects that mention a ticket anywhere else are ignored.
#[derive(Debug, Clone)]
pub struct TicketPattern {
    prefix: String,
    regex: Regex,
}

impl TicketPattern {
    /// Build the pattern for a project key such as `SLING`.
    pub fn new(prefix: &str) -> Result<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(LaunchpadError::config("ticket prefix must not be empty"));
        }
        let regex = Regex::new(&format!(r"^({}-[0-9]+)", regex::escape(prefix)))
            .map_err(|e| LaunchpadError::config(format!("ticket prefix '{prefix}': {e}")))?;
        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Ticket id leading `subject`, if any.
    #[must_use]
    pub fn extract(&self, subject: &str) -> Option<TicketReference> {
        self.regex
            .captures(subject)
            .and_then(|caps| caps.get(1))
            .map(|m| TicketReference::new(m.as_str()))
    }

    /// Ticket ids of all matching subjects, in input order.
    ///
    /// Repeated ids are kept.
    pub fn extract_all<S: AsRef<str>>(&self, subjects: &[S]) -> Vec<TicketReference> {
        subjects
            .iter()
            .filter_map(|subject| self.extract(subject.as_ref()))
            .collect()
    }
}

impl Default for TicketPattern {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TICKET_PREFIX.to_string(),
            regex: Regex::new(r"^(SLING-[0-9]+)").expect("static regex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(pattern: &TicketPattern, subjects: &[&str]) -> Vec<String> {
        pattern
            .extract_all(subjects)
            .into_iter()
            .map(|t| t.id)
            .collect()
    }

    #[test]
    fn test_extract_leading_ticket() {
        let pattern = TicketPattern::default();
        assert_eq!(
            pattern.extract("SLING-4521 Fix race condition").map(|t| t.id),
            Some("SLING-4521".to_string())
        );
        assert_eq!(
            pattern.extract("SLING-99 ").map(|t| t.id),
            Some("SLING-99".to_string())
        );
        assert_eq!(
            pattern.extract("SLING-7").map(|t| t.id),
            Some("SLING-7".to_string())
        );
    }

    #[test]
    fn test_non_matching_subjects_are_dropped() {
        let pattern = TicketPattern::default();
        assert!(pattern.extract("Minor cleanup").is_none());
        assert!(pattern.extract("Revert SLING-12").is_none());
        assert!(pattern.extract(" SLING-12 leading space").is_none());
        assert!(pattern.extract("SLING- no digits").is_none());
        assert!(pattern.extract("sling-12 lower case").is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let pattern = TicketPattern::default();
        assert_eq!(
            ids(
                &pattern,
                &["SLING-1 a", "cleanup", "SLING-2 b", "SLING-1 follow-up"]
            ),
            vec!["SLING-1", "SLING-2", "SLING-1"]
        );
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let pattern = TicketPattern::new("OAK").unwrap();
        assert_eq!(pattern.prefix(), "OAK");
        assert!(pattern.extract("OAK-100 x").is_some());
        assert!(pattern.extract("SLING-100 x").is_none());

        let dotted = TicketPattern::new("A.B").unwrap();
        assert!(dotted.extract("A.B-1").is_some());
        assert!(dotted.extract("AxB-1").is_none());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(TicketPattern::new("  ").is_err());
    }
}
