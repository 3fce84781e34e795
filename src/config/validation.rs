//! Configuration validation.

use super::types::*;

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_url(errors: &mut Vec<ConfigError>, field: &str, url: &str) {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::new(
            field,
            format!("URL must start with http:// or https://, got '{url}'"),
        ));
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.repositories.validate());
        errors.extend(self.changelog.validate());
        errors.extend(self.tickets.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for RepositoryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_url(&mut errors, "repositories.release_url", &self.release_url);
        check_url(&mut errors, "repositories.snapshot_url", &self.snapshot_url);
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "repositories.timeout_secs",
                "Timeout must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for ChangelogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.first_party_group.trim().is_empty() {
            errors.push(ConfigError::new(
                "changelog.first_party_group",
                "First-party group must not be empty",
            ));
        }
        errors
    }
}

impl Validatable for TicketConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.prefix.is_empty() {
            errors.push(ConfigError::new("tickets.prefix", "Ticket prefix must not be empty"));
        } else if !self
            .prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            errors.push(ConfigError::new(
                "tickets.prefix",
                format!(
                    "Ticket prefix must be alphanumeric, got '{}'",
                    self.prefix
                ),
            ));
        }

        if self.enabled {
            check_url(&mut errors, "tickets.tracker_url", &self.tracker_url);
        }
        if self.batch_size == 0 {
            errors.push(ConfigError::new(
                "tickets.batch_size",
                "Batch size must be greater than 0",
            ));
        }
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "tickets.timeout_secs",
                "Timeout must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}
