//! Centralized format detection for manifest readers.

use super::feature::FeatureReader;
use super::provisioning::ProvisioningReader;
use super::traits::{FormatConfidence, ManifestReader, RawManifest};
use crate::error::{LaunchpadError, ParseErrorKind, Result};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Manifest format selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestFormat {
    /// Detect from content
    #[default]
    Auto,
    /// OSGi feature JSON
    Feature,
    /// Provisioning model text
    Provisioning,
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Feature => write!(f, "feature"),
            Self::Provisioning => write!(f, "provisioning"),
        }
    }
}

/// Picks the reader for a manifest, by content or by explicit format.
#[derive(Debug, Clone, Default)]
pub struct FormatDetector {
    feature: FeatureReader,
    provisioning: ProvisioningReader,
}

impl FormatDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            feature: FeatureReader::new(),
            provisioning: ProvisioningReader::new(),
        }
    }

    /// Detect the format of `content`, or `None` if no reader is confident.
    #[must_use]
    pub fn detect(&self, content: &str) -> Option<ManifestFormat> {
        let feature = self.feature.detect(content);
        let provisioning = self.provisioning.detect(content);

        tracing::debug!(
            "Format detection: feature={:.2}, provisioning={:.2}",
            feature.value(),
            provisioning.value()
        );

        if feature.can_read() && feature >= provisioning {
            Some(ManifestFormat::Feature)
        } else if provisioning.can_read() {
            Some(ManifestFormat::Provisioning)
        } else {
            None
        }
    }

    /// Read `content` with the reader for `format`, detecting it when `Auto`.
    pub fn read_str(&self, content: &str, format: ManifestFormat) -> Result<RawManifest> {
        let resolved = match format {
            ManifestFormat::Auto => self.detect(content).ok_or_else(|| {
                LaunchpadError::parse("detecting format", ParseErrorKind::UnknownFormat)
            })?,
            explicit => explicit,
        };

        match resolved {
            ManifestFormat::Provisioning => self.provisioning.read_str(content),
            _ => self.feature.read_str(content),
        }
    }

    /// Confidence of the best matching reader, for diagnostics.
    #[must_use]
    pub fn best_confidence(&self, content: &str) -> FormatConfidence {
        let feature = self.feature.detect(content);
        let provisioning = self.provisioning.detect(content);
        if feature >= provisioning {
            feature
        } else {
            provisioning
        }
    }
}
