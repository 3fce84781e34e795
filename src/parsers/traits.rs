//! Reader trait definitions and format confidence scoring.
//!
//! Each manifest format has a reader that turns file content into a
//! [`RawManifest`]. Only the normalizer looks inside a `RawManifest`; the
//! rest of the crate works with [`ManifestSnapshot`](crate::model::ManifestSnapshot).

use super::feature::FeatureModel;
use super::provisioning::ProvisioningModel;
use crate::error::{LaunchpadError, ParseErrorKind, Result};
use std::path::Path;

/// Reader output, tagged by the format it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawManifest {
    /// OSGi feature JSON (`*.slingosgifeature`)
    Feature(FeatureModel),
    /// Provisioning model text (`*slingfeature.txt`)
    Provisioning(ProvisioningModel),
}

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// Definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Might be this format
    pub const LOW: Self = Self(0.25);
    /// Likely this format
    pub const MEDIUM: Self = Self(0.5);
    /// Almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Definitely this format
    pub const CERTAIN: Self = Self(1.0);

    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be read
    #[must_use]
    pub fn can_read(&self) -> bool {
        self.0 >= Self::LOW.0
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Trait for manifest format readers.
///
/// Implementors provide lightweight detection via `detect()` and full
/// reading via `read_str()`.
pub trait ManifestReader {
    /// Read a manifest from a file path
    fn read(&self, path: &Path) -> Result<RawManifest> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LaunchpadError::parse(
                format!("reading {}", path.display()),
                ParseErrorKind::Unreadable(e.to_string()),
            )
        })?;
        self.read_str(&content)
    }

    /// Read a manifest from string content
    fn read_str(&self, content: &str) -> Result<RawManifest>;

    /// Get format name
    fn format_name(&self) -> &'static str;

    /// Score how likely it is that this reader handles the content.
    fn detect(&self, content: &str) -> FormatConfidence;

    /// Quick check if this reader can likely handle the content
    fn can_read(&self, content: &str) -> bool {
        self.detect(content).can_read()
    }
}
