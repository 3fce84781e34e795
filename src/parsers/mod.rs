//! Manifest readers and the normalizer.
//!
//! Two manifest formats describe a launchpad release:
//! - **OSGi feature JSON** (`*.slingosgifeature`), used by the starter
//!   from version 12 on
//! - **Provisioning model** text (`*slingfeature.txt`), used by older
//!   launchpads
//!
//! Each has a [`ManifestReader`]; a confidence-based [`FormatDetector`]
//! picks one when the format is not given. The reader output is turned
//! into a [`ManifestSnapshot`](crate::model::ManifestSnapshot) by
//! [`normalize`], and nothing format-specific leaves this module.
//!
//! ```no_run
//! use launchpad_comparer::parsers::{ManifestFormat, ManifestNormalizer};
//! use std::path::Path;
//!
//! let normalizer = ManifestNormalizer::new(ManifestFormat::Auto);
//! let snapshot = normalizer.load(Path::new("launchpad-12.slingosgifeature")).unwrap();
//! println!("{} artifacts", snapshot.len());
//! ```

mod detection;
mod feature;
mod mvn;
mod normalize;
mod provisioning;
mod traits;

pub use detection::{FormatDetector, ManifestFormat};
pub use feature::{FeatureModel, FeatureReader};
pub use mvn::MavenId;
pub use normalize::{normalize, ManifestNormalizer};
pub use provisioning::{ArtifactGroup, ProvisionedFeature, ProvisioningModel, ProvisioningReader};
pub use traits::{FormatConfidence, ManifestReader, RawManifest};
