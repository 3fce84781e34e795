//! Data model shared by the comparison pipeline.
//!
//! Every entity here is built fresh per run from the fetched manifests and
//! discarded at exit.

mod artifact;
mod identity;
mod ticket;

pub use artifact::{ArtifactRecord, ManifestSnapshot, VersionChange};
pub use identity::{ArtifactIdentity, DEFAULT_TYPE};
pub use ticket::{TicketReference, TicketSummary};

/// First line of a commit message, in log order.
pub type CommitEntry = String;
