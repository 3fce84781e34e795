//! Pipeline orchestration: fetch → normalize → diff → attribute → report.
//!
//! Shared stages used by the CLI handler, kept separate so they can be
//! tested on their own.

mod attribution;
mod load;
mod output;

pub use attribution::build_tracker;
pub use load::{build_fetcher, load_snapshot};
pub use output::{should_use_color, OutputTarget};

/// Process exit codes
pub mod exit_codes {
    /// Report written
    pub const SUCCESS: i32 = 0;
    /// A fatal error occurred
    pub const ERROR: i32 = 1;
}
