//! Pipeline orchestration for CLI commands.
//!
//! Shared load → analyze → report plumbing, so command handlers stay small.

mod catalog;
mod output;
mod report;

pub use catalog::load_catalog;
pub use output::{should_use_color, should_use_color_for, write_output, OutputTarget};
pub use report::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a catalog file
    #[error("Catalog load failed for {path}: {source}")]
    CatalogLoadFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for scripting and CI integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The cart green score is below the requested minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// The request was invalid or referenced unknown products
    pub const INVALID_REQUEST: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
