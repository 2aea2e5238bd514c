//! Report generation for analysis results.
//!
//! Two output formats are supported:
//! - Summary: colored, human-readable terminal output
//! - JSON: structured data with tool metadata, for programmatic use

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ScoreReport};

use crate::analysis::{CartAnalysisReport, SwapOutcome};
use crate::model::ScoredProduct;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a cart analysis
    fn generate_cart_report(&self, report: &CartAnalysisReport) -> Result<String, ReportError>;

    /// Render the outcome of a swap
    fn generate_swap_report(&self, outcome: &SwapOutcome) -> Result<String, ReportError>;

    /// Render a list of scored products
    fn generate_product_list(&self, products: &[ScoredProduct]) -> Result<String, ReportError>;

    /// Render a single computed score
    fn generate_score_report(&self, score: &ScoreReport) -> Result<String, ReportError>;

    /// Write a cart analysis to a writer
    fn write_cart_report(
        &self,
        report: &CartAnalysisReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_cart_report(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
