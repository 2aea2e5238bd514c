//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ScoreReport};
use crate::analysis::{CartAnalysisReport, SwapOutcome};
use crate::model::ScoredProduct;
use crate::scoring::SCORING_ENGINE_VERSION;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render(&self, body: JsonBody<'_>) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                scoring_engine: SCORING_ENGINE_VERSION,
                generated_at: Utc::now().to_rfc3339(),
            },
            body,
        };

        if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_cart_report(&self, report: &CartAnalysisReport) -> Result<String, ReportError> {
        self.render(JsonBody::Analysis(report))
    }

    fn generate_swap_report(&self, outcome: &SwapOutcome) -> Result<String, ReportError> {
        self.render(JsonBody::Swap(outcome))
    }

    fn generate_product_list(&self, products: &[ScoredProduct]) -> Result<String, ReportError> {
        self.render(JsonBody::Products(products))
    }

    fn generate_score_report(&self, score: &ScoreReport) -> Result<String, ReportError> {
        self.render(JsonBody::Score(score))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON report structures
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    body: JsonBody<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum JsonBody<'a> {
    Analysis(&'a CartAnalysisReport),
    Swap(&'a SwapOutcome),
    Products(&'a [ScoredProduct]),
    Score(&'a ScoreReport),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata {
    tool: ToolInfo,
    scoring_engine: &'static str,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
