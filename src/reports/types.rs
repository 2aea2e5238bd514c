//! Report type definitions.

use crate::scoring::{EcoRating, EcoScore};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// EcoScore of a raw pair of attributes, as reported by `ecotrack score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub carbon_footprint: f64,
    pub packaging_waste: f64,
    pub eco_score: EcoScore,
    pub rating: EcoRating,
}

impl ScoreReport {
    /// Build a report for a computed score.
    #[must_use]
    pub const fn new(carbon_footprint: f64, packaging_waste: f64, eco_score: EcoScore) -> Self {
        Self {
            carbon_footprint,
            packaging_waste,
            eco_score,
            rating: EcoRating::from_score(eco_score),
        }
    }
}
