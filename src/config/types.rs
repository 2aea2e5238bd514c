//! Configuration types for ecotrack operations.
//!
//! Provides structured configuration for scoring, recommendation and output.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`],
/// which applies a [`ConfigOverrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// EcoScore normalization and weighting
    pub scoring: ScoringConfig,
    /// Alternative search and EcoPoints policy
    pub recommendation: RecommendationConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The subset of settings the analysis engine needs.
    #[must_use]
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            scoring: self.scoring.clone(),
            recommendation: self.recommendation.clone(),
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the carbon footprint that maps to a zero carbon score.
    pub const fn max_carbon_footprint(mut self, value: f64) -> Self {
        self.config.scoring.max_carbon_footprint = value;
        self
    }

    /// Set the packaging waste that maps to a zero packaging score.
    pub const fn max_packaging_waste(mut self, value: f64) -> Self {
        self.config.scoring.max_packaging_waste = value;
        self
    }

    /// Set the carbon and packaging weights.
    pub const fn weights(mut self, carbon: f64, packaging: f64) -> Self {
        self.config.scoring.carbon_weight = carbon;
        self.config.scoring.packaging_weight = packaging;
        self
    }

    /// Set how many sustainable candidates are requested per product.
    pub const fn candidate_limit(mut self, limit: usize) -> Self {
        self.config.recommendation.candidate_limit = limit;
        self
    }

    /// Set the minimum EcoPoints awarded for a swap.
    pub const fn min_eco_points(mut self, points: u32) -> Self {
        self.config.recommendation.min_eco_points = points;
        self
    }

    /// Run alternative lookups concurrently.
    pub const fn parallel_lookups(mut self, parallel: bool) -> Self {
        self.config.recommendation.parallel_lookups = parallel;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Settings given explicitly on the command line.
///
/// Every field is optional: `None` keeps the value from the config file (or
/// the default), `Some` replaces it even when it equals the default.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ConfigOverrides {
    pub max_carbon_footprint: Option<f64>,
    pub max_packaging_waste: Option<f64>,
    /// Carbon and packaging weights, overridden together
    pub weights: Option<(f64, f64)>,
    pub candidate_limit: Option<usize>,
    pub min_eco_points: Option<u32>,
    pub parallel_lookups: Option<bool>,
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
    pub no_color: Option<bool>,
}

impl ConfigOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn max_carbon_footprint(mut self, value: f64) -> Self {
        self.max_carbon_footprint = Some(value);
        self
    }

    pub const fn max_packaging_waste(mut self, value: f64) -> Self {
        self.max_packaging_waste = Some(value);
        self
    }

    pub const fn weights(mut self, carbon: f64, packaging: f64) -> Self {
        self.weights = Some((carbon, packaging));
        self
    }

    pub const fn candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    pub const fn min_eco_points(mut self, points: u32) -> Self {
        self.min_eco_points = Some(points);
        self
    }

    pub const fn parallel_lookups(mut self, parallel: bool) -> Self {
        self.parallel_lookups = Some(parallel);
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = Some(no_color);
        self
    }
}

// ============================================================================
// Analysis Configuration
// ============================================================================

/// Configuration consumed by the cart analyzer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisConfig {
    /// EcoScore normalization and weighting
    pub scoring: ScoringConfig,
    /// Alternative search and EcoPoints policy
    pub recommendation: RecommendationConfig,
}

// ============================================================================
// Scoring Configuration
// ============================================================================

/// Normalization maxima and weights of the EcoScore formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Carbon footprint (kg CO2e) at or above which the carbon score is 0
    pub max_carbon_footprint: f64,
    /// Packaging waste (grams) at or above which the packaging score is 0
    pub max_packaging_waste: f64,
    /// Weight of the carbon score (weights sum to 1.0)
    pub carbon_weight: f64,
    /// Weight of the packaging score (weights sum to 1.0)
    pub packaging_weight: f64,
}

// ============================================================================
// Recommendation Configuration
// ============================================================================

/// Policy for alternative search and EcoPoints awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum sustainable candidates requested from the catalog per product
    pub candidate_limit: usize,
    /// Minimum EcoPoints awarded for any suggested swap
    pub min_eco_points: u32,
    /// Look up alternatives for cart items concurrently
    pub parallel_lookups: bool,
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}
