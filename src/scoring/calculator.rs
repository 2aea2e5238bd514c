//! EcoScore calculator.
//!
//! Turns a product's environmental attributes into an [`EcoScore`] using the
//! normalization maxima and weights from [`ScoringConfig`].

use super::EcoScore;
use crate::config::{ScoringConfig, Validatable};
use crate::error::{EcoTrackError, Result};
use crate::model::{Product, ScoredProduct};

/// EcoScore formula version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Computes EcoScores from carbon footprint and packaging waste.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Create a calculator with the given normalization config.
    ///
    /// The config is trusted as-is. A zero maximum or weights that do not sum
    /// to 1.0 give meaningless scores, so use [`Self::try_new`] for configs
    /// that have not been through [`Validatable::validate`].
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create a calculator, rejecting an invalid config with
    /// [`EcoTrackError::Config`].
    pub fn try_new(config: ScoringConfig) -> Result<Self> {
        config.check()?;
        Ok(Self::new(config))
    }

    /// The config this calculator scores with
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute the EcoScore for raw attribute values.
    ///
    /// Each attribute is normalized against its maximum and clamped at zero
    /// before weighting, so anything at or above the maximum contributes
    /// nothing. Negative or non-finite input is rejected with
    /// [`EcoTrackError::InvalidInput`].
    pub fn compute_eco_score(&self, carbon_footprint: f64, packaging_waste: f64) -> Result<EcoScore> {
        let carbon = validate_attribute("carbonFootprint", carbon_footprint)?;
        let packaging = validate_attribute("packagingWaste", packaging_waste)?;

        let carbon_score = normalized_score(carbon, self.config.max_carbon_footprint);
        let packaging_score = normalized_score(packaging, self.config.max_packaging_waste);

        let raw = carbon_score * self.config.carbon_weight
            + packaging_score * self.config.packaging_weight;

        Ok(EcoScore::from_raw(raw))
    }

    /// Compute the EcoScore of a product.
    pub fn score_product(&self, product: &Product) -> Result<EcoScore> {
        self.compute_eco_score(product.carbon_footprint, product.packaging_waste)
    }

    /// Score a product and wrap it for output.
    pub fn score(&self, product: Product) -> Result<ScoredProduct> {
        let eco_score = self.score_product(&product)?;
        Ok(ScoredProduct::new(product, eco_score))
    }
}

fn validate_attribute(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EcoTrackError::invalid_input(field, value))
    }
}

/// `max(0, 100 - value / maximum * 100)`
fn normalized_score(value: f64, maximum: f64) -> f64 {
    (100.0 - (value / maximum) * 100.0).max(0.0)
}
