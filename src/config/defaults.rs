//! Default values for ecotrack configuration.
//!
//! The EcoScore normalization constants live here as named values so the
//! formula can be tuned and tested without touching the calculator.

use super::types::{RecommendationConfig, ScoringConfig};

/// Carbon footprint (kg CO2e) that maps to a zero carbon score
pub const DEFAULT_MAX_CARBON_FOOTPRINT: f64 = 100.0;

/// Packaging waste (grams) that maps to a zero packaging score
pub const DEFAULT_MAX_PACKAGING_WASTE: f64 = 500.0;

/// Weight of the carbon score
pub const DEFAULT_CARBON_WEIGHT: f64 = 0.6;

/// Weight of the packaging score
pub const DEFAULT_PACKAGING_WEIGHT: f64 = 0.4;

/// Sustainable candidates requested from the catalog per product
pub const DEFAULT_CANDIDATE_LIMIT: usize = 3;

/// Minimum EcoPoints awarded for a suggested swap
pub const DEFAULT_MIN_ECO_POINTS: u32 = 5;

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_carbon_footprint: DEFAULT_MAX_CARBON_FOOTPRINT,
            max_packaging_waste: DEFAULT_MAX_PACKAGING_WASTE,
            carbon_weight: DEFAULT_CARBON_WEIGHT,
            packaging_weight: DEFAULT_PACKAGING_WEIGHT,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            min_eco_points: DEFAULT_MIN_ECO_POINTS,
            parallel_lookups: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = ScoringConfig::default();
        let sum = config.carbon_weight + config.packaging_weight;
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn test_default_recommendation_policy() {
        let config = RecommendationConfig::default();
        assert_eq!(config.candidate_limit, 3);
        assert_eq!(config.min_eco_points, 5);
        assert!(config.parallel_lookups);
    }
}
