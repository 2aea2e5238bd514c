//! Configuration validation for ecotrack.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AnalysisConfig, AppConfig, OutputConfig, RecommendationConfig, ScoringConfig};
use crate::error::{EcoTrackError, Result};

/// Allowed deviation of the weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validate, folding every problem into one [`EcoTrackError::Config`].
    fn check(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(EcoTrackError::config(joined))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.recommendation.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.scoring.validate();
        errors.extend(self.recommendation.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("scoring.max_carbon_footprint", self.max_carbon_footprint),
            ("scoring.max_packaging_waste", self.max_packaging_waste),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ConfigError::new(
                    field,
                    format!("Maximum must be a positive number, got {value}"),
                ));
            }
        }

        let mut weights_valid = true;
        for (field, value) in [
            ("scoring.carbon_weight", self.carbon_weight),
            ("scoring.packaging_weight", self.packaging_weight),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                weights_valid = false;
                errors.push(ConfigError::new(
                    field,
                    format!("Weight must be between 0.0 and 1.0, got {value}"),
                ));
            }
        }

        let sum = self.carbon_weight + self.packaging_weight;
        if weights_valid && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(ConfigError::new(
                "scoring",
                format!("carbon_weight + packaging_weight must equal 1.0, got {sum}"),
            ));
        }

        errors
    }
}

impl Validatable for RecommendationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.candidate_limit == 0 {
            errors.push(ConfigError::new(
                "recommendation.candidate_limit",
                "Candidate limit must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
        assert!(AppConfig::default().analysis().is_valid());
    }

    #[test]
    fn test_scoring_maxima_must_be_positive() {
        let config = ScoringConfig {
            max_carbon_footprint: 0.0,
            max_packaging_waste: f64::NAN,
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "scoring.max_carbon_footprint");
        assert_eq!(errors[1].field, "scoring.max_packaging_waste");
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            carbon_weight: 0.7,
            packaging_weight: 0.4,
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring");

        let balanced = ScoringConfig {
            carbon_weight: 0.5,
            packaging_weight: 0.5,
            ..ScoringConfig::default()
        };
        assert!(balanced.is_valid());
    }

    #[test]
    fn test_out_of_range_weight_reported_once() {
        let config = ScoringConfig {
            carbon_weight: 1.5,
            packaging_weight: -0.5,
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2, "sum check is skipped when a weight is out of range");
    }

    #[test]
    fn test_candidate_limit_must_be_positive() {
        let config = RecommendationConfig {
            candidate_limit: 0,
            ..RecommendationConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let relative = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(relative.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("recommendation.candidate_limit", "too small");
        assert_eq!(err.to_string(), "recommendation.candidate_limit: too small");
    }
}
