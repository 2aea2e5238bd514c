//! Score command handler.
//!
//! Scores a raw pair of attributes without a catalog.

use super::{ensure_valid, request_exit_code};
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, output_report};
use crate::reports::ScoreReport;
use crate::scoring::ScoreCalculator;
use anyhow::Result;

/// Score command configuration
pub struct ScoreConfig {
    /// Carbon footprint in kg CO2e
    pub carbon_footprint: f64,
    /// Packaging waste in grams
    pub packaging_waste: f64,
    pub app: AppConfig,
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    ensure_valid(&config.app)?;

    let calculator = ScoreCalculator::try_new(config.app.scoring.clone())?;
    let eco_score =
        match calculator.compute_eco_score(config.carbon_footprint, config.packaging_waste) {
            Ok(score) => score,
            Err(e) => return request_exit_code(e),
        };

    let report = ScoreReport::new(config.carbon_footprint, config.packaging_waste, eco_score);
    output_report(&config.app.output, config.quiet, |r| {
        r.generate_score_report(&report)
    })?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(carbon: f64, waste: f64) -> i32 {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoreConfig {
            carbon_footprint: carbon,
            packaging_waste: waste,
            app: AppConfig::builder()
                .output_file(Some(dir.path().join("score.txt")))
                .build(),
            quiet: true,
        };
        run_score(config).unwrap()
    }

    #[test]
    fn test_run_score_success() {
        assert_eq!(run(45.0, 180.0), exit_codes::SUCCESS);
    }

    #[test]
    fn test_run_score_negative_input() {
        assert_eq!(run(-1.0, 180.0), exit_codes::INVALID_REQUEST);
    }
}
