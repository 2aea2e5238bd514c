//! Swap command handler.

use super::{ensure_valid, request_exit_code};
use crate::analysis::CartAnalyzer;
use crate::config::AppConfig;
use crate::model::ProductId;
use crate::pipeline::{exit_codes, load_catalog, output_report};
use anyhow::Result;
use std::path::PathBuf;

/// Swap command configuration
pub struct SwapConfig {
    pub catalog: PathBuf,
    pub original: ProductId,
    pub alternative: ProductId,
    pub app: AppConfig,
    pub quiet: bool,
}

/// Run the swap command, returning the desired exit code.
pub fn run_swap(config: SwapConfig) -> Result<i32> {
    ensure_valid(&config.app)?;

    let catalog = load_catalog(&config.catalog)?;
    let analysis_config = config.app.analysis();
    let analyzer = CartAnalyzer::try_new(&catalog, &analysis_config)?;

    let outcome = match analyzer.swap_product(&config.original, &config.alternative) {
        Ok(outcome) => outcome,
        Err(e) => return request_exit_code(e),
    };

    tracing::info!(
        "Swapped {} for {}: {} EcoPoints earned",
        config.original,
        config.alternative,
        outcome.eco_points_earned
    );

    output_report(&config.app.output, config.quiet, |r| {
        r.generate_swap_report(&outcome)
    })?;

    Ok(exit_codes::SUCCESS)
}
