//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod analyze;
mod products;
mod score;
mod swap;

pub use analyze::{run_analyze, AnalyzeConfig};
pub use products::{run_products, ProductsConfig};
pub use score::{run_score, ScoreConfig};
pub use swap::{run_swap, SwapConfig};

use crate::config::{AppConfig, Validatable};
use crate::error::EcoTrackError;
use crate::pipeline::exit_codes;
use anyhow::{bail, Result};

/// Refuse to run with an invalid configuration.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("{error}");
    }
    bail!("invalid configuration ({} problems)", errors.len());
}

/// Map a request-level library error to an exit code.
///
/// Bad requests are reported and turned into [`exit_codes::INVALID_REQUEST`];
/// everything else propagates as an error.
fn request_exit_code(err: EcoTrackError) -> Result<i32> {
    match err {
        EcoTrackError::Validation(_)
        | EcoTrackError::NotFound { .. }
        | EcoTrackError::InvalidInput { .. } => {
            tracing::error!("{err}");
            Ok(exit_codes::INVALID_REQUEST)
        }
        other => Err(other.into()),
    }
}
