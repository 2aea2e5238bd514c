//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: score a cart and suggest greener
//! alternatives.

use super::{ensure_valid, request_exit_code};
use crate::analysis::{CartAnalyzer, CartRequest};
use crate::config::AppConfig;
use crate::error::EcoTrackError;
use crate::pipeline::{exit_codes, load_catalog, output_report};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Analyze command configuration
pub struct AnalyzeConfig {
    /// JSON catalog file
    pub catalog: PathBuf,
    /// Product ids given on the command line
    pub product_ids: Vec<String>,
    /// JSON request body (`{"productIds": [...]}`) instead of positional ids
    pub request_file: Option<PathBuf>,
    /// Exit with `BELOW_THRESHOLD` when the cart scores lower
    pub min_green_score: Option<u8>,
    pub app: AppConfig,
    pub quiet: bool,
}

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    ensure_valid(&config.app)?;

    let request = match build_request(&config) {
        Ok(request) => request,
        Err(e) => return request_exit_code(e),
    };

    let catalog = load_catalog(&config.catalog)?;
    let analysis_config = config.app.analysis();
    let analyzer = CartAnalyzer::try_new(&catalog, &analysis_config)?;

    let report = match analyzer.analyze_cart(&request) {
        Ok(report) => report,
        Err(e @ EcoTrackError::Validation(_)) => return request_exit_code(e),
        Err(e) => return Err(e).context("cart analysis failed"),
    };

    output_report(&config.app.output, config.quiet, |r| {
        r.generate_cart_report(&report)
    })?;

    if let Some(threshold) = config.min_green_score {
        if report.cart_green_score.value() < threshold {
            tracing::error!(
                "Cart green score {} is below minimum threshold {}",
                report.cart_green_score,
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn build_request(config: &AnalyzeConfig) -> Result<CartRequest, EcoTrackError> {
    match &config.request_file {
        Some(path) => {
            let body = std::fs::read_to_string(path).map_err(|e| EcoTrackError::io(path, e))?;
            CartRequest::from_json(&body)
        }
        None if config.product_ids.is_empty() => Err(EcoTrackError::validation(
            "no product ids given (pass ids or --request FILE)",
        )),
        None => Ok(CartRequest::new(config.product_ids.iter().map(String::as_str))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config(ids: &[&str]) -> AnalyzeConfig {
        AnalyzeConfig {
            catalog: PathBuf::from("unused.json"),
            product_ids: ids.iter().map(ToString::to_string).collect(),
            request_file: None,
            min_green_score: None,
            app: AppConfig::default(),
            quiet: true,
        }
    }

    #[test]
    fn test_build_request_from_ids() {
        let request = build_request(&config(&["a", "b"])).unwrap();
        assert_eq!(request, CartRequest::new(["a", "b"]));
    }

    #[test]
    fn test_build_request_requires_input() {
        assert!(matches!(
            build_request(&config(&[])),
            Err(EcoTrackError::Validation(_))
        ));
    }

    #[test]
    fn test_build_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"productIds": ["snk-001"]}}"#).unwrap();

        let mut cfg = config(&[]);
        cfg.request_file = Some(file.path().to_path_buf());
        let request = build_request(&cfg).unwrap();
        assert_eq!(request, CartRequest::new(["snk-001"]));
    }

    #[test]
    fn test_malformed_request_file_is_invalid_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"productIds": ["snk-001""#).unwrap();

        let mut cfg = config(&[]);
        cfg.request_file = Some(file.path().to_path_buf());
        assert_eq!(run_analyze(cfg).unwrap(), exit_codes::INVALID_REQUEST);
    }
}
