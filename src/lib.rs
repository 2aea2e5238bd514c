//! **EcoScore scoring and greener-alternative recommendations for shopping carts.**
//!
//! `ecotrack` turns two environmental attributes of a product, its carbon
//! footprint and its packaging waste, into a 0-100 **EcoScore**. It then
//! analyzes whole carts: it averages the scores into a cart green score,
//! finds sustainable products in the same category that score strictly
//! better, and awards **EcoPoints** for swaps.
//!
//! ## Core Concepts & Modules
//!
//! - **[`scoring`]**: the pure EcoScore formula ([`ScoreCalculator`]), the
//!   EcoPoints reward ([`EcoPointsCalculator`]) and rating bands.
//! - **[`catalog`]**: the [`CatalogReader`] trait the engine reads products
//!   through, with an in-memory JSON-backed implementation.
//! - **[`recommend`]**: [`AlternativeFinder`], which ranks greener
//!   alternatives and fails soft when the catalog misbehaves.
//! - **[`analysis`]**: [`CartAnalyzer`], which produces a
//!   [`CartAnalysisReport`] and evaluates swaps.
//! - **[`reports`]**: JSON and terminal summary output.
//! - **[`config`]**: YAML configuration, validation and JSON schema.
//!
//! ## Getting Started
//!
//! ```
//! use ecotrack::{AnalysisConfig, CartAnalyzer, CartRequest, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::from_json_str(r#"[
//!     {"_id": "snk-001", "productName": "Potato Chips", "category": "Snacks",
//!      "carbonFootprint": 35, "packagingWaste": 150, "isSustainable": false},
//!     {"_id": "snk-002", "productName": "Veggie Chips", "category": "Snacks",
//!      "carbonFootprint": 18, "packagingWaste": 30, "isSustainable": true}
//! ]"#)?;
//!
//! let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
//! let report = analyzer.analyze_cart(&CartRequest::new(["snk-001"]))?;
//!
//! assert_eq!(report.cart_green_score.value(), 67);
//! let suggestion = &report.suggestions[0];
//! assert_eq!(suggestion.alternatives[0].eco_score.value(), 87);
//! assert_eq!(suggestion.potential_eco_points, 20);
//! # Ok::<(), ecotrack::EcoTrackError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores are bounded to 0-100 and item counts are small
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use analysis::{CartAnalysisReport, CartAnalyzer, CartRequest, Suggestion, SwapOutcome};
pub use catalog::{CatalogReader, InMemoryCatalog, LookupStats, NoOpCatalog};
pub use config::{AnalysisConfig, AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{EcoTrackError, ErrorContext, OptionContext, Result};
pub use model::{Product, ProductId, ScoredProduct};
pub use recommend::{AlternativeFinder, AlternativeLookup};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{EcoPointsCalculator, EcoRating, EcoScore, ScoreCalculator};
