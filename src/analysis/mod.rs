//! Cart analysis and product swaps.
//!
//! # Example
//!
//! ```
//! use ecotrack::analysis::{CartAnalyzer, CartRequest};
//! use ecotrack::catalog::InMemoryCatalog;
//! use ecotrack::config::AnalysisConfig;
//! use ecotrack::model::Product;
//!
//! let catalog = InMemoryCatalog::from_products([
//!     Product::new("bev-001", "Cola Cans", "Beverages").with_footprint(45.0, 180.0),
//!     Product::new("bev-002", "Eco Cola", "Beverages")
//!         .with_footprint(25.0, 80.0)
//!         .sustainable(true),
//! ])
//! .unwrap();
//!
//! let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
//! let report = analyzer.analyze_cart(&CartRequest::new(["bev-001"])).unwrap();
//!
//! assert_eq!(report.cart_green_score.value(), 59);
//! assert_eq!(report.suggestions[0].potential_eco_points, 20);
//! ```

mod cart;
mod swap;

pub use cart::{
    CartAnalysisReport, CartAnalyzer, CartRequest, DegradedLookup, SkippedProduct, Suggestion,
};
pub use swap::{SwapEvaluator, SwapOutcome};
