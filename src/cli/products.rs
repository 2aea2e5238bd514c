//! Products command handler.
//!
//! Lists catalog products with their derived EcoScores.

use super::ensure_valid;
use crate::catalog::InMemoryCatalog;
use crate::config::AppConfig;
use crate::model::ScoredProduct;
use crate::pipeline::{exit_codes, load_catalog, output_report};
use crate::scoring::ScoreCalculator;
use anyhow::Result;
use std::path::PathBuf;

/// Products command configuration
pub struct ProductsConfig {
    pub catalog: PathBuf,
    /// Only list products in this category (case-insensitive)
    pub category: Option<String>,
    /// Only list products flagged sustainable
    pub sustainable_only: bool,
    /// Order by EcoScore, best first, instead of catalog order
    pub sort_by_score: bool,
    pub app: AppConfig,
    pub quiet: bool,
}

/// Run the products command, returning the desired exit code.
pub fn run_products(config: ProductsConfig) -> Result<i32> {
    ensure_valid(&config.app)?;

    let catalog = load_catalog(&config.catalog)?;
    let calculator = ScoreCalculator::try_new(config.app.scoring.clone())?;
    let products = scored_listing(&catalog, &calculator, &config);

    output_report(&config.app.output, config.quiet, |r| {
        r.generate_product_list(&products)
    })?;

    Ok(exit_codes::SUCCESS)
}

fn scored_listing(
    catalog: &InMemoryCatalog,
    calculator: &ScoreCalculator,
    config: &ProductsConfig,
) -> Vec<ScoredProduct> {
    let mut products: Vec<ScoredProduct> = catalog
        .all()
        .filter(|p| {
            config
                .category
                .as_deref()
                .map_or(true, |c| p.category.eq_ignore_ascii_case(c))
        })
        .filter(|p| !config.sustainable_only || p.is_sustainable)
        .filter_map(|p| match calculator.score(p.clone()) {
            Ok(scored) => Some(scored),
            Err(e) => {
                tracing::warn!("Skipping product {}: {}", p.id, e);
                None
            }
        })
        .collect();

    if config.sort_by_score {
        products.sort_by(|a, b| b.eco_score.cmp(&a.eco_score));
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_products([
            Product::new("bev-001", "Cola", "Beverages").with_footprint(45.0, 180.0),
            Product::new("snk-001", "Chips", "Snacks").with_footprint(35.0, 150.0),
            Product::new("snk-002", "Veggie Chips", "Snacks")
                .with_footprint(18.0, 30.0)
                .sustainable(true),
            Product::new("snk-bad", "Broken", "Snacks").with_footprint(f64::NAN, 1.0),
        ])
        .unwrap()
    }

    fn config() -> ProductsConfig {
        ProductsConfig {
            catalog: PathBuf::new(),
            category: None,
            sustainable_only: false,
            sort_by_score: false,
            app: AppConfig::default(),
            quiet: true,
        }
    }

    fn ids(products: &[ScoredProduct]) -> Vec<&str> {
        products.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn test_listing_skips_unscorable() {
        let listed = scored_listing(&catalog(), &ScoreCalculator::default(), &config());
        assert_eq!(ids(&listed), vec!["bev-001", "snk-001", "snk-002"]);
    }

    #[test]
    fn test_listing_filters_and_sorts() {
        let cfg = ProductsConfig {
            category: Some("snacks".to_string()),
            sort_by_score: true,
            ..config()
        };
        let listed = scored_listing(&catalog(), &ScoreCalculator::default(), &cfg);
        assert_eq!(ids(&listed), vec!["snk-002", "snk-001"]);

        let cfg = ProductsConfig {
            sustainable_only: true,
            ..config()
        };
        let listed = scored_listing(&catalog(), &ScoreCalculator::default(), &cfg);
        assert_eq!(ids(&listed), vec!["snk-002"]);
    }
}
