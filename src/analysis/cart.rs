//! Cart analysis.
//!
//! [`CartAnalyzer`] resolves a cart's product ids through the catalog,
//! scores every product, searches greener alternatives for items that are
//! not flagged sustainable, and aggregates the result into a
//! [`CartAnalysisReport`].

use super::swap::{SwapEvaluator, SwapOutcome};
use crate::catalog::{CatalogReader, LookupStats};
use crate::config::{AnalysisConfig, Validatable};
use crate::error::{EcoTrackError, ErrorContext, OptionContext, Result};
use crate::model::{Product, ProductId, ScoredProduct};
use crate::recommend::{AlternativeFinder, AlternativeLookup};
use crate::scoring::{EcoPointsCalculator, EcoRating, EcoScore, ScoreCalculator};
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Request
// ============================================================================

/// A cart analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    /// Ids of the products in the cart; `None` is a malformed request
    #[serde(default)]
    pub product_ids: Option<Vec<ProductId>>,
}

impl CartRequest {
    /// Request analysis of the given ids.
    pub fn new(ids: impl IntoIterator<Item = impl Into<ProductId>>) -> Self {
        Self {
            product_ids: Some(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a `{"productIds": [...]}` request body.
    ///
    /// A body that is not JSON, or a missing or non-array `productIds`, is a
    /// validation error rather than a parse error, so callers can report it
    /// as a bad request.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            EcoTrackError::validation(format!("request body is not valid JSON: {e}"))
        })?;
        let ids = value
            .get("productIds")
            .and_then(serde_json::Value::as_array)
            .context_none("productIds array is required")?;

        let product_ids = ids
            .iter()
            .map(|id| {
                id.as_str()
                    .map(ProductId::from)
                    .with_context_none(|| format!("productIds must contain strings, got {id}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            product_ids: Some(product_ids),
        })
    }
}

// ============================================================================
// Report
// ============================================================================

/// Greener alternatives for one cart item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The non-sustainable cart item
    pub original_product: ScoredProduct,
    /// Strictly better alternatives, best first
    pub alternatives: Vec<ScoredProduct>,
    /// Points for swapping to the best alternative
    pub potential_eco_points: u32,
}

impl Suggestion {
    /// The highest-scoring alternative
    #[must_use]
    pub fn best_alternative(&self) -> Option<&ScoredProduct> {
        self.alternatives.first()
    }
}

/// A cart item excluded because it could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedProduct {
    pub product_id: ProductId,
    pub reason: String,
}

/// A cart item whose alternative lookup failed soft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradedLookup {
    pub product_id: ProductId,
    pub reason: String,
}

/// Aggregate sustainability view of one cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAnalysisReport {
    /// Products that were resolved and scored
    pub total_items: usize,
    /// Mean EcoScore of the scored products (0 for an empty cart)
    pub cart_green_score: EcoScore,
    /// Same value as `cart_green_score`
    pub average_eco_score: EcoScore,
    /// Band of the cart green score
    pub rating: EcoRating,
    /// Sum of carbon footprints (kg CO2e)
    pub total_carbon_footprint: f64,
    /// Sum of packaging waste (grams)
    pub total_packaging_waste: f64,
    /// Scored products in request order
    pub products: Vec<ScoredProduct>,
    /// Greener alternatives, in cart order
    pub suggestions: Vec<Suggestion>,
    /// Requested ids the catalog did not return
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_ids: Vec<ProductId>,
    /// Products excluded from every aggregate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedProduct>,
    /// Alternative lookups that failed soft
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded_lookups: Vec<DegradedLookup>,
    /// Catalog work counters
    pub lookup_stats: LookupStats,
}

impl CartAnalysisReport {
    /// The report for a cart with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_items: 0,
            cart_green_score: EcoScore::MIN,
            average_eco_score: EcoScore::MIN,
            rating: EcoRating::from_score(EcoScore::MIN),
            total_carbon_footprint: 0.0,
            total_packaging_waste: 0.0,
            products: Vec::new(),
            suggestions: Vec::new(),
            unresolved_ids: Vec::new(),
            skipped: Vec::new(),
            degraded_lookups: Vec::new(),
            lookup_stats: LookupStats::new(),
        }
    }

    /// Points available if every suggestion were taken.
    #[must_use]
    pub fn total_potential_eco_points(&self) -> u32 {
        self.suggestions.iter().map(|s| s.potential_eco_points).sum()
    }

    /// Whether any part of the analysis was incomplete
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.unresolved_ids.is_empty() || !self.skipped.is_empty() || !self.degraded_lookups.is_empty()
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Runs cart analyses and swaps against a catalog.
pub struct CartAnalyzer<'a> {
    catalog: &'a dyn CatalogReader,
    calculator: ScoreCalculator,
    points: EcoPointsCalculator,
    candidate_limit: usize,
    parallel_lookups: bool,
}

impl<'a> CartAnalyzer<'a> {
    /// Create an analyzer over a catalog.
    ///
    /// The config is not validated here; see [`Self::try_new`].
    #[must_use]
    pub fn new(catalog: &'a dyn CatalogReader, config: &AnalysisConfig) -> Self {
        Self {
            catalog,
            calculator: ScoreCalculator::new(config.scoring.clone()),
            points: EcoPointsCalculator::new(config.recommendation.min_eco_points),
            candidate_limit: config.recommendation.candidate_limit,
            parallel_lookups: config.recommendation.parallel_lookups,
        }
    }

    /// Create an analyzer, rejecting an invalid config with
    /// [`EcoTrackError::Config`].
    pub fn try_new(catalog: &'a dyn CatalogReader, config: &AnalysisConfig) -> Result<Self> {
        config.check()?;
        Ok(Self::new(catalog, config))
    }

    /// The calculator used for every score in this analyzer
    #[must_use]
    pub const fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Analyze a cart request.
    ///
    /// Duplicate ids count once. Ids the catalog does not know are excluded
    /// and listed in `unresolved_ids`. The only hard failures are a missing
    /// `productIds` and a catalog error while resolving the cart.
    pub fn analyze_cart(&self, request: &CartRequest) -> Result<CartAnalysisReport> {
        let requested = request
            .product_ids
            .as_ref()
            .context_none("productIds array is required")?;

        let ids: Vec<ProductId> = requested
            .iter()
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        if ids.is_empty() {
            return Ok(CartAnalysisReport::empty());
        }

        let mut resolved: IndexMap<ProductId, Product> = self
            .catalog
            .find_by_ids(&ids)
            .context("resolving cart products")?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let mut products = Vec::with_capacity(ids.len());
        let mut unresolved = Vec::new();
        for id in ids {
            match resolved.swap_remove(&id) {
                Some(product) => products.push(product),
                None => {
                    tracing::warn!("Product {} not found in {} catalog", id, self.catalog.name());
                    unresolved.push(id);
                }
            }
        }

        let mut report = self.analyze_products(&products);
        report.lookup_stats.products_unresolved = unresolved.len();
        report.unresolved_ids = unresolved;
        report.lookup_stats.log_summary();

        Ok(report)
    }

    /// Analyze already-resolved products, in the given order.
    ///
    /// Never fails: unscorable products are skipped and failed lookups are
    /// recorded as degraded.
    pub fn analyze_products(&self, products: &[Product]) -> CartAnalysisReport {
        let mut report = CartAnalysisReport::empty();
        report.lookup_stats.products_resolved = products.len();

        for product in products {
            match self.calculator.score(product.clone()) {
                Ok(scored) => report.products.push(scored),
                Err(e) => {
                    tracing::warn!("Skipping product {}: {}", product.id, e);
                    report.skipped.push(SkippedProduct {
                        product_id: product.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        report.lookup_stats.products_skipped = report.skipped.len();

        let candidates: Vec<&ScoredProduct> = report
            .products
            .iter()
            .filter(|p| !p.product.is_sustainable)
            .collect();

        let finder = AlternativeFinder::new(self.catalog, &self.calculator, self.candidate_limit);
        let lookups: Vec<AlternativeLookup> = if self.parallel_lookups {
            candidates
                .par_iter()
                .map(|p| finder.find_alternatives(&p.product))
                .collect()
        } else {
            candidates
                .iter()
                .map(|p| finder.find_alternatives(&p.product))
                .collect()
        };
        report.lookup_stats.lookups_performed = lookups.len();

        let mut suggestions = Vec::new();
        let mut degraded = Vec::new();
        for (original, lookup) in candidates.into_iter().zip(lookups) {
            match lookup {
                AlternativeLookup::Degraded { reason } => degraded.push(DegradedLookup {
                    product_id: original.id().clone(),
                    reason,
                }),
                AlternativeLookup::Found { alternatives } => {
                    let Some(best) = alternatives.first() else {
                        continue;
                    };
                    let potential_eco_points = self
                        .points
                        .compute_eco_points(original.eco_score, best.eco_score);
                    report.lookup_stats.alternatives_found += alternatives.len();
                    suggestions.push(Suggestion {
                        original_product: original.clone(),
                        alternatives,
                        potential_eco_points,
                    });
                }
            }
        }
        report.lookup_stats.lookups_degraded = degraded.len();
        report.lookup_stats.suggestions = suggestions.len();
        report.suggestions = suggestions;
        report.degraded_lookups = degraded;

        report.total_items = report.products.len();
        if report.total_items > 0 {
            let sum: u32 = report
                .products
                .iter()
                .map(|p| u32::from(p.eco_score.value()))
                .sum();
            let mean = EcoScore::from_raw(f64::from(sum) / report.total_items as f64);
            report.cart_green_score = mean;
            report.average_eco_score = mean;
            report.rating = EcoRating::from_score(mean);
        }
        report.total_carbon_footprint = report
            .products
            .iter()
            .map(|p| p.product.carbon_footprint)
            .sum();
        report.total_packaging_waste = report
            .products
            .iter()
            .map(|p| p.product.packaging_waste)
            .sum();

        report
    }

    /// Swap `original_id` for `alternative_id`.
    ///
    /// Self-swaps are rejected before the catalog is touched. An id that does
    /// not resolve yields [`EcoTrackError::NotFound`].
    pub fn swap_product(
        &self,
        original_id: &ProductId,
        alternative_id: &ProductId,
    ) -> Result<SwapOutcome> {
        if original_id == alternative_id {
            return Err(EcoTrackError::validation(format!(
                "cannot swap product {original_id} for itself"
            )));
        }

        let found = self
            .catalog
            .find_by_ids(&[original_id.clone(), alternative_id.clone()])
            .context("resolving swap products")?;

        let lookup = |id: &ProductId| {
            found
                .iter()
                .find(|p| &p.id == id)
                .ok_or_else(|| EcoTrackError::not_found(id.as_str()))
        };
        let original = lookup(original_id)?;
        let alternative = lookup(alternative_id)?;

        SwapEvaluator::new(&self.calculator, self.points).evaluate(original, alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_products([
            Product::new("bev-001", "Cola Cans", "Beverages").with_footprint(45.0, 180.0),
            Product::new("bev-002", "Eco Cola", "Beverages")
                .with_footprint(25.0, 80.0)
                .sustainable(true),
            Product::new("snk-002", "Veggie Chips", "Snacks")
                .with_footprint(18.0, 30.0)
                .sustainable(true),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_product_ids_is_validation_error() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let result = analyzer.analyze_cart(&CartRequest::default());
        assert!(matches!(result, Err(EcoTrackError::Validation(_))));
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let catalog = catalog();
        let mut config = AnalysisConfig::default();
        config.scoring.max_carbon_footprint = 0.0;
        assert!(matches!(
            CartAnalyzer::try_new(&catalog, &config),
            Err(EcoTrackError::Config(_))
        ));

        config = AnalysisConfig::default();
        config.recommendation.candidate_limit = 0;
        assert!(CartAnalyzer::try_new(&catalog, &config).is_err());

        assert!(CartAnalyzer::try_new(&catalog, &AnalysisConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_cart_is_zeroed() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let report = analyzer
            .analyze_cart(&CartRequest::new(Vec::<ProductId>::new()))
            .unwrap();
        assert_eq!(report.total_items, 0);
        assert_eq!(report.cart_green_score, EcoScore::MIN);
        assert_eq!(report.rating, EcoRating::Poor);
        assert!(report.suggestions.is_empty());
        assert!(report.total_carbon_footprint.abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_product_cart() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let report = analyzer.analyze_cart(&CartRequest::new(["bev-001"])).unwrap();

        assert_eq!(report.total_items, 1);
        assert_eq!(report.cart_green_score.value(), 59);
        assert_eq!(report.average_eco_score, report.cart_green_score);
        assert_eq!(report.suggestions.len(), 1);
        let suggestion = &report.suggestions[0];
        assert_eq!(suggestion.best_alternative().unwrap().id().as_str(), "bev-002");
        assert_eq!(suggestion.potential_eco_points, 20);
    }

    #[test]
    fn test_duplicates_collapse_and_unknown_ids_are_listed() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let report = analyzer
            .analyze_cart(&CartRequest::new(["snk-002", "ghost", "snk-002"]))
            .unwrap();

        assert_eq!(report.total_items, 1);
        assert_eq!(report.unresolved_ids, vec![ProductId::from("ghost")]);
        assert_eq!(report.lookup_stats.products_unresolved, 1);
        assert!(report.is_partial());
    }

    #[test]
    fn test_sustainable_items_get_no_suggestions() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let report = analyzer
            .analyze_cart(&CartRequest::new(["bev-002", "snk-002"]))
            .unwrap();
        assert!(report.suggestions.is_empty());
        assert_eq!(report.lookup_stats.lookups_performed, 0);
    }

    #[test]
    fn test_unscorable_product_is_skipped() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let products = vec![
            Product::new("bad", "Bad", "Snacks").with_footprint(-1.0, 0.0),
            Product::new("ok", "Ok", "Snacks").with_footprint(0.0, 0.0),
        ];
        let report = analyzer.analyze_products(&products);
        assert_eq!(report.total_items, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].product_id, ProductId::from("bad"));
        assert_eq!(report.cart_green_score, EcoScore::MAX);
    }

    #[test]
    fn test_request_from_json() {
        let request = CartRequest::from_json(r#"{"productIds": ["a", "b"]}"#).unwrap();
        assert_eq!(request, CartRequest::new(["a", "b"]));

        for body in [
            r#"{}"#,
            r#"{"productIds": "a"}"#,
            r#"{"productIds": [1]}"#,
            r#"{"productIds": ["a""#,
            "",
        ] {
            assert!(
                matches!(CartRequest::from_json(body), Err(EcoTrackError::Validation(_))),
                "expected validation error for {body}"
            );
        }
    }

    #[test]
    fn test_swap_product() {
        let catalog = catalog();
        let analyzer = CartAnalyzer::new(&catalog, &AnalysisConfig::default());
        let outcome = analyzer
            .swap_product(&ProductId::from("bev-001"), &ProductId::from("bev-002"))
            .unwrap();
        assert_eq!(outcome.eco_points_earned, 20);

        let missing =
            analyzer.swap_product(&ProductId::from("bev-001"), &ProductId::from("nope"));
        match missing {
            Err(EcoTrackError::NotFound { id }) => assert_eq!(id, "nope"),
            other => panic!("expected NotFound, got {other:?}"),
        }

        let same = analyzer.swap_product(&ProductId::from("bev-001"), &ProductId::from("bev-001"));
        assert!(matches!(same, Err(EcoTrackError::Validation(_))));
    }
}
