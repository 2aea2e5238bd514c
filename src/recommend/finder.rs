//! Greener-alternative search.
//!
//! Given a product, query the catalog for sustainable products in the same
//! category and keep only those that score strictly better.

use crate::catalog::CatalogReader;
use crate::config::DEFAULT_CANDIDATE_LIMIT;
use crate::model::{Product, ScoredProduct};
use crate::scoring::ScoreCalculator;
use serde::Serialize;

/// Result of one alternative lookup.
///
/// A lookup never fails the surrounding analysis. Catalog errors and an
/// unscorable source product surface as [`AlternativeLookup::Degraded`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum AlternativeLookup {
    /// Ranked alternatives, best first (possibly empty)
    Found { alternatives: Vec<ScoredProduct> },
    /// The lookup could not be completed
    Degraded { reason: String },
}

impl AlternativeLookup {
    /// Alternatives found, or an empty slice when degraded.
    #[must_use]
    pub fn alternatives(&self) -> &[ScoredProduct] {
        match self {
            Self::Found { alternatives } => alternatives,
            Self::Degraded { .. } => &[],
        }
    }

    /// The best alternative, if any
    #[must_use]
    pub fn best(&self) -> Option<&ScoredProduct> {
        self.alternatives().first()
    }

    /// Whether the lookup failed soft
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Consume into the alternatives list
    #[must_use]
    pub fn into_alternatives(self) -> Vec<ScoredProduct> {
        match self {
            Self::Found { alternatives } => alternatives,
            Self::Degraded { .. } => Vec::new(),
        }
    }
}

/// Finds sustainable, strictly higher-scoring alternatives for a product.
pub struct AlternativeFinder<'a> {
    catalog: &'a dyn CatalogReader,
    calculator: &'a ScoreCalculator,
    candidate_limit: usize,
}

impl<'a> AlternativeFinder<'a> {
    /// Create a finder over a catalog.
    #[must_use]
    pub fn new(
        catalog: &'a dyn CatalogReader,
        calculator: &'a ScoreCalculator,
        candidate_limit: usize,
    ) -> Self {
        Self {
            catalog,
            calculator,
            candidate_limit,
        }
    }

    /// Create a finder with the default candidate limit.
    #[must_use]
    pub fn with_defaults(catalog: &'a dyn CatalogReader, calculator: &'a ScoreCalculator) -> Self {
        Self::new(catalog, calculator, DEFAULT_CANDIDATE_LIMIT)
    }

    /// Maximum number of candidates requested and returned
    #[must_use]
    pub const fn candidate_limit(&self) -> usize {
        self.candidate_limit
    }

    /// Find alternatives for `product`, best first.
    ///
    /// Only candidates the catalog returns are considered: the catalog applies
    /// `candidate_limit` before any score filtering, so a category with many
    /// weaker sustainable products can hide a stronger one.
    pub fn find_alternatives(&self, product: &Product) -> AlternativeLookup {
        let source_score = match self.calculator.score_product(product) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("Cannot score product {}: {}", product.id, e);
                return AlternativeLookup::Degraded {
                    reason: e.to_string(),
                };
            }
        };

        let candidates = match self.catalog.find_by_category(
            &product.category,
            &product.id,
            true,
            self.candidate_limit,
        ) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(
                    "Alternative lookup for {} failed on {} catalog: {}",
                    product.id,
                    self.catalog.name(),
                    e
                );
                return AlternativeLookup::Degraded {
                    reason: e.to_string(),
                };
            }
        };

        let mut alternatives: Vec<ScoredProduct> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != product.id)
            .filter_map(|candidate| match self.calculator.score(candidate) {
                Ok(scored) => Some(scored),
                Err(e) => {
                    tracing::warn!("Dropping unscorable alternative for {}: {}", product.id, e);
                    None
                }
            })
            .filter(|scored| scored.eco_score > source_score)
            .collect();

        // Vec::sort_by is stable, so ties keep catalog order
        alternatives.sort_by(|a, b| b.eco_score.cmp(&a.eco_score));
        alternatives.truncate(self.candidate_limit);

        tracing::debug!(
            "Found {} alternatives for {} ({})",
            alternatives.len(),
            product.id,
            product.category
        );

        AlternativeLookup::Found { alternatives }
    }
}
