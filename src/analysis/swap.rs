//! Evaluation of a confirmed product swap.

use crate::error::{EcoTrackError, Result};
use crate::model::{Product, ScoredProduct};
use crate::scoring::{EcoPointsCalculator, ScoreCalculator};
use serde::{Deserialize, Serialize};

/// Result of swapping one product for another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOutcome {
    /// Always `true` for a completed swap
    pub swapped: bool,
    /// Points awarded (never below the configured minimum)
    pub eco_points_earned: u32,
    /// Signed EcoScore change, `new - original`
    pub eco_score_improvement: i32,
    /// Product being replaced
    pub original_product: ScoredProduct,
    /// Replacement product
    pub new_product: ScoredProduct,
}

/// Scores a pair of products and awards EcoPoints for the swap.
///
/// The pair is not required to share a category or to improve the score:
/// a swap the user confirms always earns at least the minimum award.
#[derive(Debug, Clone)]
pub struct SwapEvaluator<'a> {
    calculator: &'a ScoreCalculator,
    points: EcoPointsCalculator,
}

impl<'a> SwapEvaluator<'a> {
    /// Create an evaluator
    #[must_use]
    pub const fn new(calculator: &'a ScoreCalculator, points: EcoPointsCalculator) -> Self {
        Self { calculator, points }
    }

    /// Evaluate swapping `original` for `alternative`.
    ///
    /// Fails with [`EcoTrackError::Validation`] for a self-swap and with
    /// [`EcoTrackError::InvalidInput`] if either product cannot be scored.
    pub fn evaluate(&self, original: &Product, alternative: &Product) -> Result<SwapOutcome> {
        if original.id == alternative.id {
            return Err(EcoTrackError::validation(format!(
                "cannot swap product {} for itself",
                original.id
            )));
        }

        let original_product = self.calculator.score(original.clone())?;
        let new_product = self.calculator.score(alternative.clone())?;

        let eco_points_earned = self
            .points
            .compute_eco_points(original_product.eco_score, new_product.eco_score);
        let eco_score_improvement = original_product
            .eco_score
            .improvement_to(new_product.eco_score);

        tracing::debug!(
            "Swap {} -> {}: {:+} EcoScore, {} EcoPoints",
            original.id,
            alternative.id,
            eco_score_improvement,
            eco_points_earned
        );

        Ok(SwapOutcome {
            swapped: true,
            eco_points_earned,
            eco_score_improvement,
            original_product,
            new_product,
        })
    }
}
