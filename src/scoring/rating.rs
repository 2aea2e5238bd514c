//! Rating bands for EcoScores.

use super::EcoScore;
use serde::{Deserialize, Serialize};

/// Qualitative band of an EcoScore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcoRating {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// Below 40
    Poor,
}

impl EcoRating {
    /// Band a score
    #[must_use]
    pub const fn from_score(score: EcoScore) -> Self {
        match score.value() {
            80..=100 => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Advice shown next to a cart green score in this band
    #[must_use]
    pub const fn cart_tip(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent! Your cart is very eco-friendly. Keep up the sustainable shopping!"
            }
            Self::Good => {
                "Good progress! Consider swapping some items for more sustainable alternatives."
            }
            Self::Fair | Self::Poor => {
                "There's room for improvement. Check out the suggested sustainable alternatives to boost your EcoScore!"
            }
        }
    }
}
