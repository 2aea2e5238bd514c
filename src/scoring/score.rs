//! The EcoScore value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer sustainability score in `[0, 100]`.
///
/// Higher is greener. Values outside the range cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EcoScore(u8);

impl EcoScore {
    /// Lowest possible score
    pub const MIN: Self = Self(0);
    /// Highest possible score
    pub const MAX: Self = Self(100);

    /// Create a score, returning `None` if the value exceeds 100.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Round a raw score half away from zero and clamp it into range.
    ///
    /// Non-finite input maps to [`EcoScore::MIN`].
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::MIN;
        }
        Self(raw.round().clamp(0.0, 100.0) as u8)
    }

    /// The score as an integer
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Signed difference `other - self`.
    #[must_use]
    pub const fn improvement_to(self, other: Self) -> i32 {
        other.0 as i32 - self.0 as i32
    }
}

impl Default for EcoScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for EcoScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("EcoScore must be between 0 and 100, got {value}"))
    }
}

impl From<EcoScore> for u8 {
    fn from(score: EcoScore) -> Self {
        score.0
    }
}
