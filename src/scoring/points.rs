//! EcoPoints awarded for swapping to a greener product.

use super::EcoScore;
use crate::config::DEFAULT_MIN_ECO_POINTS;

/// Awards one point per EcoScore of improvement, with a guaranteed minimum.
///
/// The minimum is a reward floor, not a measurement: a swap that barely
/// improves (or, with a curated link, worsens) the score still earns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcoPointsCalculator {
    min_points: u32,
}

impl EcoPointsCalculator {
    /// Create a calculator with the given minimum award
    #[must_use]
    pub const fn new(min_points: u32) -> Self {
        Self { min_points }
    }

    /// The minimum award
    #[must_use]
    pub const fn min_points(&self) -> u32 {
        self.min_points
    }

    /// `max(min_points, alternative - original)`.
    #[must_use]
    pub fn compute_eco_points(&self, original: EcoScore, alternative: EcoScore) -> u32 {
        let delta = i64::from(original.improvement_to(alternative));
        delta.max(i64::from(self.min_points)) as u32
    }
}

impl Default for EcoPointsCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ECO_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(original: u8, alternative: u8) -> u32 {
        EcoPointsCalculator::default().compute_eco_points(
            EcoScore::new(original).unwrap(),
            EcoScore::new(alternative).unwrap(),
        )
    }

    #[test]
    fn test_small_delta_is_floored() {
        assert_eq!(points(50, 52), 5);
        assert_eq!(points(50, 55), 5);
    }

    #[test]
    fn test_large_delta_awarded_in_full() {
        assert_eq!(points(50, 70), 20);
        assert_eq!(points(0, 100), 100);
    }

    #[test]
    fn test_non_positive_delta_gets_minimum() {
        assert_eq!(points(60, 60), 5);
        assert_eq!(points(80, 20), 5);
    }

    #[test]
    fn test_custom_minimum() {
        let calculator = EcoPointsCalculator::new(0);
        assert_eq!(
            calculator.compute_eco_points(EcoScore::new(70).unwrap(), EcoScore::new(60).unwrap()),
            0
        );
    }
}
