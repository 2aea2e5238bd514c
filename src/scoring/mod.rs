//! EcoScore computation.
//!
//! The EcoScore is a 0-100 sustainability rating derived from a product's
//! carbon footprint and packaging waste. Each attribute is normalized against
//! a configured maximum, clamped at zero, and combined with configured
//! weights (carbon counts more than packaging by default).
//!
//! # Usage
//!
//! ```
//! use ecotrack::scoring::{EcoPointsCalculator, ScoreCalculator};
//!
//! let calculator = ScoreCalculator::default();
//! let cans = calculator.compute_eco_score(45.0, 180.0).unwrap();
//! let glass = calculator.compute_eco_score(25.0, 80.0).unwrap();
//! assert_eq!(cans.value(), 59);
//! assert_eq!(glass.value(), 79);
//!
//! let points = EcoPointsCalculator::default().compute_eco_points(cans, glass);
//! assert_eq!(points, 20);
//! ```

mod calculator;
mod points;
mod rating;
mod score;

pub use calculator::{ScoreCalculator, SCORING_ENGINE_VERSION};
pub use points::EcoPointsCalculator;
pub use rating::EcoRating;
pub use score::EcoScore;
