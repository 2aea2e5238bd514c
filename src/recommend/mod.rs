//! Recommendation of greener alternatives.
//!
//! [`AlternativeFinder`] wraps a [`CatalogReader`](crate::catalog::CatalogReader)
//! and a [`ScoreCalculator`](crate::scoring::ScoreCalculator). Lookups fail
//! soft: see [`AlternativeLookup`].

mod finder;

pub use finder::{AlternativeFinder, AlternativeLookup};
