//! Product data model shared by the scoring and recommendation engine.
//!
//! Products are read-only to the engine: they arrive from a catalog
//! collaborator, get scored on the fly, and leave as [`ScoredProduct`]s that
//! carry the derived EcoScore next to the stored attributes.

mod identifiers;
mod product;

pub use identifiers::ProductId;
pub use product::{Product, ScoredProduct};
