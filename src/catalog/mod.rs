//! Product catalog access.
//!
//! The catalog is an external collaborator. This module defines the
//! [`CatalogReader`] capability the engine depends on, plus two
//! implementations: [`InMemoryCatalog`] for JSON catalog files and tests,
//! and [`NoOpCatalog`] for code paths with no data source.
//!
//! # Example
//!
//! ```
//! use ecotrack::catalog::{CatalogReader, InMemoryCatalog};
//! use ecotrack::model::{Product, ProductId};
//!
//! let catalog = InMemoryCatalog::from_products([
//!     Product::new("bev-1", "Cola Cans", "Beverages").with_footprint(45.0, 180.0),
//! ])
//! .unwrap();
//!
//! let found = catalog.find_by_ids(&[ProductId::from("bev-1")]).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

mod memory;
mod stats;
mod traits;

pub use memory::InMemoryCatalog;
pub use stats::LookupStats;
pub use traits::{CatalogReader, NoOpCatalog};
