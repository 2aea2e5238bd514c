//! Catalog capability traits.
//!
//! The engine never talks to a database directly. Anything that can answer
//! the two queries below can back an analysis: a document store, an HTTP
//! client, or the in-memory catalog used by the CLI and tests.

use crate::error::Result;
use crate::model::{Product, ProductId};

/// Read-only access to the product catalog.
///
/// Implementations report failures as [`EcoTrackError::Catalog`]. Callers
/// decide whether a failure is fatal: resolving a cart is, looking up
/// alternatives is not.
///
/// # Example
///
/// ```ignore
/// use ecotrack::catalog::{CatalogReader, InMemoryCatalog, NoOpCatalog};
///
/// let catalog: Box<dyn CatalogReader> = match catalog_path {
///     Some(path) => Box::new(InMemoryCatalog::from_json_file(path)?),
///     None => Box::new(NoOpCatalog),
/// };
/// ```
///
/// [`EcoTrackError::Catalog`]: crate::error::EcoTrackError::Catalog
pub trait CatalogReader: Send + Sync {
    /// Fetch the products with the given ids.
    ///
    /// Ids that do not exist are simply absent from the result; the order of
    /// the result is unspecified.
    fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>>;

    /// Fetch up to `limit` products in `category` with the given
    /// sustainability flag, excluding `exclude_id`.
    fn find_by_category(
        &self,
        category: &str,
        exclude_id: &ProductId,
        is_sustainable: bool,
        limit: usize,
    ) -> Result<Vec<Product>>;

    /// Get the name of this catalog backend (e.g., "memory").
    fn name(&self) -> &'static str;
}

/// A catalog that contains nothing.
///
/// Null Object for code paths that need a `CatalogReader` but have no data
/// source: every query succeeds with an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCatalog;

impl NoOpCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogReader for NoOpCatalog {
    fn find_by_ids(&self, _ids: &[ProductId]) -> Result<Vec<Product>> {
        Ok(Vec::new())
    }

    fn find_by_category(
        &self,
        _category: &str,
        _exclude_id: &ProductId,
        _is_sustainable: bool,
        _limit: usize,
    ) -> Result<Vec<Product>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "NoOp"
    }
}
