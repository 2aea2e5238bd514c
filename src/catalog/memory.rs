//! In-memory catalog backed by a JSON product list.

use super::CatalogReader;
use crate::error::{EcoTrackError, ErrorContext, ParseErrorKind, Result};
use crate::model::{Product, ProductId};
use indexmap::IndexMap;
use std::path::Path;

/// Catalog holding every product in memory, in insertion order.
///
/// Category queries return products in the order they were loaded, which
/// makes alternative ranking ties deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: IndexMap<ProductId, Product>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from products, rejecting duplicate ids.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of product documents.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(content)?;
        Self::from_products(products)
    }

    /// Load a JSON array of product documents from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EcoTrackError::io(path, e))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        tracing::debug!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Add a product.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(&product.id) {
            return Err(EcoTrackError::parse(
                "building catalog",
                ParseErrorKind::DuplicateId(product.id.to_string()),
            ));
        }
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Look up a single product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products in load order.
    pub fn all(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.products.values() {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Number of products
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogReader for InMemoryCatalog {
    fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id))
            .cloned()
            .collect())
    }

    fn find_by_category(
        &self,
        category: &str,
        exclude_id: &ProductId,
        is_sustainable: bool,
        limit: usize,
    ) -> Result<Vec<Product>> {
        Ok(self
            .products
            .values()
            .filter(|p| {
                p.category == category && p.is_sustainable == is_sustainable && &p.id != exclude_id
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
