//! Catalog loading stage.

use super::PipelineError;
use crate::catalog::InMemoryCatalog;
use std::path::Path;

/// Load a JSON catalog file for a CLI command.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, PipelineError> {
    let catalog =
        InMemoryCatalog::from_json_file(path).map_err(|e| PipelineError::CatalogLoadFailed {
            path: path.display().to_string(),
            source: e.into(),
        })?;

    if catalog.is_empty() {
        tracing::warn!("Catalog {} contains no products", path.display());
    } else {
        tracing::info!(
            "Loaded {} products in {} categories from {}",
            catalog.len(),
            catalog.categories().len(),
            path.display()
        );
    }

    Ok(catalog)
}
