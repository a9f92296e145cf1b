use std::fs;
use std::path::Path;

use aurum_catalog::product::{CatalogError, CatalogItem};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file is not a valid product list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Load the fixed product catalog from a JSON file.
///
/// Called once at startup; the returned list is shared read-only for the
/// life of the process. Order in the file is catalog order. Every item is
/// checked against the model invariants here so the pricing path never has
/// to re-validate.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogItem>, CatalogStoreError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;

    for item in &items {
        item.validate()?;
    }

    info!(
        "Loaded {} products from {}",
        items.len(),
        path.as_ref().display()
    );
    Ok(items)
}
