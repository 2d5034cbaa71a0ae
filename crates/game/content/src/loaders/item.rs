//! Item catalog loader.

use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`ItemCatalog`]
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| e.context(format!("in item catalog {}", path.display())))
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}
