//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spirit_core::ItemDefinition;

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemDefinitions.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use spirit_core::ItemEffect;

    use super::*;

    #[test]
    fn description_is_optional() {
        let items = ItemLoader::parse(
            r#"(items: [(id: "ether", name: "Ether", effect: RestoreMp(20), quantity: 2)])"#,
        )
        .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].effect, ItemEffect::RestoreMp(20));
        assert_eq!(items[0].quantity, 2);
        assert!(items[0].description.is_empty());
    }
}
