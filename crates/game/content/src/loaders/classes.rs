//! Class table loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spirit_core::{ClassInfo, PersonalityType};

use crate::loaders::{LoadResult, read_file};

/// Class table structure for RON files, keyed by four-letter code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTable {
    pub classes: BTreeMap<PersonalityType, ClassInfo>,
}

/// Loader for the personality-to-class table from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class table from a RON file.
    ///
    /// Codes may be omitted; the resolver falls back to the configured
    /// default for them.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<PersonalityType, ClassInfo>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<PersonalityType, ClassInfo>> {
        let table: ClassTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class table RON: {}", e))?;

        Ok(table.classes)
    }
}
