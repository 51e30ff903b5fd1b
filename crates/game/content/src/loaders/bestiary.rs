//! Enemy catalog loader.

use std::path::Path;

use game_core::{Bestiary, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryFile {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy catalogs from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load an enemy catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an enemy catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let file: BestiaryFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        Ok(Bestiary::new(file.enemies))
    }
}
