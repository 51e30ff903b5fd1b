//! Room graph loader.

use std::path::Path;

use game_core::{MapCatalog, RoomId, RoomTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Room graph structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFile {
    pub starting_room: RoomId,
    pub rooms: Vec<RoomTemplate>,
}

/// Loader for room graphs from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a room graph from a RON file.
    pub fn load(path: &Path) -> LoadResult<MapCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a room graph from RON text.
    pub fn parse(content: &str) -> LoadResult<MapCatalog> {
        let file: MapFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        Ok(MapCatalog::new(file.starting_room, file.rooms))
    }
}
