//! Content factory for building catalogs from data files.

use std::path::PathBuf;

use game_core::{Bestiary, GameConfig, ItemCatalog, MapCatalog};

use crate::Campaign;
use crate::loaders::{BestiaryLoader, ConfigLoader, ItemLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── bestiary.ron
/// └── rooms.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the enemy catalog from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        BestiaryLoader::load(&self.data_dir.join("bestiary.ron"))
    }

    /// Load the room graph from `rooms.ron`.
    pub fn load_map(&self) -> LoadResult<MapCatalog> {
        MapLoader::load(&self.data_dir.join("rooms.ron"))
    }

    /// Load and cross-validate the whole campaign.
    pub fn load_campaign(&self) -> LoadResult<Campaign> {
        let campaign = Campaign {
            config: self.load_config()?,
            items: self.load_items()?,
            enemies: self.load_bestiary()?,
            map: self.load_map()?,
        };
        campaign.validate()?;
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use game_core::{ItemId, ItemOracle, MapOracle, RoomId};

    use super::*;

    #[test]
    fn loads_a_campaign_from_a_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "hit_threshold = 15\nstarter_items = [7]\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("items.ron"),
            r#"ItemCatalogFile(items: [
                ItemDefinition(
                    id: 7,
                    name: "Club",
                    description: "A knotted branch.",
                    attack: 1,
                    defence: 0,
                    wisdom: 0,
                    hit_points: 2,
                    category: weapon,
                ),
            ])"#,
        )
        .unwrap();
        fs::write(dir.path().join("bestiary.ron"), "BestiaryFile(enemies: [])").unwrap();
        fs::write(
            dir.path().join("rooms.ron"),
            r#"MapFile(
                starting_room: 1,
                rooms: [
                    RoomTemplate(
                        id: 1,
                        description: "A bare cell.",
                        items: [7],
                    ),
                ],
            )"#,
        )
        .unwrap();

        let campaign = ContentFactory::new(dir.path()).load_campaign().unwrap();

        assert_eq!(campaign.config.hit_threshold, 15);
        assert_eq!(campaign.config.starter_items, vec![ItemId(7)]);
        assert_eq!(campaign.items.definition(ItemId(7)).unwrap().name, "Club");
        assert_eq!(campaign.map.starting_room(), RoomId(1));
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = ContentFactory::new(dir.path()).load_campaign().unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
