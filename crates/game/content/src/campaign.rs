//! Bundled campaign content.

use std::collections::BTreeSet;

use anyhow::{anyhow, bail};
use game_core::{
    Bestiary, EnemyOracle, GameConfig, ItemCatalog, ItemOracle, MapCatalog, MapOracle,
};

use crate::loaders::{BestiaryLoader, ConfigLoader, ItemLoader, LoadResult, MapLoader};

/// A complete, cross-validated content set: configuration plus the three
/// catalogs the engine's oracles are built from.
#[derive(Clone, Debug)]
pub struct Campaign {
    pub config: GameConfig,
    pub items: ItemCatalog,
    pub enemies: Bestiary,
    pub map: MapCatalog,
}

impl Campaign {
    /// The campaign compiled into the crate from `data/`.
    pub fn builtin() -> LoadResult<Self> {
        let campaign = Self {
            config: ConfigLoader::parse(include_str!("../data/config.toml"))?,
            items: ItemLoader::parse(include_str!("../data/items.ron"))?,
            enemies: BestiaryLoader::parse(include_str!("../data/bestiary.ron"))?,
            map: MapLoader::parse(include_str!("../data/rooms.ron"))?,
        };
        campaign.validate()?;
        Ok(campaign)
    }

    /// Check cross-references between the catalogs.
    ///
    /// Every item, enemy, and gate destination a room names must exist, the
    /// starting room must exist, starter items must exist, and each enemy
    /// and gate id may be placed at most once across the map.
    pub fn validate(&self) -> LoadResult<()> {
        self.map
            .room(self.map.starting_room())
            .ok_or_else(|| anyhow!("starting room {} is not defined", self.map.starting_room()))?;

        for id in &self.config.starter_items {
            if self.items.definition(*id).is_none() {
                bail!("starter item {id} is not in the item catalog");
            }
        }

        let mut placed_enemies = BTreeSet::new();
        let mut placed_gates = BTreeSet::new();
        for room in self.map.iter() {
            for id in room.items.iter().chain(&room.hidden_items) {
                if self.items.definition(*id).is_none() {
                    bail!("room {} places unknown item {id}", room.id);
                }
            }
            for id in &room.enemies {
                if self.enemies.template(*id).is_none() {
                    bail!("room {} places unknown enemy {id}", room.id);
                }
                if !placed_enemies.insert(*id) {
                    bail!("enemy {id} is placed in more than one room");
                }
            }
            for gate in room.gates.iter().chain(&room.hidden_gates) {
                if self.map.room(gate.room).is_none() {
                    bail!("gate {} in room {} leads to unknown room {}", gate.id, room.id, gate.room);
                }
                if !placed_gates.insert(gate.id) {
                    bail!("gate {} is placed in more than one room", gate.id);
                }
            }
        }

        Ok(())
    }
}
