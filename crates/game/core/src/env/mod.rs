//! Traits describing read-only world data and the dice source.
//!
//! Oracles expose the static catalogs (room graph, item templates, enemy
//! templates, rules configuration) behind traits so the engine never couples
//! to a concrete store. The [`Env`] aggregate bundles them together with the
//! [`DiceOracle`] so the engine can reach everything it needs through one
//! argument.
mod dice;
mod enemies;
mod error;
mod items;
mod map;

pub use dice::{DiceOracle, ScriptedDice};
pub use enemies::{Bestiary, EnemyOracle, EnemyTemplate};
pub use error::OracleError;
pub use items::{ItemCatalog, ItemCategory, ItemDefinition, ItemOracle};
pub use map::{GateDefinition, MapCatalog, MapOracle, RoomTemplate};

use crate::config::GameConfig;

/// Access to the rules configuration.
pub trait RulesOracle: Send + Sync {
    fn rules(&self) -> &GameConfig;
}

impl RulesOracle for GameConfig {
    fn rules(&self) -> &GameConfig {
        self
    }
}

/// Aggregates the read-only oracles and the dice source required by the
/// engine. Borrowed per action; the engine holds it only for the duration
/// of one state transition.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub map: &'a dyn MapOracle,
    pub items: &'a dyn ItemOracle,
    pub enemies: &'a dyn EnemyOracle,
    pub rules: &'a dyn RulesOracle,
    pub dice: &'a dyn DiceOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        map: &'a dyn MapOracle,
        items: &'a dyn ItemOracle,
        enemies: &'a dyn EnemyOracle,
        rules: &'a dyn RulesOracle,
        dice: &'a dyn DiceOracle,
    ) -> Self {
        Self {
            map,
            items,
            enemies,
            rules,
            dice,
        }
    }

    pub fn config(&self) -> &GameConfig {
        self.rules.rules()
    }
}
