//! Runtime wrappers around static game content oracles.
//!
//! Bundles the loaded catalogs and a dice source into an [`OracleManager`]
//! so the service can build [`game_core::Env`] snapshots on demand. The
//! catalog data is immutable at runtime; dynamic state lives in
//! repositories.

mod dice;

use std::sync::Arc;

use game_content::Campaign;
use game_core::{Bestiary, DiceOracle, Env, GameConfig, ItemCatalog, MapCatalog};

pub use dice::RandDice;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    map: Arc<MapCatalog>,
    items: Arc<ItemCatalog>,
    enemies: Arc<Bestiary>,
    config: Arc<GameConfig>,
    dice: Arc<dyn DiceOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager from individual catalogs.
    pub fn new(
        map: Arc<MapCatalog>,
        items: Arc<ItemCatalog>,
        enemies: Arc<Bestiary>,
        config: Arc<GameConfig>,
        dice: Arc<dyn DiceOracle>,
    ) -> Self {
        Self {
            map,
            items,
            enemies,
            config,
            dice,
        }
    }

    /// Creates an oracle manager from a validated campaign.
    pub fn from_campaign(campaign: Campaign, dice: Arc<dyn DiceOracle>) -> Self {
        Self::new(
            Arc::new(campaign.map),
            Arc::new(campaign.items),
            Arc::new(campaign.enemies),
            Arc::new(campaign.config),
            dice,
        )
    }

    /// Borrows the oracles as an [`Env`] for the rules engine.
    pub fn as_env(&self) -> Env<'_> {
        Env::new(
            self.map.as_ref(),
            self.items.as_ref(),
            self.enemies.as_ref(),
            self.config.as_ref(),
            self.dice.as_ref(),
        )
    }

    /// The game configuration in effect.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The dice source in effect.
    pub fn dice(&self) -> &dyn DiceOracle {
        self.dice.as_ref()
    }
}
