//! Deterministic dungeon rules shared across the service layer and tools.
//!
//! `game-core` defines the canonical rules (ability rolls, character
//! creation, the dungeon state machine, combat and search resolution) and
//! exposes pure APIs over them. All state mutation flows through
//! [`dungeon::DungeonEngine`]; static content is reached through the oracle
//! traits in [`env`], and every die roll comes from the injectable
//! [`env::DiceOracle`].
pub mod character;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod env;
pub mod error;
pub mod rolls;
pub mod stats;

pub use character::{Abilities, CharacterState, CreationError, NewCharacter};
pub use combat::{FightKind, FightLogEntry};
pub use config::GameConfig;
pub use dungeon::{
    DungeonEngine, DungeonError, DungeonState, SearchFind, SearchOutcome,
    view::{CharacterView, DungeonView, EnemyView, GateView, ItemView, RoomView},
};
pub use env::{
    Bestiary, DiceOracle, EnemyOracle, EnemyTemplate, Env, GateDefinition, ItemCatalog,
    ItemCategory, ItemDefinition, ItemOracle, MapCatalog, MapOracle, OracleError, RoomTemplate,
    RulesOracle, ScriptedDice,
};
pub use error::{ErrorKind, RulesError};
pub use rolls::{AbilityRoll, RollId, RollSet, RollsError};
pub use stats::{BaseStats, EffectiveStats, RoomBonuses};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of an item template in the catalog.
    ItemId
);
id_newtype!(
    /// Identifier of an enemy placement in the bestiary.
    EnemyId
);
id_newtype!(
    /// Identifier of a gate edge in the room graph.
    GateId
);
id_newtype!(
    /// Identifier of a room template in the map.
    RoomId
);
