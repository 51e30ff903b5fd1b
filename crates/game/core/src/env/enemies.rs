use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::EnemyId;

/// Access to immutable enemy templates.
pub trait EnemyOracle: Send + Sync {
    fn template(&self, id: EnemyId) -> Option<&EnemyTemplate>;
}

/// Immutable enemy template. Each id is placed in exactly one room; live
/// hit points are tracked per dungeon run, never on the template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defence: i32,
    pub hit_points: i32,
    pub damage: i32,
}

/// Enemy catalog backed by an id-indexed map.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    enemies: BTreeMap<EnemyId, EnemyTemplate>,
}

impl Bestiary {
    pub fn new(enemies: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        Self {
            enemies: enemies.into_iter().map(|enemy| (enemy.id, enemy)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.enemies.values()
    }
}

impl EnemyOracle for Bestiary {
    fn template(&self, id: EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(&id)
    }
}
