use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::ItemId;

/// Access to immutable item templates.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition>;
}

/// Broad item behavior on use.
///
/// Consumables convert their stats into ephemeral room bonuses and are
/// destroyed; weapons and armor occupy an equip slot and persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

/// Immutable item template. Bag entries and room placements reference it by
/// id; the template itself is never copied into mutable state.
///
/// For weapons the `hit_points` field is the damage rating dealt on a hit;
/// for consumables it is the ephemeral hit-point bonus granted on use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
    pub category: ItemCategory,
}

/// Item catalog backed by an id-indexed map.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }
}
