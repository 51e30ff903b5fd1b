//! View objects returned across the request/response boundary.
//!
//! Views are plain serializable data: effective stats already layered,
//! references resolved against the catalogs, nothing borrowed from engine
//! state. Field names match the wire payloads of the service.

use serde::Serialize;

use crate::character::CharacterState;
use crate::env::{EnemyTemplate, GateDefinition, ItemCategory, ItemDefinition};
use crate::stats::{EffectiveStats, RoomBonuses};
use crate::{EnemyId, GateId, ItemId, RoomId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
    pub category: ItemCategory,
}

impl From<&ItemDefinition> for ItemView {
    fn from(item: &ItemDefinition) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            attack: item.attack,
            defence: item.defence,
            wisdom: item.wisdom,
            hit_points: item.hit_points,
            category: item.category,
        }
    }
}

/// Enemy as currently standing in the room: template data with live
/// hit points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub name: String,
    pub description: String,
    pub attack: i32,
    pub defence: i32,
    pub hit_points: i32,
    pub damage: i32,
}

impl EnemyView {
    pub fn standing(template: &EnemyTemplate, hit_points: i32) -> Self {
        Self {
            id: template.id,
            name: template.name.clone(),
            description: template.description.clone(),
            attack: template.attack,
            defence: template.defence,
            hit_points,
            damage: template.damage,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GateView {
    pub id: GateId,
    pub room: RoomId,
}

impl From<GateDefinition> for GateView {
    fn from(gate: GateDefinition) -> Self {
        Self {
            id: gate.id,
            room: gate.room,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub id: RoomId,
    pub description: String,
    pub items: Vec<ItemView>,
    pub enemies: Vec<EnemyView>,
    pub gates: Vec<GateView>,
}

/// Character with effective stats layered and the room bonuses broken out,
/// matching the dungeon status payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    pub name: String,
    pub description: String,
    pub strength: i32,
    pub intellect: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
    pub room_attack_bonus: i32,
    pub room_defence_bonus: i32,
    pub room_wisdom_bonus: i32,
    pub room_hit_points_bonus: i32,
    pub equipped_attack_item: Option<ItemId>,
    pub equipped_defence_item: Option<ItemId>,
    pub bag: Vec<ItemView>,
}

impl CharacterView {
    pub(crate) fn layered(
        character: &CharacterState,
        stats: EffectiveStats,
        bonuses: RoomBonuses,
        bag: Vec<ItemView>,
    ) -> Self {
        Self {
            name: character.name.clone(),
            description: character.description.clone(),
            strength: character.abilities.strength,
            intellect: character.abilities.intellect,
            dexterity: character.abilities.dexterity,
            constitution: character.abilities.constitution,
            attack: stats.attack,
            defence: stats.defence,
            wisdom: stats.wisdom,
            hit_points: stats.hit_points,
            room_attack_bonus: bonuses.attack,
            room_defence_bonus: bonuses.defence,
            room_wisdom_bonus: bonuses.wisdom,
            room_hit_points_bonus: bonuses.hit_points,
            equipped_attack_item: character.equipped_attack_item,
            equipped_defence_item: character.equipped_defence_item,
            bag,
        }
    }
}

/// Full live-run view: character effective stats plus current room contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DungeonView {
    pub character: CharacterView,
    pub room: RoomView,
}
