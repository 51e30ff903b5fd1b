//! Stat layering.
//!
//! Effective stat = base stat + equip modifiers + ephemeral room bonus.
//! Equip modifiers persist across rooms; room bonuses are zeroed on every
//! gate traversal.

use serde::{Deserialize, Serialize};

use crate::env::ItemDefinition;

/// Base stats derived once at creation. `hit_points` is the character's
/// current total and is the only base stat mutated after creation (combat
/// damage and search costs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
}

/// Ephemeral per-room bonuses granted by consumables, reset to zero on
/// every room transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBonuses {
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
}

impl RoomBonuses {
    /// Fold a consumable's stats into the bonuses.
    pub fn absorb(&mut self, item: &ItemDefinition) {
        self.attack += item.attack;
        self.defence += item.defence;
        self.wisdom += item.wisdom;
        self.hit_points += item.hit_points;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Fully layered stats as seen by combat, search, and status views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveStats {
    pub attack: i32,
    pub defence: i32,
    pub wisdom: i32,
    pub hit_points: i32,
    /// Damage dealt on a hit: the equipped weapon's damage rating, or the
    /// configured default when fighting bare-handed.
    pub damage: i32,
}

impl EffectiveStats {
    /// Layer equips and room bonuses over the base stats.
    ///
    /// Equipped items contribute their attack/defence/wisdom values; an
    /// equipped weapon's `hit_points` field is its damage rating and never a
    /// hit-point bonus.
    pub fn layered(
        base: BaseStats,
        equips: [Option<&ItemDefinition>; 2],
        bonuses: RoomBonuses,
        default_damage: i32,
    ) -> Self {
        let mut stats = Self {
            attack: base.attack + bonuses.attack,
            defence: base.defence + bonuses.defence,
            wisdom: base.wisdom + bonuses.wisdom,
            hit_points: base.hit_points + bonuses.hit_points,
            damage: default_damage,
        };
        for item in equips.into_iter().flatten() {
            stats.attack += item.attack;
            stats.defence += item.defence;
            stats.wisdom += item.wisdom;
        }
        if let Some(weapon) = equips[0] {
            stats.damage = weapon.hit_points;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemCategory;
    use crate::ItemId;

    fn item(attack: i32, defence: i32, wisdom: i32, hit_points: i32) -> ItemDefinition {
        ItemDefinition {
            id: ItemId(1),
            name: "test".into(),
            description: String::new(),
            attack,
            defence,
            wisdom,
            hit_points,
            category: ItemCategory::Weapon,
        }
    }

    #[test]
    fn layering_adds_equips_and_bonuses() {
        let base = BaseStats {
            attack: 10,
            defence: 8,
            wisdom: 9,
            hit_points: 14,
        };
        let weapon = item(4, 0, 0, 5);
        let armor = item(0, 3, 1, 0);
        let bonuses = RoomBonuses {
            attack: 2,
            defence: 1,
            wisdom: 3,
            hit_points: 4,
        };
        let stats = EffectiveStats::layered(base, [Some(&weapon), Some(&armor)], bonuses, 2);
        assert_eq!(stats.attack, 16);
        assert_eq!(stats.defence, 12);
        assert_eq!(stats.wisdom, 13);
        assert_eq!(stats.hit_points, 18);
        assert_eq!(stats.damage, 5);
    }

    #[test]
    fn unarmed_damage_falls_back_to_default() {
        let stats = EffectiveStats::layered(BaseStats::default(), [None, None], RoomBonuses::default(), 2);
        assert_eq!(stats.damage, 2);
    }
}
