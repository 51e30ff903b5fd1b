//! Combat roll resolution.
//!
//! One attack action produces a single combined log: the character's
//! attacking entry followed by one defending entry per enemy present when
//! the action started. The numeric rule is strict everywhere:
//!
//! ```text
//! value = attacker.attack - defender.defence
//! hit   = value + d20 > threshold
//! ```
//!
//! Each entry draws its own independent d20.

use serde::Serialize;
use strum::Display;

use crate::env::{DiceOracle, EnemyTemplate};
use crate::stats::EffectiveStats;
use crate::EnemyId;

/// Which side of the exchange a log entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FightKind {
    Attacking,
    Defending,
}

/// One resolved roll of a combat action. Ephemeral: produced per action,
/// never persisted beyond the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FightLogEntry {
    #[serde(rename = "type")]
    pub kind: FightKind,
    /// Enemy the entry concerns: the target when attacking, the striker
    /// when defending.
    pub id: EnemyId,
    pub value: i32,
    pub dice: u32,
    pub hit: bool,
    /// Damage actually applied by this entry; 0 on a miss.
    pub damage: i32,
}

fn resolve(
    kind: FightKind,
    id: EnemyId,
    value: i32,
    damage_on_hit: i32,
    dice: &dyn DiceOracle,
    threshold: i32,
) -> FightLogEntry {
    let roll = dice.d20();
    let hit = value + roll as i32 > threshold;
    FightLogEntry {
        kind,
        id,
        value,
        dice: roll,
        hit,
        damage: if hit { damage_on_hit } else { 0 },
    }
}

/// The character strikes at `enemy`.
pub fn attacking_roll(
    stats: &EffectiveStats,
    enemy: &EnemyTemplate,
    dice: &dyn DiceOracle,
    threshold: i32,
) -> FightLogEntry {
    resolve(
        FightKind::Attacking,
        enemy.id,
        stats.attack - enemy.defence,
        stats.damage,
        dice,
        threshold,
    )
}

/// `enemy` strikes back at the character.
pub fn defending_roll(
    enemy: &EnemyTemplate,
    stats: &EffectiveStats,
    dice: &dyn DiceOracle,
    threshold: i32,
) -> FightLogEntry {
    resolve(
        FightKind::Defending,
        enemy.id,
        enemy.attack - stats.defence,
        enemy.damage,
        dice,
        threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDice;

    fn enemy() -> EnemyTemplate {
        EnemyTemplate {
            id: EnemyId(101),
            name: "giant rat".into(),
            description: String::new(),
            attack: 8,
            defence: 5,
            hit_points: 10,
            damage: 3,
        }
    }

    fn stats() -> EffectiveStats {
        EffectiveStats {
            attack: 15,
            defence: 11,
            wisdom: 10,
            hit_points: 20,
            damage: 4,
        }
    }

    #[test]
    fn attacking_hits_strictly_above_the_threshold() {
        // value = 15 - 5 = 10; dice 2 gives 12, not > 12: miss.
        let dice = ScriptedDice::new([2]);
        let entry = attacking_roll(&stats(), &enemy(), &dice, 12);
        assert_eq!(entry.value, 10);
        assert_eq!(entry.dice, 2);
        assert!(!entry.hit);
        assert_eq!(entry.damage, 0);

        // dice 3 gives 13 > 12: hit for the weapon's damage rating.
        let dice = ScriptedDice::new([3]);
        let entry = attacking_roll(&stats(), &enemy(), &dice, 12);
        assert!(entry.hit);
        assert_eq!(entry.damage, 4);
        assert_eq!(entry.kind, FightKind::Attacking);
        assert_eq!(entry.id, EnemyId(101));
    }

    #[test]
    fn defending_uses_the_enemy_attack_against_character_defence() {
        // value = 8 - 11 = -3; dice 16 gives 13 > 12: hit for enemy damage.
        let dice = ScriptedDice::new([16]);
        let entry = defending_roll(&enemy(), &stats(), &dice, 12);
        assert_eq!(entry.kind, FightKind::Defending);
        assert_eq!(entry.value, -3);
        assert!(entry.hit);
        assert_eq!(entry.damage, 3);
    }

    #[test]
    fn log_entry_serializes_with_a_type_tag() {
        let dice = ScriptedDice::new([3]);
        let entry = attacking_roll(&stats(), &enemy(), &dice, 12);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "attacking");
        assert_eq!(json["id"], 101);
        assert_eq!(json["value"], 10);
        assert_eq!(json["hit"], true);
    }
}
