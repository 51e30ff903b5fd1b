//! Character creation and the persistent character aggregate.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{ErrorKind, RulesError};
use crate::rolls::{RollId, RollSet};
use crate::stats::BaseStats;
use crate::ItemId;

/// Creation request: identity plus the four roll ids chosen for the
/// abilities. The ids must be pairwise distinct members of the account's
/// current roll set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub description: String,
    pub strength: RollId,
    pub intellect: RollId,
    pub dexterity: RollId,
    pub constitution: RollId,
}

/// The four core ability scores, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub strength: i32,
    pub intellect: i32,
    pub dexterity: i32,
    pub constitution: i32,
}

/// Persistent character aggregate: exactly one per account, immutable
/// identity after creation. Base hit points are the only base stat mutated
/// afterwards; attack/defence/wisdom change only through equips and
/// consumables layered on top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    pub name: String,
    pub description: String,
    pub abilities: Abilities,
    pub base: BaseStats,
    pub bag: Vec<ItemId>,
    pub equipped_attack_item: Option<ItemId>,
    pub equipped_defence_item: Option<ItemId>,
}

impl CharacterState {
    /// Validate the request against the roll set and derive the character.
    ///
    /// Stat derivation policy: each ability score is the sum of its roll's
    /// three dice; attack ← strength, defence ← dexterity, wisdom ←
    /// intellect, hit points ← `base_hit_points` + constitution. The same
    /// rolls always derive the same character.
    ///
    /// The caller is responsible for the conflict check (no existing
    /// character) and for destroying the roll set on success.
    pub fn create(
        request: NewCharacter,
        rolls: &RollSet,
        config: &GameConfig,
    ) -> Result<Self, CreationError> {
        let picks = [
            request.strength,
            request.intellect,
            request.dexterity,
            request.constitution,
        ];
        for (index, id) in picks.iter().enumerate() {
            if picks[..index].contains(id) {
                return Err(CreationError::DuplicateRoll(*id));
            }
        }

        let score = |id: RollId| {
            rolls
                .get(id)
                .map(|roll| roll.score())
                .ok_or(CreationError::UnknownRoll(id))
        };
        let abilities = Abilities {
            strength: score(request.strength)?,
            intellect: score(request.intellect)?,
            dexterity: score(request.dexterity)?,
            constitution: score(request.constitution)?,
        };

        Ok(Self {
            name: request.name,
            description: request.description,
            abilities,
            base: BaseStats {
                attack: abilities.strength,
                defence: abilities.dexterity,
                wisdom: abilities.intellect,
                hit_points: config.base_hit_points + abilities.constitution,
            },
            bag: config.starter_items.clone(),
            equipped_attack_item: None,
            equipped_defence_item: None,
        })
    }

    pub fn has_in_bag(&self, item: ItemId) -> bool {
        self.bag.contains(&item)
    }

    /// Remove one bag entry; returns false if the item was not there.
    pub fn remove_from_bag(&mut self, item: ItemId) -> bool {
        match self.bag.iter().position(|entry| *entry == item) {
            Some(index) => {
                self.bag.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Failures of character creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    /// An account creates at most one character, ever.
    #[error("account already has a character")]
    CharacterExists,

    /// The account never requested its ability rolls.
    #[error("no ability roll set exists for this account")]
    MissingRolls,

    /// Two ability slots point at the same roll.
    #[error("ability roll {0} is used for more than one ability")]
    DuplicateRoll(RollId),

    /// The roll id does not belong to the account's current set.
    #[error("ability roll {0} is not part of the current roll set")]
    UnknownRoll(RollId),
}

impl RulesError for CreationError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreationError::CharacterExists => ErrorKind::Conflict,
            CreationError::MissingRolls
            | CreationError::DuplicateRoll(_)
            | CreationError::UnknownRoll(_) => ErrorKind::Validation,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CreationError::CharacterExists => "CHARACTER_EXISTS",
            CreationError::MissingRolls => "CHARACTER_MISSING_ROLLS",
            CreationError::DuplicateRoll(_) => "CHARACTER_DUPLICATE_ROLL",
            CreationError::UnknownRoll(_) => "CHARACTER_UNKNOWN_ROLL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDice;

    fn fixed_rolls() -> RollSet {
        // Five rolls scoring 6, 9, 12, 15, 18.
        let dice = ScriptedDice::new([1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 6, 6, 6, 6]);
        RollSet::generate(&dice)
    }

    fn request(strength: u32, intellect: u32, dexterity: u32, constitution: u32) -> NewCharacter {
        NewCharacter {
            name: "Brakka".into(),
            description: "scarred veteran".into(),
            strength: RollId(strength),
            intellect: RollId(intellect),
            dexterity: RollId(dexterity),
            constitution: RollId(constitution),
        }
    }

    #[test]
    fn derives_stats_from_the_chosen_rolls() {
        let config = GameConfig {
            starter_items: vec![ItemId(1), ItemId(2)],
            ..GameConfig::default()
        };
        let character = CharacterState::create(request(4, 2, 3, 1), &fixed_rolls(), &config)
            .expect("creation should succeed");

        assert_eq!(character.abilities.strength, 15);
        assert_eq!(character.abilities.intellect, 9);
        assert_eq!(character.abilities.dexterity, 12);
        assert_eq!(character.abilities.constitution, 6);

        assert_eq!(character.base.attack, 15);
        assert_eq!(character.base.wisdom, 9);
        assert_eq!(character.base.defence, 12);
        assert_eq!(character.base.hit_points, config.base_hit_points + 6);

        assert_eq!(character.bag, vec![ItemId(1), ItemId(2)]);
        assert_eq!(character.equipped_attack_item, None);
        assert_eq!(character.equipped_defence_item, None);
    }

    #[test]
    fn creation_is_deterministic_for_the_same_rolls() {
        let config = GameConfig::default();
        let a = CharacterState::create(request(1, 2, 3, 4), &fixed_rolls(), &config).unwrap();
        let b = CharacterState::create(request(1, 2, 3, 4), &fixed_rolls(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_a_roll_used_for_two_abilities() {
        let result = CharacterState::create(request(1, 2, 1, 3), &fixed_rolls(), &GameConfig::default());
        assert_eq!(result, Err(CreationError::DuplicateRoll(RollId(1))));
    }

    #[test]
    fn rejects_a_roll_foreign_to_the_set() {
        let result = CharacterState::create(request(1, 2, 3, 42), &fixed_rolls(), &GameConfig::default());
        assert_eq!(result, Err(CreationError::UnknownRoll(RollId(42))));
    }

    #[test]
    fn bag_removal_reports_missing_items() {
        let config = GameConfig {
            starter_items: vec![ItemId(7)],
            ..GameConfig::default()
        };
        let mut character =
            CharacterState::create(request(1, 2, 3, 4), &fixed_rolls(), &config).unwrap();
        assert!(character.remove_from_bag(ItemId(7)));
        assert!(!character.remove_from_bag(ItemId(7)));
    }
}
