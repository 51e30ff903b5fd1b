//! Pre-creation ability rolls.
//!
//! Every account receives exactly one set of five 3d6 samples before
//! character creation. The set is owned by the account until four of its
//! rolls are consumed by [`crate::CharacterState::create`], after which it
//! is destroyed and can never be re-rolled.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::env::DiceOracle;
use crate::error::{ErrorKind, RulesError};

/// Identifier of a roll within an account's roll set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollId(pub u32);

impl RollId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One 3d6 sample usable to seed a single ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRoll {
    pub id: RollId,
    pub dice_1: u32,
    pub dice_2: u32,
    pub dice_3: u32,
}

impl AbilityRoll {
    /// Ability score contributed by this roll.
    pub fn score(&self) -> i32 {
        (self.dice_1 + self.dice_2 + self.dice_3) as i32
    }
}

/// The one-time set of candidate ability rolls for an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSet {
    rolls: Vec<AbilityRoll>,
}

impl RollSet {
    /// Number of rolls in every set.
    pub const SIZE: usize = 5;

    /// Draw a fresh set of [`Self::SIZE`] rolls, three d6 each.
    ///
    /// Ids are local to the set (1-based); uniqueness across accounts is the
    /// store's concern, membership checks only ever run against one set.
    pub fn generate(dice: &dyn DiceOracle) -> Self {
        let rolls = (1..=Self::SIZE as u32)
            .map(|id| AbilityRoll {
                id: RollId(id),
                dice_1: dice.d6(),
                dice_2: dice.d6(),
                dice_3: dice.d6(),
            })
            .collect();
        Self { rolls }
    }

    pub fn get(&self, id: RollId) -> Option<&AbilityRoll> {
        self.rolls.iter().find(|roll| roll.id == id)
    }

    pub fn rolls(&self) -> &[AbilityRoll] {
        &self.rolls
    }
}

/// Failures of the roll-set operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollsError {
    /// Rolls are only meaningful before a character exists; once one does,
    /// the set is gone and re-fetching reports it as missing.
    #[error("account already has a character; ability rolls are consumed")]
    AlreadyHasCharacter,
}

impl RulesError for RollsError {
    fn kind(&self) -> ErrorKind {
        match self {
            RollsError::AlreadyHasCharacter => ErrorKind::NotFound,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RollsError::AlreadyHasCharacter => "ROLLS_ALREADY_HAS_CHARACTER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDice;

    #[test]
    fn generate_produces_five_rolls_with_distinct_ids() {
        let dice = ScriptedDice::new(1..=15);
        let set = RollSet::generate(&dice);
        assert_eq!(set.rolls().len(), RollSet::SIZE);
        for (index, roll) in set.rolls().iter().enumerate() {
            assert_eq!(roll.id, RollId(index as u32 + 1));
        }
    }

    #[test]
    fn every_die_is_within_d6_range() {
        // Script values beyond 6 to prove clamping never leaks out of range.
        let dice = ScriptedDice::new([1, 6, 3, 9, 2, 4, 6, 6, 1, 5, 2, 3, 4, 1, 6]);
        let set = RollSet::generate(&dice);
        for roll in set.rolls() {
            for die in [roll.dice_1, roll.dice_2, roll.dice_3] {
                assert!((1..=6).contains(&die), "die {die} out of range");
            }
        }
    }

    #[test]
    fn score_is_the_sum_of_the_three_dice() {
        let roll = AbilityRoll {
            id: RollId(1),
            dice_1: 2,
            dice_2: 5,
            dice_3: 6,
        };
        assert_eq!(roll.score(), 13);
    }
}
