//! Random dice source backed by the thread-local RNG.

use game_core::DiceOracle;
use rand::Rng;

/// Uniform dice rolls from [`rand::thread_rng`]. Stateless, so a single
/// instance can be shared across accounts.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandDice;

impl DiceOracle for RandDice {
    fn roll(&self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(1..=sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_within_the_die() {
        let dice = RandDice;
        for _ in 0..200 {
            let value = dice.roll(20);
            assert!((1..=20).contains(&value));
        }
    }
}
