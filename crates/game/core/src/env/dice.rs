//! Injectable uniform die source.
//!
//! Every probabilistic rule draws through [`DiceOracle`] so combat and
//! search outcomes are reproducible under test. Implementations must make
//! each call an independent uniform draw; nothing may be cached or shared
//! across calls.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Uniform die roller used by every probabilistic rule.
pub trait DiceOracle: Send + Sync {
    /// Roll a die with `sides` faces, uniformly in `1..=sides`.
    fn roll(&self, sides: u32) -> u32;

    /// Roll a six-sided die (ability generation).
    fn d6(&self) -> u32 {
        self.roll(6)
    }

    /// Roll a twenty-sided die (combat and search checks).
    fn d20(&self) -> u32 {
        self.roll(20)
    }
}

/// Dice source that replays a fixed script of face values.
///
/// Used by tests to pin down combat and search arithmetic. Values are
/// consumed front to back; once the script is exhausted every roll returns 1.
/// Scripted values are clamped to the die being rolled.
pub struct ScriptedDice {
    script: Mutex<VecDeque<u32>>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Queue more values onto the end of the script.
    pub fn extend(&self, values: impl IntoIterator<Item = u32>) {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        script.extend(values);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl DiceOracle for ScriptedDice {
    fn roll(&self, sides: u32) -> u32 {
        let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
        script.pop_front().map_or(1, |value| value.clamp(1, sides))
    }
}
