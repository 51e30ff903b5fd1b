use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Rules configuration and tunable policy constants.
///
/// Policy numbers (stat derivation base, unarmed damage, search cost) live
/// here rather than being hard-coded at their use sites. [`Default`] supplies the canonical values; deployments
/// override them through `config.toml` in the content directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A roll hits when `value + d20 > hit_threshold`, strictly.
    pub hit_threshold: i32,
    /// Damage dealt by an attacker with no weapon equipped.
    pub default_damage: i32,
    /// Added to the constitution score to form starting hit points.
    pub base_hit_points: i32,
    /// Hit points deducted by every search attempt, hit or miss.
    pub search_cost: i32,
    /// Searching is refused while effective hit points are at or below this.
    pub search_min_hit_points: i32,
    /// When set, items cannot be taken from a room with live enemies.
    pub take_requires_cleared_room: bool,
    /// Items seeded into every new character's bag.
    pub starter_items: Vec<ItemId>,
}

impl GameConfig {
    pub const DEFAULT_HIT_THRESHOLD: i32 = 12;
    pub const DEFAULT_DAMAGE: i32 = 2;
    pub const DEFAULT_BASE_HIT_POINTS: i32 = 10;
    pub const DEFAULT_SEARCH_COST: i32 = 1;
    pub const DEFAULT_SEARCH_MIN_HIT_POINTS: i32 = 1;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hit_threshold: Self::DEFAULT_HIT_THRESHOLD,
            default_damage: Self::DEFAULT_DAMAGE,
            base_hit_points: Self::DEFAULT_BASE_HIT_POINTS,
            search_cost: Self::DEFAULT_SEARCH_COST,
            search_min_hit_points: Self::DEFAULT_SEARCH_MIN_HIT_POINTS,
            take_requires_cleared_room: true,
            starter_items: Vec::new(),
        }
    }
}
