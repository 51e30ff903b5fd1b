use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EnemyId, GateId, ItemId, RoomId};

/// Access to the static room graph.
///
/// Room content for a given id must be deterministic: the template is fixed
/// at load time and never regenerated between visits. Per-run mutation
/// (reveals, takes, kills) is layered on top by the dungeon state.
pub trait MapOracle: Send + Sync {
    fn room(&self, id: RoomId) -> Option<&RoomTemplate>;

    /// Room every fresh dungeon run begins in.
    fn starting_room(&self) -> RoomId;
}

/// One-way edge naming its destination room. A gate is bidirectional in
/// effect only if the destination room defines a gate back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDefinition {
    pub id: GateId,
    pub room: RoomId,
}

/// Immutable room template with a tagged hidden/visible partition.
///
/// Hidden entries exist in the data but are not exposed to the player until
/// revealed by a successful search, which moves them into the run's visible
/// overlay one at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub id: RoomId,
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemId>,
    #[serde(default)]
    pub enemies: Vec<EnemyId>,
    #[serde(default)]
    pub gates: Vec<GateDefinition>,
    #[serde(default)]
    pub hidden_items: Vec<ItemId>,
    #[serde(default)]
    pub hidden_gates: Vec<GateDefinition>,
}

/// Room graph backed by an id-indexed map.
#[derive(Clone, Debug)]
pub struct MapCatalog {
    starting_room: RoomId,
    rooms: BTreeMap<RoomId, RoomTemplate>,
}

impl MapCatalog {
    pub fn new(starting_room: RoomId, rooms: impl IntoIterator<Item = RoomTemplate>) -> Self {
        Self {
            starting_room,
            rooms: rooms.into_iter().map(|room| (room.id, room)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomTemplate> {
        self.rooms.values()
    }
}

impl MapOracle for MapCatalog {
    fn room(&self, id: RoomId) -> Option<&RoomTemplate> {
        self.rooms.get(&id)
    }

    fn starting_room(&self) -> RoomId {
        self.starting_room
    }
}
