use crate::env::OracleError;
use crate::error::{ErrorKind, RulesError};
use crate::{EnemyId, GateId, ItemId};

/// Failures of dungeon lifecycle transitions and in-run actions.
///
/// Every variant is checked before any state is mutated; a returned error
/// means the aggregates are untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    /// Starting a run requires a character.
    #[error("no character exists for this account")]
    NoCharacter,

    /// At most one live dungeon per account.
    #[error("a dungeon run is already active")]
    AlreadyActive,

    /// The action requires an active dungeon run.
    #[error("no active dungeon run")]
    NotActive,

    /// The gate is not in the current room's visible gate list.
    #[error("gate {0} is not visible in the current room")]
    GateNotFound(GateId),

    /// The enemy is not (or no longer) in the current room.
    #[error("enemy {0} is not in the current room")]
    EnemyNotFound(EnemyId),

    /// The item is not visible in the current room.
    #[error("item {0} is not in the current room")]
    ItemNotInRoom(ItemId),

    /// The item is not in the character's bag.
    #[error("item {0} is not in the bag")]
    ItemNotInBag(ItemId),

    /// Searching is refused while live enemies remain in the room.
    #[error("cannot search while enemies are in the room")]
    EnemiesPresent,

    /// Taking items is refused until the room is cleared (configurable).
    #[error("cannot take items while enemies are in the room")]
    RoomNotCleared,

    /// Searching costs a hit point the character can no longer afford.
    #[error("too exhausted to search")]
    Exhausted,

    /// Static content referenced something that does not exist.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl RulesError for DungeonError {
    fn kind(&self) -> ErrorKind {
        match self {
            DungeonError::AlreadyActive => ErrorKind::Conflict,
            DungeonError::NoCharacter
            | DungeonError::NotActive
            | DungeonError::GateNotFound(_)
            | DungeonError::EnemyNotFound(_)
            | DungeonError::ItemNotInRoom(_)
            | DungeonError::ItemNotInBag(_) => ErrorKind::NotFound,
            DungeonError::EnemiesPresent | DungeonError::RoomNotCleared | DungeonError::Exhausted => {
                ErrorKind::Blocked
            }
            DungeonError::Oracle(inner) => inner.kind(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            DungeonError::NoCharacter => "DUNGEON_NO_CHARACTER",
            DungeonError::AlreadyActive => "DUNGEON_ALREADY_ACTIVE",
            DungeonError::NotActive => "DUNGEON_NOT_ACTIVE",
            DungeonError::GateNotFound(_) => "DUNGEON_GATE_NOT_FOUND",
            DungeonError::EnemyNotFound(_) => "DUNGEON_ENEMY_NOT_FOUND",
            DungeonError::ItemNotInRoom(_) => "DUNGEON_ITEM_NOT_IN_ROOM",
            DungeonError::ItemNotInBag(_) => "DUNGEON_ITEM_NOT_IN_BAG",
            DungeonError::EnemiesPresent => "DUNGEON_ENEMIES_PRESENT",
            DungeonError::RoomNotCleared => "DUNGEON_ROOM_NOT_CLEARED",
            DungeonError::Exhausted => "DUNGEON_EXHAUSTED",
            DungeonError::Oracle(inner) => inner.code(),
        }
    }
}
