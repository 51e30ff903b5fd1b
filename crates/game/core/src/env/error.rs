use crate::error::{ErrorKind, RulesError};
use crate::{EnemyId, ItemId, RoomId};

/// Failures caused by holes in the static content, not by the caller.
///
/// These indicate a broken catalog (a gate pointing at a missing room, a bag
/// referencing an unknown item) and are surfaced as internal faults.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("room {0} is not in the map catalog")]
    UnknownRoom(RoomId),

    #[error("item {0} is not in the item catalog")]
    UnknownItem(ItemId),

    #[error("enemy {0} is not in the bestiary")]
    UnknownEnemy(EnemyId),
}

impl RulesError for OracleError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }

    fn code(&self) -> &'static str {
        match self {
            OracleError::UnknownRoom(_) => "ORACLE_UNKNOWN_ROOM",
            OracleError::UnknownItem(_) => "ORACLE_UNKNOWN_ITEM",
            OracleError::UnknownEnemy(_) => "ORACLE_UNKNOWN_ENEMY",
        }
    }
}
