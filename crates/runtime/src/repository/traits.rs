//! Repository contracts for saving and loading mutable account state.
//!
//! All methods return owned clones; the service mutates its copy and saves
//! it back only after the rules engine has accepted the whole action.

use game_core::{CharacterState, DungeonState, RollSet};

use crate::repository::Result;
use crate::types::AccountId;

/// Repository for the account's character sheet.
///
/// A character persists across dungeon runs; equipment and remaining hit
/// points carry over from run to run.
pub trait CharacterRepository: Send + Sync {
    fn save(&self, account: &AccountId, character: &CharacterState) -> Result<()>;

    fn load(&self, account: &AccountId) -> Result<Option<CharacterState>>;
}

/// Repository for pre-creation ability roll sets.
///
/// A roll set exists only between the first rolls request and character
/// creation, after which it is deleted.
pub trait RollSetRepository: Send + Sync {
    fn save(&self, account: &AccountId, rolls: &RollSet) -> Result<()>;

    fn load(&self, account: &AccountId) -> Result<Option<RollSet>>;

    fn delete(&self, account: &AccountId) -> Result<()>;
}

/// Repository for the account's active dungeon run.
///
/// At most one run exists per account; ending a run deletes the record and
/// with it all per-run overlay state.
pub trait DungeonRepository: Send + Sync {
    fn save(&self, account: &AccountId, dungeon: &DungeonState) -> Result<()>;

    fn load(&self, account: &AccountId) -> Result<Option<DungeonState>>;

    fn delete(&self, account: &AccountId) -> Result<()>;
}
