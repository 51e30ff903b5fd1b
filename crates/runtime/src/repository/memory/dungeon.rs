//! In-memory DungeonRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::DungeonState;

use crate::repository::{DungeonRepository, RepositoryError, Result};
use crate::types::AccountId;

/// In-memory implementation of [`DungeonRepository`].
#[derive(Default)]
pub struct InMemoryDungeonRepo {
    dungeons: RwLock<HashMap<AccountId, DungeonState>>,
}

impl InMemoryDungeonRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DungeonRepository for InMemoryDungeonRepo {
    fn save(&self, account: &AccountId, dungeon: &DungeonState) -> Result<()> {
        let mut dungeons = self
            .dungeons
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        dungeons.insert(account.clone(), dungeon.clone());
        Ok(())
    }

    fn load(&self, account: &AccountId) -> Result<Option<DungeonState>> {
        let dungeons = self
            .dungeons
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(dungeons.get(account).cloned())
    }

    fn delete(&self, account: &AccountId) -> Result<()> {
        let mut dungeons = self
            .dungeons
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        dungeons.remove(account);
        Ok(())
    }
}
