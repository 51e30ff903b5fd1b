//! In-memory RollSetRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::RollSet;

use crate::repository::{RepositoryError, Result, RollSetRepository};
use crate::types::AccountId;

/// In-memory implementation of [`RollSetRepository`].
#[derive(Default)]
pub struct InMemoryRollSetRepo {
    rolls: RwLock<HashMap<AccountId, RollSet>>,
}

impl InMemoryRollSetRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RollSetRepository for InMemoryRollSetRepo {
    fn save(&self, account: &AccountId, rolls: &RollSet) -> Result<()> {
        let mut sets = self
            .rolls
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sets.insert(account.clone(), rolls.clone());
        Ok(())
    }

    fn load(&self, account: &AccountId) -> Result<Option<RollSet>> {
        let sets = self
            .rolls
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sets.get(account).cloned())
    }

    fn delete(&self, account: &AccountId) -> Result<()> {
        let mut sets = self
            .rolls
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sets.remove(account);
        Ok(())
    }
}
