//! In-memory CharacterRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::CharacterState;

use crate::repository::{CharacterRepository, RepositoryError, Result};
use crate::types::AccountId;

/// In-memory implementation of [`CharacterRepository`].
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    characters: RwLock<HashMap<AccountId, CharacterState>>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn save(&self, account: &AccountId, character: &CharacterState) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.insert(account.clone(), character.clone());
        Ok(())
    }

    fn load(&self, account: &AccountId) -> Result<Option<CharacterState>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(account).cloned())
    }
}
