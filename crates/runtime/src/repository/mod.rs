//! Persistence layer for per-account state.

mod error;
pub mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryCharacterRepo, InMemoryDungeonRepo, InMemoryRollSetRepo};
pub use traits::{CharacterRepository, DungeonRepository, RollSetRepository};
