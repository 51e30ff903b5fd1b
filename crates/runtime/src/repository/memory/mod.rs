//! In-memory repository implementations for tests and local runs.

mod character;
mod dungeon;
mod rolls;

pub use character::InMemoryCharacterRepo;
pub use dungeon::InMemoryDungeonRepo;
pub use rolls::InMemoryRollSetRepo;
