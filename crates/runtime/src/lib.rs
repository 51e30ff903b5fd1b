//! Service layer over the dungeon rules engine.
//!
//! Exposes the engine as per-account request/response operations:
//! - Oracle management bridging static content into [`game_core::Env`]
//! - Repositories for character, roll set, and dungeon run state
//! - A session registry serializing actions per account
//! - The [`GameService`] tying them together with atomic turns

pub mod api;
pub mod oracle;
pub mod repository;
pub mod service;
pub mod sessions;
pub mod types;

pub use api::{Result, ServiceError};
pub use oracle::{OracleManager, RandDice};
pub use repository::{
    CharacterRepository, DungeonRepository, InMemoryCharacterRepo, InMemoryDungeonRepo,
    InMemoryRollSetRepo, RepositoryError, RollSetRepository,
};
pub use service::{GameService, GameServiceBuilder};
pub use sessions::SessionRegistry;
pub use types::AccountId;
