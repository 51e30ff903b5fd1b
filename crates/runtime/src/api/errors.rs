//! Unified error type surfaced by the game service.
//!
//! Wraps failures from the rules engine and the repositories so callers
//! can map every outcome to a transport status from a single
//! [`ErrorKind`].

use game_core::{CreationError, DungeonError, ErrorKind, RollsError, RulesError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Rolls(#[from] RollsError),

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Dungeon(#[from] DungeonError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("game service requires oracles to be configured before building")]
    MissingOracles,
}

impl ServiceError {
    /// Coarse classification for mapping onto a transport status.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rolls(e) => e.kind(),
            Self::Creation(e) => e.kind(),
            Self::Dungeon(e) => e.kind(),
            Self::Repository(_) | Self::MissingOracles => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code for logs and clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rolls(e) => e.code(),
            Self::Creation(e) => e.code(),
            Self::Dungeon(e) => e.code(),
            Self::Repository(_) => "SERVICE_REPOSITORY",
            Self::MissingOracles => "SERVICE_MISSING_ORACLES",
        }
    }
}
