//! Public service surface.

mod errors;

pub use errors::{RepositoryError, Result, ServiceError};
