//! Content loaders for reading game data from files.
//!
//! Loaders convert RON/TOML files into the catalog types that back the
//! engine's oracles.

pub mod bestiary;
pub mod config;
pub mod factory;
pub mod items;
pub mod map;

pub use bestiary::{BestiaryFile, BestiaryLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::{ItemCatalogFile, ItemLoader};
pub use map::{MapFile, MapLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
