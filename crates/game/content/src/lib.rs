//! Data-driven content definitions and loaders.
//!
//! This crate houses the static campaign content and provides loaders for
//! RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Enemy catalogs (data-driven via RON)
//! - Room graphs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//!
//! All loaders use game-core types directly with serde for RON/TOML
//! deserialization.

pub mod campaign;
pub mod loaders;

pub use campaign::Campaign;
pub use loaders::{
    BestiaryFile, BestiaryLoader, ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader,
    LoadResult, MapFile, MapLoader,
};
