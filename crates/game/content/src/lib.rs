//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for RON/TOML
//! data files:
//! - Item catalog with shop stock (built in, or data-driven via RON)
//! - Game rules (defaults from game-core, or data-driven via TOML)
//!
//! Content is consumed through game-core oracles and never appears in game
//! state; purchased items are copies.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCatalog, ShopStock};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentBundle, ContentFactory, ItemLoader, LoadResult};
