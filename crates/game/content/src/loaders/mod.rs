//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! game-core consumes.

pub mod config;
pub mod factory;
pub mod item;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
