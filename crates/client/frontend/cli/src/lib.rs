//! Terminal frontend for The Dragon's Quest.
//!
//! This crate provides a line-based terminal interface for the game. It
//! implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the session setup from the binary
//! - Reads numbered choices from any `BufRead` and writes to any `Write`
//! - Submits actions to the session and renders the returned events

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod start_screen;

pub use app::CliFrontend;
pub use config::{CliConfig, ContentPaths, UiConfig};
pub use input::LineReader;
pub use start_screen::show_start_screen;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
