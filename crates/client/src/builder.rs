//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_frontend_core::SessionSetup;
use game_content::ContentBundle;

/// Builder for constructing a Client with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: Frontend must be provided
/// - **Optional fields**: Content (built-in by default) and seed (0 by default)
/// - **Fail-fast validation**: Missing required fields cause build() to fail
/// - **Fluent API**: Chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    content: Option<ContentBundle>,
    seed: u64,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content bundle (optional).
    ///
    /// It should be produced by `ContentFactory::load` so it is already
    /// validated. Defaults to the built-in catalog and rules.
    pub fn content(mut self, content: ContentBundle) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the game seed that drives the loot rolls.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let content = self.content.unwrap_or_else(ContentBundle::builtin);

        Ok(Client {
            setup: SessionSetup::new(content, self.seed),
            frontend,
        })
    }
}
