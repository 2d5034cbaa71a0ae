//! Top-level client wiring content and a frontend into one game.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Content (item catalog and rule set, built in or loaded from files)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management
//! - **Content**: Data only; consumed by game-core through oracles
//! - **Frontend**: User interaction and rendering, via the session handle only

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::SessionSetup;
use game_core::GameStatus;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects content, seed and frontend
/// 2. Client::run() hands the session setup to the frontend (blocking)
/// 3. The frontend returns how the game ended
pub struct Client {
    setup: SessionSetup,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails (I/O, unrecoverable engine error).
    pub fn run(self) -> Result<GameStatus> {
        let mut frontend = self.frontend;
        let status = frontend.run(self.setup)?;
        tracing::info!(%status, "Client finished");
        Ok(status)
    }
}
