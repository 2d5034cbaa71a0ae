//! Trait describing a runnable client front-end.
use anyhow::Result;
use game_core::GameStatus;

use crate::session::SessionSetup;

/// Frontend abstraction for UI layers.
///
/// A frontend receives the session setup, asks the player for a name, opens
/// the [`GameSession`](crate::GameSession) and drives it until the game ends
/// or the player leaves.
///
/// # Implementations
///
/// - `CliFrontend`: line-based terminal UI
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use client_frontend_core::{Frontend, SessionSetup};
/// use game_core::{Action, GameStatus, QuitAction};
///
/// struct QuitImmediately;
///
/// impl Frontend for QuitImmediately {
///     fn run(&mut self, setup: SessionSetup) -> Result<GameStatus> {
///         let mut session = setup.start("Adventurer");
///         session.execute(Action::Quit(QuitAction))?;
///         Ok(session.status())
///     }
/// }
/// ```
pub trait Frontend {
    /// Run the frontend loop until the session is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (I/O failure,
    /// an engine error the player cannot recover from).
    fn run(&mut self, setup: SessionSetup) -> Result<GameStatus>;
}
