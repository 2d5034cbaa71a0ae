//! State invariant errors.
//!
//! Raised by [`GameState::validate`](super::GameState::validate) after an
//! action has been applied. Any of these means the rules produced a state they
//! should never produce.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameStatus, Location};

/// Errors that describe an inconsistent game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Health escaped its clamp.
    #[error("Health {health} is out of range (max: {max})", max = GameConfig::MAX_HEALTH)]
    HealthOutOfRange { health: u32 },

    /// The session is still running although the player is dead.
    #[error("Player has no health left but the game is still {status}")]
    DeadPlayerStillRunning { status: GameStatus },

    /// A confirmation is pending somewhere other than the lair.
    #[error("Dragon confirmation pending while the player is at the {location}")]
    PendingOutsideLair { location: Location },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            HealthOutOfRange { .. } => "STATE_HEALTH_OUT_OF_RANGE",
            DeadPlayerStillRunning { .. } => "STATE_DEAD_PLAYER_RUNNING",
            PendingOutsideLair { .. } => "STATE_PENDING_OUTSIDE_LAIR",
        }
    }
}
