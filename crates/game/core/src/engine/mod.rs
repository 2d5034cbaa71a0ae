//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! rejects actions the session cannot accept (game over, unanswered
//! question), drives the transition phases, re-checks the state invariants
//! and surfaces rich error information for the presentation layer.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, GameEvent};
use crate::env::GameEnv;
use crate::state::{GameState, LocationMenu};

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Menu of the location the player is standing in.
    pub fn menu(&self) -> &'static LocationMenu {
        self.state.player.location.menu()
    }

    /// Executes an action and returns what happened, in order.
    ///
    /// Rejected actions leave the state untouched: every fallible lookup happens
    /// before an action mutates anything. Only an internal invariant failure
    /// reported after `apply` can leave a partial change behind. The nonce
    /// advances once per successful action.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<Vec<GameEvent>, ExecuteError> {
        self.validate_session(action)?;

        let events = transition::execute_transition(action, self.state, &env)?;
        self.state.validate()?;

        self.state.nonce += 1;
        Ok(events)
    }

    /// Validates that the session can accept `action` at all.
    fn validate_session(&self, action: &Action) -> Result<(), ExecuteError> {
        if self.state.is_over() {
            return Err(ExecuteError::GameOver {
                status: self.state.status,
            });
        }

        match (self.state.pending, action) {
            (Some(decision), action) if !matches!(action, Action::Confirm(_)) => {
                Err(ExecuteError::DecisionPending { decision })
            }
            _ => Ok(()),
        }
    }
}
