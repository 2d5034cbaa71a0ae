//! Actions that never fail: status, help and quitting.

use crate::action::{ActionTransition, GameEvent, StatusReport};
use crate::env::GameEnv;
use crate::error::NeverError;
use crate::state::{GameState, GameStatus};

/// Reports name, health, gold, location and inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusAction;

impl ActionTransition for StatusAction {
    type Error = NeverError;
    type Result = StatusReport;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        Ok(StatusReport::from_state(state))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelpAction;

impl ActionTransition for HelpAction {
    type Error = NeverError;
    type Result = GameEvent;

    fn apply(&self, _state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        Ok(GameEvent::HelpRequested)
    }
}

/// Ends the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuitAction;

impl ActionTransition for QuitAction {
    type Error = NeverError;
    type Result = GameEvent;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        state.status = GameStatus::Quit;
        Ok(GameEvent::Quit)
    }
}
