//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition, GameEvent};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Executes an action through the transition pipeline and returns its events.
///
/// This is the internal implementation used by GameEngine::execute().
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Vec<GameEvent>, ExecuteError> {
    match action {
        Action::Travel(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Travel)
        }
        Action::Buy(transition) => {
            let purchase = drive_transition(transition, state, env).map_err(ExecuteError::Buy)?;
            Ok(vec![GameEvent::Purchased(purchase)])
        }
        Action::UseItem(transition) => {
            let outcome =
                drive_transition(transition, state, env).map_err(ExecuteError::UseItem)?;
            Ok(vec![GameEvent::ItemUsed(outcome)])
        }
        Action::Engage(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Engage)
        }
        Action::Confirm(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Confirm)
        }
        Action::Status(transition) => match drive_transition(transition, state, env) {
            Ok(report) => Ok(vec![GameEvent::StatusReported(report)]),
            Err(never) => match never.error {},
        },
        Action::Help(transition) => match drive_transition(transition, state, env) {
            Ok(event) => Ok(vec![event]),
            Err(never) => match never.error {},
        },
        Action::Quit(transition) => match drive_transition(transition, state, env) {
            Ok(event) => Ok(vec![event]),
            Err(never) => match never.error {},
        },
    }
}
