use crate::env::GameEnv;
use crate::state::GameState;

/// One kind of player action, split into the three steps the engine runs.
///
/// `pre_validate` decides whether the action is allowed at all (right
/// location, enough gold, a real inventory slot). When it fails nothing has
/// changed, so the frontend can just ask again. `apply` performs the move,
/// purchase or fight. `post_validate` checks the result still makes sense for
/// this action, such as the player ending up where they travelled.
///
/// Content (catalog, rules, dice) is only reachable through `env`.
pub trait ActionTransition {
    type Error;
    type Result;

    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs after a successful `pre_validate`. Lookups that can fail come
    /// first; an `Err` must not leave the state half-changed.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
