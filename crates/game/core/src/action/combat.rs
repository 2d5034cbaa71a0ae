//! Fight actions and the shared settlement logic.
//!
//! Fights start in three ways: entering the forest, searching the forest
//! again after a win, and attacking the dragon at the lair. All of them go
//! through [`Fight`], which runs the resolver and then moves the session on
//! (village after a retreat, victory or defeat).

use crate::action::{ActionTransition, GameEvent};
use crate::combat::{
    CombatOutcome, CombatReport, Consent, EncounterKind, Engagement, engage,
};
use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, GameStatus, Item, Location, PendingDecision};

/// RNG context for the loot roll.
const LOOT_ROLL: u32 = 0;

/// Starts a fight at the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngageAction {
    pub kind: EncounterKind,
}

impl EngageAction {
    pub fn new(kind: EncounterKind) -> Self {
        Self { kind }
    }

    /// Where this opponent can be found.
    pub fn location(&self) -> Location {
        match self.kind {
            EncounterKind::Monster => Location::Forest,
            EncounterKind::Dragon => Location::Mountain,
        }
    }
}

impl ActionTransition for EngageAction {
    type Error = EngageError;
    type Result = Vec<GameEvent>;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let location = state.player.location;
        if location != self.location() {
            return Err(EngageError::NoOpponentHere {
                kind: self.kind,
                location,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let fight = Fight::prepare(state, env, self.kind)?;
        Ok(fight.run(state, Consent::NotAsked))
    }
}

/// Answers the under-equipped dragon warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfirmAction {
    pub accept: bool,
}

impl ConfirmAction {
    pub fn accept() -> Self {
        Self { accept: true }
    }

    pub fn decline() -> Self {
        Self { accept: false }
    }

    /// `yes` or `y` in any case accepts; anything else declines.
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.trim();
        Self {
            accept: answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"),
        }
    }
}

impl ActionTransition for ConfirmAction {
    type Error = EngageError;
    type Result = Vec<GameEvent>;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match state.pending {
            Some(PendingDecision::UnderequippedDragon) => Ok(()),
            None => Err(EngageError::NothingToConfirm),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let consent = if self.accept {
            Consent::Accepted
        } else {
            Consent::Declined
        };

        let fight = Fight::prepare(state, env, EncounterKind::Dragon)?;
        state.pending = None;
        Ok(fight.run(state, consent))
    }
}

/// Oracle data one fight needs, gathered before the state is touched so a
/// missing oracle rejects the action without side effects.
pub(crate) struct Fight<'a> {
    kind: EncounterKind,
    config: &'a GameConfig,
    loot: Option<Item>,
}

impl<'a> Fight<'a> {
    pub(crate) fn prepare(
        state: &GameState,
        env: &GameEnv<'a>,
        kind: EncounterKind,
    ) -> Result<Self, OracleError> {
        Ok(Self {
            kind,
            config: env.rules()?,
            loot: roll_loot(state, env, kind)?,
        })
    }

    /// Runs the fight to completion and applies its consequences to the session.
    ///
    /// Returns the events in display order. When the dragon warning has to be
    /// answered first, the only effect is the pending decision.
    pub(crate) fn run(self, state: &mut GameState, consent: Consent) -> Vec<GameEvent> {
        let Self { kind, config, loot } = self;

        let report = match engage(kind, &mut state.player, config, consent) {
            Engagement::AwaitingConfirmation => {
                state.pending = Some(PendingDecision::UnderequippedDragon);
                return vec![GameEvent::ConfirmationRequired {
                    opponent: config.dragon.name.clone(),
                }];
            }
            Engagement::Retreated(report) => report,
            Engagement::Ready(resolver) => resolver.resolve(&mut state.player, loot),
        };

        settle(state, kind, report)
    }
}

/// Rolls for the monster's drop. Dragons drop nothing.
fn roll_loot(
    state: &GameState,
    env: &GameEnv<'_>,
    kind: EncounterKind,
) -> Result<Option<Item>, OracleError> {
    if kind != EncounterKind::Monster {
        return Ok(None);
    }

    let rules = env.rules()?.loot;
    let seed = compute_seed(state.game_seed, state.nonce, LOOT_ROLL);
    if !env.rng()?.chance(seed, rules.drop_chance_percent) {
        return Ok(None);
    }

    env.items()?
        .definition(rules.item)
        .map(Some)
        .ok_or(OracleError::ItemNotFound(rules.item))
}

fn settle(state: &mut GameState, kind: EncounterKind, report: CombatReport) -> Vec<GameEvent> {
    let outcome = report.outcome;
    let mut events = vec![GameEvent::CombatResolved(report)];

    match outcome {
        CombatOutcome::Won if kind == EncounterKind::Dragon => {
            state.status = GameStatus::Victory;
            events.push(GameEvent::Victory);
        }
        // Monster slain: stay in the forest for another search.
        CombatOutcome::Won => {}
        CombatOutcome::Lost => {
            state.status = GameStatus::Defeat;
            events.push(GameEvent::Defeat);
        }
        CombatOutcome::Retreated(_) if !state.player.is_alive() => {
            state.status = GameStatus::Defeat;
            events.push(GameEvent::Defeat);
        }
        CombatOutcome::Retreated(_) => {
            let from = state.player.location;
            if from != Location::Village {
                state.player.location = Location::Village;
                events.push(GameEvent::Travelled {
                    from,
                    to: Location::Village,
                });
            }
        }
    }

    events
}

/// Errors raised by fight actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngageError {
    #[error("There is no {kind} to fight at the {location}")]
    NoOpponentHere {
        kind: EncounterKind,
        location: Location,
    },

    #[error("There is nothing to confirm")]
    NothingToConfirm,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for EngageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoOpponentHere { .. } | Self::NothingToConfirm => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoOpponentHere { .. } => "ENGAGE_NO_OPPONENT_HERE",
            Self::NothingToConfirm => "ENGAGE_NOTHING_TO_CONFIRM",
            Self::Oracle(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestCatalog, fixed_rng, player_with, potion, steel_sword, sword};
    use crate::config::GameConfig;
    use crate::combat::RetreatReason;
    use crate::env::Env;
    use crate::state::Player;

    fn state_at(location: Location, player: Player) -> GameState {
        let mut state = GameState::new(1, player);
        state.player.location = location;
        state
    }

    #[test]
    fn monster_kill_keeps_player_in_forest_and_may_drop_a_potion() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(1);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Forest, player_with(vec![sword()]));

        let events = EngageAction::new(EncounterKind::Monster)
            .apply(&mut state, &env)
            .unwrap();

        assert!(matches!(&events[..], [GameEvent::CombatResolved(report)] if report.loot == Some(potion())));
        assert_eq!(state.player.location, Location::Forest);
        assert_eq!(state.player.gold, 30);
    }

    #[test]
    fn unlucky_roll_drops_nothing() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(100);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Forest, player_with(vec![sword()]));

        EngageAction::new(EncounterKind::Monster)
            .apply(&mut state, &env)
            .unwrap();

        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn weaponless_retreat_sends_player_home() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(1);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Forest, Player::default());

        let events = EngageAction::new(EncounterKind::Monster)
            .apply(&mut state, &env)
            .unwrap();

        let GameEvent::CombatResolved(report) = &events[0] else {
            panic!("expected a combat report");
        };
        assert_eq!(
            report.outcome,
            CombatOutcome::Retreated(RetreatReason::NoWeaponEquipped)
        );
        assert!(report.rounds.is_empty());
        assert_eq!(state.player.health(), 80);
        assert_eq!(state.player.location, Location::Village);
    }

    #[test]
    fn fatal_retreat_penalty_is_a_defeat() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(1);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Mountain, Player::default().with_health(30));

        let events = EngageAction::new(EncounterKind::Dragon)
            .apply(&mut state, &env)
            .unwrap();

        assert_eq!(events.last(), Some(&GameEvent::Defeat));
        assert_eq!(state.status, GameStatus::Defeat);
    }

    #[test]
    fn dragon_warning_sets_a_pending_decision() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(1);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Mountain, player_with(vec![steel_sword()]));

        let events = EngageAction::new(EncounterKind::Dragon)
            .apply(&mut state, &env)
            .unwrap();

        assert!(matches!(events[0], GameEvent::ConfirmationRequired { .. }));
        assert_eq!(state.pending, Some(PendingDecision::UnderequippedDragon));
        assert_eq!(state.player.health(), 100);
    }

    #[test]
    fn declining_returns_to_village_unharmed() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(1);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = state_at(Location::Mountain, player_with(vec![steel_sword()]));
        state.pending = Some(PendingDecision::UnderequippedDragon);

        ConfirmAction::decline().apply(&mut state, &env).unwrap();

        assert_eq!(state.pending, None);
        assert_eq!(state.player.location, Location::Village);
        assert_eq!(state.player.health(), 100);
    }

    #[test]
    fn failed_confirmation_keeps_the_question_open() {
        let env = GameEnv::empty();
        let mut state = state_at(Location::Mountain, player_with(vec![steel_sword()]));
        state.pending = Some(PendingDecision::UnderequippedDragon);
        let before = state.clone();

        let error = ConfirmAction::accept().apply(&mut state, &env).unwrap_err();

        assert_eq!(error, EngageError::Oracle(OracleError::ConfigNotAvailable));
        assert_eq!(state, before);
    }

    #[test]
    fn monsters_live_only_in_the_forest() {
        let env = GameEnv::empty();
        let state = state_at(Location::Market, Player::default());

        let error = EngageAction::new(EncounterKind::Monster)
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(error.error_code(), "ENGAGE_NO_OPPONENT_HERE");
    }

    #[test]
    fn confirmation_answers() {
        assert!(ConfirmAction::from_answer("YES").accept);
        assert!(ConfirmAction::from_answer(" y ").accept);
        assert!(!ConfirmAction::from_answer("yep").accept);
        assert!(!ConfirmAction::from_answer("").accept);
    }
}
