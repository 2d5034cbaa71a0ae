use crate::action::combat::Fight;
use crate::action::{ActionTransition, GameEvent};
use crate::combat::{Consent, EncounterKind};
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Location};

/// Moves the player along one edge of the location graph.
///
/// Entering the forest immediately starts a monster fight. The mountain is
/// closed to players without the top-tier weapon and armor unless the rule
/// set switches the gate off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelAction {
    pub destination: Location,
}

impl TravelAction {
    pub fn new(destination: Location) -> Self {
        Self { destination }
    }

    pub fn to_village() -> Self {
        Self::new(Location::Village)
    }
}

impl ActionTransition for TravelAction {
    type Error = TravelError;
    type Result = Vec<GameEvent>;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let from = state.player.location;
        if !from.can_reach(self.destination) {
            return Err(TravelError::NoRoute {
                from,
                to: self.destination,
            });
        }

        if self.destination == Location::Mountain {
            let gear = env.rules()?.gear;
            if gear.require_gear_for_mountain
                && !state.player.inventory.has_good_equipment(gear.top_tier_weapon)
            {
                return Err(TravelError::Unprepared);
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let fight = if self.destination == Location::Forest {
            Some(Fight::prepare(state, env, EncounterKind::Monster)?)
        } else {
            None
        };

        let from = state.player.location;
        state.player.location = self.destination;

        let mut events = vec![GameEvent::Travelled {
            from,
            to: self.destination,
        }];
        if let Some(fight) = fight {
            events.extend(fight.run(state, Consent::NotAsked));
        }

        Ok(events)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        // A forest fight may have sent the player home or ended the game.
        let location = state.player.location;
        if location == self.destination || location == Location::Village || state.is_over() {
            Ok(())
        } else {
            Err(TravelError::Misplaced {
                expected: self.destination,
                actual: location,
            })
        }
    }
}

/// Errors raised while moving between locations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    #[error("You cannot go from the {from} to the {to}")]
    NoRoute { from: Location, to: Location },

    #[error(
        "The path to the dragon's lair is too dangerous. You need a Steel Sword and armor first"
    )]
    Unprepared,

    #[error("Player ended up at the {actual} instead of the {expected}")]
    Misplaced {
        expected: Location,
        actual: Location,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for TravelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoRoute { .. } => ErrorSeverity::Validation,
            Self::Unprepared => ErrorSeverity::Recoverable,
            Self::Misplaced { .. } => ErrorSeverity::Internal,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRoute { .. } => "TRAVEL_NO_ROUTE",
            Self::Unprepared => "TRAVEL_UNPREPARED",
            Self::Misplaced { .. } => "TRAVEL_MISPLACED",
            Self::Oracle(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::Env;
    use crate::state::GameStatus;
    use crate::test_support::{
        TestCatalog, fixed_rng, iron_shield, player_with, steel_sword, sword, wooden_shield,
    };

    #[test]
    fn village_to_shop_is_unconditional() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(100);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = GameState::default();

        let action = TravelAction::new(Location::Blacksmith);
        action.pre_validate(&state, &env).unwrap();
        let events = action.apply(&mut state, &env).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::Travelled {
                from: Location::Village,
                to: Location::Blacksmith
            }]
        );
        assert_eq!(state.player.location, Location::Blacksmith);
    }

    #[test]
    fn mountain_requires_steel_sword_and_armor() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(100);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let action = TravelAction::new(Location::Mountain);

        let underequipped = GameState::new(0, player_with(vec![sword(), iron_shield()]));
        assert_eq!(
            action.pre_validate(&underequipped, &env),
            Err(TravelError::Unprepared)
        );

        let ready = GameState::new(0, player_with(vec![steel_sword(), wooden_shield()]));
        assert_eq!(action.pre_validate(&ready, &env), Ok(()));
    }

    #[test]
    fn mountain_gate_can_be_switched_off() {
        let catalog = TestCatalog;
        let config = GameConfig::default().with_mountain_gate(false);
        let rng = fixed_rng(100);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();

        let state = GameState::default();
        assert_eq!(
            TravelAction::new(Location::Mountain).pre_validate(&state, &env),
            Ok(())
        );
    }

    #[test]
    fn shops_only_lead_back_to_the_village() {
        let env = GameEnv::empty();
        let mut state = GameState::default();
        state.player.location = Location::Market;

        assert_eq!(
            TravelAction::new(Location::Forest).pre_validate(&state, &env),
            Err(TravelError::NoRoute {
                from: Location::Market,
                to: Location::Forest
            })
        );
        assert_eq!(TravelAction::to_village().pre_validate(&state, &env), Ok(()));
    }

    #[test]
    fn entering_the_forest_starts_a_fight() {
        let catalog = TestCatalog;
        let config = GameConfig::default();
        let rng = fixed_rng(100);
        let env = Env::with_all(&catalog, &config, &rng).into_game_env();
        let mut state = GameState::new(0, player_with(vec![sword()]));

        let events = TravelAction::new(Location::Forest)
            .apply(&mut state, &env)
            .unwrap();

        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], GameEvent::CombatResolved(_)));
        assert_eq!(state.player.location, Location::Forest);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn failed_forest_fight_leaves_the_player_in_the_village() {
        let env = GameEnv::empty();
        let mut state = GameState::new(0, player_with(vec![sword()]));
        let before = state.clone();

        let error = TravelAction::new(Location::Forest)
            .apply(&mut state, &env)
            .unwrap_err();

        assert_eq!(error, TravelError::Oracle(OracleError::ConfigNotAvailable));
        assert_eq!(state, before);
    }
}
