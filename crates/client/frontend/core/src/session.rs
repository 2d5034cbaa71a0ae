//! Session handle the frontends drive.
//!
//! A [`GameSession`] owns the game state together with the content it runs
//! against and is the only place that builds a [`game_core::GameEnv`]. Frontends submit
//! actions and render the returned events; they never mutate state directly.
use game_content::ContentBundle;
use game_core::{
    Action, Env, ExecuteError, GameConfig, GameEngine, GameError, GameEvent, GameState,
    GameStatus, Item, LocationMenu, PcgRng, Shop,
};

/// Everything needed to start a session except the player's name, which the
/// frontend asks for.
#[derive(Clone, Debug)]
pub struct SessionSetup {
    pub content: ContentBundle,
    pub seed: u64,
}

impl SessionSetup {
    pub fn new(content: ContentBundle, seed: u64) -> Self {
        Self { content, seed }
    }

    /// Creates the player and opens the session.
    pub fn start(self, name: &str) -> GameSession {
        let state = GameState::start(self.seed, name, &self.content.config);
        tracing::info!(
            player = %state.player.name,
            seed = self.seed,
            "Session started"
        );
        GameSession {
            content: self.content,
            state,
            rng: PcgRng,
        }
    }
}

/// A running game.
#[derive(Clone, Debug)]
pub struct GameSession {
    content: ContentBundle,
    state: GameState,
    rng: PcgRng,
}

impl GameSession {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Menu of the player's current location.
    pub fn menu(&self) -> &'static LocationMenu {
        self.state.player.location.menu()
    }

    /// A shop's catalog in display order.
    pub fn stock(&self, shop: Shop) -> Vec<Item> {
        self.content.catalog.stock_items(shop).cloned().collect()
    }

    /// Runs `action` through the engine.
    ///
    /// Rejected actions leave the state unchanged and are logged at `warn`.
    pub fn execute(&mut self, action: Action) -> Result<Vec<GameEvent>, ExecuteError> {
        let env = Env::with_all(&self.content.catalog, &self.content.config, &self.rng)
            .into_game_env();
        let nonce = self.state.nonce;

        let result = GameEngine::new(&mut self.state).execute(env, &action);

        match result {
            Ok(events) => {
                tracing::debug!(
                    nonce,
                    action = action.as_snake_case(),
                    events = events.len(),
                    health = self.state.player.health(),
                    gold = self.state.player.gold,
                    location = %self.state.player.location,
                    "Action executed"
                );
                if self.state.is_over() {
                    tracing::info!(status = %self.state.status, "Session finished");
                }
                Ok(events)
            }
            Err(error) => {
                tracing::warn!(
                    nonce,
                    action = action.as_snake_case(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action rejected: {}",
                    error
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{BuyAction, Location, QuitAction, TravelAction};

    fn session() -> GameSession {
        SessionSetup::new(ContentBundle::builtin(), 7).start("  Aria ")
    }

    #[test]
    fn start_uses_the_rule_set() {
        let session = session();
        let player = &session.state().player;

        assert_eq!(player.name, "Aria");
        assert_eq!(player.health(), 100);
        assert_eq!(player.gold, 20);
        assert_eq!(player.location, Location::Village);
        assert_eq!(session.menu().title, "Village");
    }

    #[test]
    fn blacksmith_stock_is_listed_in_order() {
        let names: Vec<_> = session()
            .stock(Shop::Blacksmith)
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, ["Sword", "Steel Sword", "Wooden Shield", "Iron Shield"]);
    }

    #[test]
    fn execute_advances_and_rejects_without_side_effects() {
        let mut session = session();

        session
            .execute(TravelAction::new(Location::Blacksmith).into())
            .unwrap();
        let before = session.state().clone();

        // Steel Sword costs 20; a second purchase cannot be afforded.
        session.execute(BuyAction::new(Shop::Blacksmith, 2).into()).unwrap();
        assert_eq!(session.state().player.gold, 0);
        assert!(session.execute(BuyAction::new(Shop::Blacksmith, 1).into()).is_err());
        assert_eq!(session.state().player.inventory.len(), 1);
        assert_ne!(session.state(), &before);

        session.execute(Action::Quit(QuitAction)).unwrap();
        assert!(session.is_over());
        assert_eq!(session.status(), GameStatus::Quit);
    }
}
