//! Traits describing read-only game data.
//!
//! Oracles expose the item catalog, the rule set and the random source. The
//! [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod config;
mod error;
mod items;
mod rng;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use items::ItemOracle;
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates read-only oracles required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I, C, R>
where
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: Option<&'a I>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn ConfigOracle + 'a, dyn RngOracle + 'a>;

impl<'a, I, C, R> Env<'a, I, C, R>
where
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, config: Option<&'a C>, rng: Option<&'a R>) -> Self {
        Self { items, config, rng }
    }

    pub fn with_all(items: &'a I, config: &'a C, rng: &'a R) -> Self {
        Self::new(Some(items), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the active rule set.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn rules(&self) -> Result<&'a crate::config::GameConfig, OracleError> {
        Ok(self.config()?.rules())
    }
}

impl<'a, I, C, R> Env<'a, I, C, R>
where
    I: ItemOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(items, config, rng)
    }
}
