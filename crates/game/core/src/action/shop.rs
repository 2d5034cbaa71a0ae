use crate::action::{ActionTransition, Purchase};
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Shop};

/// Buys one copy of a shop's stock entry.
///
/// `entry` is 1-based, matching the numbered catalog the player sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuyAction {
    pub shop: Shop,
    pub entry: usize,
}

impl BuyAction {
    pub fn new(shop: Shop, entry: usize) -> Self {
        Self { shop, entry }
    }
}

impl ActionTransition for BuyAction {
    type Error = ShopError;
    type Result = Purchase;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let location = state.player.location;
        if location.shop() != Some(self.shop) {
            return Err(ShopError::NotInShop { shop: self.shop });
        }

        let item = env
            .items()?
            .stock_entry(self.shop, self.entry)
            .ok_or(ShopError::UnknownEntry {
                shop: self.shop,
                entry: self.entry,
            })?;

        if state.player.gold < item.cost {
            return Err(ShopError::InsufficientFunds {
                item: item.name,
                cost: item.cost,
                gold: state.player.gold,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let item = env
            .items()?
            .stock_entry(self.shop, self.entry)
            .ok_or(ShopError::UnknownEntry {
                shop: self.shop,
                entry: self.entry,
            })?;

        let gold = state.player.gold;
        let gold_left = state
            .player
            .spend(item.cost)
            .ok_or_else(|| ShopError::InsufficientFunds {
                item: item.name.clone(),
                cost: item.cost,
                gold,
            })?;
        state.player.inventory.push(item.clone());

        Ok(Purchase {
            shop: self.shop,
            item,
            gold_left,
        })
    }
}

/// Errors raised by shop purchases. None of them change the state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("You are not at the {shop}")]
    NotInShop { shop: Shop },

    #[error("The {shop} has no item number {entry}")]
    UnknownEntry { shop: Shop, entry: usize },

    #[error("You cannot afford the {item} ({cost} gold, you have {gold})")]
    InsufficientFunds { item: String, cost: u32, gold: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInShop { .. } | Self::UnknownEntry { .. } => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInShop { .. } => "SHOP_NOT_IN_SHOP",
            Self::UnknownEntry { .. } => "SHOP_UNKNOWN_ENTRY",
            Self::InsufficientFunds { .. } => "SHOP_INSUFFICIENT_FUNDS",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
