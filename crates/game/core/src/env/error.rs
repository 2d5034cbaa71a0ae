//! Errors for missing content behind the [`Env`](super::Env) oracles.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Content an action asked for but the session was not given.
///
/// A session built from a validated `ContentBundle` never hits these; seeing
/// one means the environment was assembled by hand and left a slot empty.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("no item catalog in this session")]
    ItemsNotAvailable,

    #[error("no rule set in this session")]
    ConfigNotAvailable,

    #[error("no random source in this session")]
    RngNotAvailable,

    /// A rule points at an item the catalog does not define (loot, top-tier weapon).
    #[error("item {0} is missing from the catalog")]
    ItemNotFound(ItemHandle),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            Self::ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
