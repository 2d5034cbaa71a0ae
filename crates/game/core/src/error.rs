//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `TravelError`, `ShopError`) are defined in their
//! respective modules alongside the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Recoverable by retry**: Player-facing errors never mutate state, so the
//!   presentation layer can simply re-prompt
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The player can retry after changing something (more gold, better gear)
/// - **Validation**: Invalid input that should be re-prompted
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating missing content or corrupted state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once circumstances change.
    ///
    /// Examples: not enough gold, not equipped for the mountain
    Recoverable,

    /// Validation error - invalid input, re-prompt the player.
    ///
    /// Examples: menu choice out of range, unknown inventory slot
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: health outside its range after an action
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the session cannot continue.
    ///
    /// Examples: missing item catalog, loot item absent from the catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the player can keep playing after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
