//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, BuyAction, ConfirmAction, EngageAction, TravelAction, UseItemAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameStatus, PendingDecision, StateError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("travel action failed: {0}")]
    Travel(TransitionPhaseError<<TravelAction as ActionTransition>::Error>),

    #[error("buy action failed: {0}")]
    Buy(TransitionPhaseError<<BuyAction as ActionTransition>::Error>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<<UseItemAction as ActionTransition>::Error>),

    #[error("engage action failed: {0}")]
    Engage(TransitionPhaseError<<EngageAction as ActionTransition>::Error>),

    #[error("confirm action failed: {0}")]
    Confirm(TransitionPhaseError<<ConfirmAction as ActionTransition>::Error>),

    #[error("the game is over ({status})")]
    GameOver { status: GameStatus },

    #[error("a decision is pending: {decision:?}")]
    DecisionPending { decision: PendingDecision },

    #[error("state invariant violated: {0}")]
    InvalidState(#[from] StateError),
}

impl ExecuteError {
    /// The player-facing message without the pipeline prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Travel(e) => e.error.to_string(),
            Self::Buy(e) => e.error.to_string(),
            Self::UseItem(e) => e.error.to_string(),
            Self::Engage(e) => e.error.to_string(),
            Self::Confirm(e) => e.error.to_string(),
            other => other.to_string(),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Travel(e) => e.error.severity(),
            Self::Buy(e) => e.error.severity(),
            Self::UseItem(e) => e.error.severity(),
            Self::Engage(e) => e.error.severity(),
            Self::Confirm(e) => e.error.severity(),
            Self::GameOver { .. } => ErrorSeverity::Fatal,
            Self::DecisionPending { .. } => ErrorSeverity::Validation,
            Self::InvalidState(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Travel(e) => e.error.error_code(),
            Self::Buy(e) => e.error.error_code(),
            Self::UseItem(e) => e.error.error_code(),
            Self::Engage(e) => e.error.error_code(),
            Self::Confirm(e) => e.error.error_code(),
            Self::GameOver { .. } => "ENGINE_GAME_OVER",
            Self::DecisionPending { .. } => "ENGINE_DECISION_PENDING",
            Self::InvalidState(e) => e.error_code(),
        }
    }
}
