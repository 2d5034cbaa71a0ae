//! Transient opponents.

use crate::config::{EncounterRules, Handicap};

/// Which scripted opponent the player faces.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EncounterKind {
    Monster,
    Dragon,
}

/// Opponent stats for a single fight. Created when combat starts and dropped
/// with the report.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub kind: EncounterKind,
    pub name: String,
    /// Remaining health; may go below zero on the killing blow.
    pub health: i64,
    pub damage_per_turn: u32,
    /// True when the player accepted an under-equipped dragon fight.
    pub handicapped: bool,
}

impl Encounter {
    pub fn new(kind: EncounterKind, rules: &EncounterRules) -> Self {
        Self {
            kind,
            name: rules.name.clone(),
            health: i64::from(rules.health),
            damage_per_turn: rules.damage_per_turn,
            handicapped: false,
        }
    }

    /// Makes the opponent tougher for an under-equipped fight.
    pub fn with_handicap(mut self, handicap: Handicap) -> Self {
        self.health += i64::from(handicap.health);
        self.damage_per_turn += handicap.damage_per_turn;
        self.handicapped = true;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Remaining health as shown to the player (never negative).
    pub fn health_left(&self) -> u32 {
        self.health.clamp(0, i64::from(u32::MAX)) as u32
    }
}
