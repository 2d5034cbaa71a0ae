//! Combat resolution system.
//!
//! This module resolves the scripted monster and dragon fights. Apart from
//! the loot item, which the caller rolls for, everything here is
//! deterministic integer arithmetic.
//!
//! # Core Functions
//!
//! - `engage`: Start phase (loadout, unarmed retreat, dragon confirmation)
//! - `CombatResolver::resolve`: Alternating turns until won, lost or retreated
//! - `incoming_damage`: Enemy damage after armor (never below 1)

pub mod damage;
pub mod encounter;
pub mod equipment;
pub mod resolver;

pub use damage::{apply_damage, incoming_damage};
pub use encounter::{Encounter, EncounterKind};
pub use equipment::Loadout;
pub use resolver::{
    CombatOutcome, CombatPhase, CombatReport, CombatResolver, CombatRound, Consent, EnemyHit,
    Engagement, RetreatReason, engage,
};
