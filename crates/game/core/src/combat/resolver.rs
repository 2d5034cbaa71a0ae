//! Per-encounter combat state machine.
//!
//! ```text
//! Start ──no weapon──▶ Retreated
//!   │
//!   ▼
//! PlayerTurn ──encounter ≤ 0──▶ Won
//!   │
//!   ▼
//! EnemyTurn ──player health 0──▶ Lost
//!   │
//!   └──────────▶ PlayerTurn
//! ```
//!
//! [`engage`] runs the `Start` phase and handles the dragon confirmation;
//! [`CombatResolver::resolve`] alternates turns until a terminal phase and
//! pays out the rewards.

use crate::config::{EncounterRules, GameConfig};
use crate::state::{Item, Player};

use super::damage::incoming_damage;
use super::encounter::{Encounter, EncounterKind};
use super::equipment::Loadout;

/// Phase of a running fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    Start,
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
    Retreated,
}

impl CombatPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Retreated)
    }
}

/// Why a fight ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetreatReason {
    /// The player had nothing to strike with and took the retreat penalty.
    NoWeaponEquipped,
    /// The player turned down an under-equipped dragon fight.
    Declined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    Won,
    Lost,
    Retreated(RetreatReason),
}

/// The player's answer to the under-equipped dragon warning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Consent {
    #[default]
    NotAsked,
    Accepted,
    Declined,
}

/// An enemy strike after armor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyHit {
    /// Damage before armor.
    pub raw: u32,
    /// Damage actually taken.
    pub damage: u32,
}

impl EnemyHit {
    pub fn absorbed(&self) -> u32 {
        self.raw.saturating_sub(self.damage)
    }
}

/// One player strike and, if the enemy survived it, the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRound {
    pub player_hit: u32,
    pub encounter_health_left: u32,
    pub enemy_hit: Option<EnemyHit>,
    pub player_health_left: u32,
}

/// Everything that happened in one fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatReport {
    /// Opponent as it stood when the fight ended.
    pub encounter: Encounter,
    pub loadout: Loadout,
    pub rounds: Vec<CombatRound>,
    pub outcome: CombatOutcome,
    /// Gold paid out (0 unless won).
    pub gold_reward: u32,
    /// Item dropped by the enemy and added to the inventory.
    pub loot: Option<Item>,
    /// Health lost to the retreat penalty (0 unless retreated unarmed).
    pub retreat_penalty: u32,
    pub health_before: u32,
    pub health_after: u32,
}

impl CombatReport {
    /// Net health change over the whole fight.
    pub fn health_delta(&self) -> i64 {
        i64::from(self.health_after) - i64::from(self.health_before)
    }

    pub fn is_won(&self) -> bool {
        self.outcome == CombatOutcome::Won
    }
}

/// Result of trying to start a fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Engagement {
    /// Combat can begin.
    Ready(CombatResolver),
    /// The dragon warning must be answered first. Nothing has changed.
    AwaitingConfirmation,
    /// The fight is over before the first strike.
    Retreated(CombatReport),
}

/// Starts a fight against `kind`.
///
/// Runs the `Start` phase: picks the loadout, applies the retreat penalty to
/// an unarmed player, and asks for confirmation before an under-equipped
/// dragon fight. Accepting makes the dragon stronger.
pub fn engage(
    kind: EncounterKind,
    player: &mut Player,
    config: &GameConfig,
    consent: Consent,
) -> Engagement {
    let rules = match kind {
        EncounterKind::Monster => &config.monster,
        EncounterKind::Dragon => &config.dragon,
    };

    let mut resolver = CombatResolver::new(kind, rules, player.health());
    if resolver.step(player) == CombatPhase::Retreated {
        return Engagement::Retreated(resolver.finish(player, None));
    }

    let underequipped = kind == EncounterKind::Dragon
        && !player
            .inventory
            .has_good_equipment(config.gear.top_tier_weapon);
    if !underequipped {
        return Engagement::Ready(resolver);
    }

    match consent {
        Consent::NotAsked => Engagement::AwaitingConfirmation,
        Consent::Declined => {
            resolver.retreat(RetreatReason::Declined);
            Engagement::Retreated(resolver.finish(player, None))
        }
        Consent::Accepted => {
            resolver.encounter = resolver.encounter.with_handicap(config.handicap);
            Engagement::Ready(resolver)
        }
    }
}

/// Drives one encounter from `Start` to a terminal phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatResolver {
    encounter: Encounter,
    loadout: Loadout,
    phase: CombatPhase,
    rounds: Vec<CombatRound>,
    gold_reward: u32,
    retreat_penalty: u32,
    retreat_reason: Option<RetreatReason>,
    health_before: u32,
}

impl CombatResolver {
    pub fn new(kind: EncounterKind, rules: &EncounterRules, health_before: u32) -> Self {
        Self {
            encounter: Encounter::new(kind, rules),
            loadout: Loadout::default(),
            phase: CombatPhase::Start,
            rounds: Vec::new(),
            gold_reward: rules.gold_reward,
            retreat_penalty: rules.retreat_penalty,
            retreat_reason: None,
            health_before,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn rounds(&self) -> &[CombatRound] {
        &self.rounds
    }

    /// Advances one phase and returns the new one. Terminal phases stay put.
    pub fn step(&mut self, player: &mut Player) -> CombatPhase {
        self.phase = match self.phase {
            CombatPhase::Start => {
                self.loadout = Loadout::select(&player.inventory);
                if self.loadout.weapon.is_some() {
                    CombatPhase::PlayerTurn
                } else {
                    player.take_damage(self.retreat_penalty);
                    self.retreat_reason = Some(RetreatReason::NoWeaponEquipped);
                    CombatPhase::Retreated
                }
            }
            CombatPhase::PlayerTurn => {
                let hit = self.loadout.attack().unwrap_or_default();
                self.encounter.health -= i64::from(hit);
                self.rounds.push(CombatRound {
                    player_hit: hit,
                    encounter_health_left: self.encounter.health_left(),
                    enemy_hit: None,
                    player_health_left: player.health(),
                });

                if self.encounter.is_defeated() {
                    CombatPhase::Won
                } else {
                    CombatPhase::EnemyTurn
                }
            }
            CombatPhase::EnemyTurn => {
                let raw = self.encounter.damage_per_turn;
                let damage = incoming_damage(raw, self.loadout.protection());
                player.take_damage(damage);

                if let Some(round) = self.rounds.last_mut() {
                    round.enemy_hit = Some(EnemyHit { raw, damage });
                    round.player_health_left = player.health();
                }

                if player.is_alive() {
                    CombatPhase::PlayerTurn
                } else {
                    CombatPhase::Lost
                }
            }
            terminal => terminal,
        };

        self.phase
    }

    /// Fights to the end and settles rewards.
    ///
    /// `loot` is only handed to the player on a win.
    pub fn resolve(mut self, player: &mut Player, loot: Option<Item>) -> CombatReport {
        // Every enemy turn costs at least one health, so this always ends.
        while !self.phase.is_terminal() {
            self.step(player);
        }
        self.finish(player, loot)
    }

    fn retreat(&mut self, reason: RetreatReason) {
        self.phase = CombatPhase::Retreated;
        self.retreat_reason = Some(reason);
    }

    fn finish(self, player: &mut Player, loot: Option<Item>) -> CombatReport {
        let outcome = match self.phase {
            CombatPhase::Won => CombatOutcome::Won,
            CombatPhase::Lost => CombatOutcome::Lost,
            _ => CombatOutcome::Retreated(
                self.retreat_reason
                    .unwrap_or(RetreatReason::NoWeaponEquipped),
            ),
        };

        let (gold_reward, loot) = if outcome == CombatOutcome::Won {
            player.earn(self.gold_reward);
            if let Some(item) = &loot {
                player.inventory.push(item.clone());
            }
            (self.gold_reward, loot)
        } else {
            (0, None)
        };

        let retreat_penalty = match outcome {
            CombatOutcome::Retreated(RetreatReason::NoWeaponEquipped) => self.retreat_penalty,
            _ => 0,
        };

        CombatReport {
            encounter: self.encounter,
            loadout: self.loadout,
            rounds: self.rounds,
            outcome,
            gold_reward,
            loot,
            retreat_penalty,
            health_before: self.health_before,
            health_after: player.health(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        iron_shield, player_with, potion, steel_sword, sword, wooden_shield,
    };

    fn fight(kind: EncounterKind, player: &mut Player, consent: Consent) -> CombatReport {
        match engage(kind, player, &GameConfig::default(), consent) {
            Engagement::Ready(resolver) => resolver.resolve(player, Some(potion())),
            Engagement::Retreated(report) => report,
            Engagement::AwaitingConfirmation => panic!("unexpected confirmation prompt"),
        }
    }

    #[test]
    fn unarmed_monster_fight_retreats_with_penalty_and_no_rounds() {
        let mut player = player_with(vec![wooden_shield()]);

        let report = fight(EncounterKind::Monster, &mut player, Consent::NotAsked);

        assert_eq!(
            report.outcome,
            CombatOutcome::Retreated(RetreatReason::NoWeaponEquipped)
        );
        assert!(report.rounds.is_empty());
        assert_eq!(report.retreat_penalty, 20);
        assert_eq!(player.health(), 80);
        assert_eq!(report.health_delta(), -20);
    }

    #[test]
    fn unarmed_dragon_fight_costs_more_and_skips_the_warning() {
        let mut player = Player::default();

        let report = fight(EncounterKind::Dragon, &mut player, Consent::NotAsked);

        assert_eq!(
            report.outcome,
            CombatOutcome::Retreated(RetreatReason::NoWeaponEquipped)
        );
        assert_eq!(player.health(), 60);
    }

    #[test]
    fn sword_kills_monster_in_two_strikes() {
        let mut player = player_with(vec![sword()]);

        let report = fight(EncounterKind::Monster, &mut player, Consent::NotAsked);

        assert!(report.is_won());
        assert_eq!(report.rounds.len(), 2);
        // Monster survives the first strike and hits back unarmored.
        assert_eq!(report.rounds[0].enemy_hit, Some(EnemyHit { raw: 10, damage: 10 }));
        assert_eq!(report.rounds[1].enemy_hit, None);
        assert_eq!(player.health(), 90);
        assert_eq!(player.gold, 30);
        assert_eq!(report.loot, Some(potion()));
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn armor_mitigation_is_recorded_per_hit() {
        let mut player = player_with(vec![sword(), wooden_shield()]);

        let report = fight(EncounterKind::Monster, &mut player, Consent::NotAsked);

        let hit = report.rounds[0].enemy_hit.unwrap();
        assert_eq!(hit.damage, 5);
        assert_eq!(hit.absorbed(), 5);
        assert_eq!(player.health(), 95);
    }

    #[test]
    fn well_equipped_dragon_fight_wins_the_reward() {
        let mut player = player_with(vec![steel_sword(), iron_shield()]);

        let report = fight(EncounterKind::Dragon, &mut player, Consent::NotAsked);

        // 50 health / 18 per strike = 3 strikes, two dragon hits of 20 - 12.
        assert!(report.is_won());
        assert_eq!(report.rounds.len(), 3);
        assert_eq!(player.health(), 84);
        assert_eq!(player.gold, 120);
        assert_eq!(report.gold_reward, 100);
    }

    #[test]
    fn underequipped_dragon_asks_first() {
        let mut player = player_with(vec![sword()]);

        let engagement = engage(
            EncounterKind::Dragon,
            &mut player,
            &GameConfig::default(),
            Consent::NotAsked,
        );

        assert_eq!(engagement, Engagement::AwaitingConfirmation);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn declining_the_dragon_changes_nothing() {
        let mut player = player_with(vec![sword()]);

        let report = fight(EncounterKind::Dragon, &mut player, Consent::Declined);

        assert_eq!(report.outcome, CombatOutcome::Retreated(RetreatReason::Declined));
        assert_eq!(report.retreat_penalty, 0);
        assert_eq!(player.health(), 100);
        assert_eq!(player.gold, 20);
    }

    #[test]
    fn accepting_the_dragon_with_a_sword_is_fatal() {
        let mut player = player_with(vec![sword()]);

        let report = fight(EncounterKind::Dragon, &mut player, Consent::Accepted);

        assert!(report.encounter.handicapped);
        assert_eq!(report.outcome, CombatOutcome::Lost);
        assert_eq!(player.health(), 0);
        assert_eq!(report.gold_reward, 0);
        assert!(report.loot.is_none());
    }

    #[test]
    fn health_stays_clamped_through_every_step() {
        let mut player = player_with(vec![sword()]).with_health(15);
        let config = GameConfig::default();

        let Engagement::Ready(mut resolver) =
            engage(EncounterKind::Monster, &mut player, &config, Consent::NotAsked)
        else {
            panic!("armed player should be ready");
        };
        assert_eq!(resolver.phase(), CombatPhase::PlayerTurn);

        while !resolver.phase().is_terminal() {
            resolver.step(&mut player);
            assert!(player.health() <= GameConfig::MAX_HEALTH);
        }
        // 15 health, one monster hit of 10, then the kill.
        assert_eq!(resolver.phase(), CombatPhase::Won);
        assert_eq!(player.health(), 5);
    }
}
