//! Player state: health, gold, position and belongings.

use super::{Inventory, Location};
use crate::config::{GameConfig, PlayerRules};

/// The adventurer.
///
/// Health is private so every change goes through the clamped update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    health: u32,
    pub gold: u32,
    pub location: Location,
    pub inventory: Inventory,
}

impl Player {
    /// Creates a fresh adventurer in the village.
    ///
    /// An empty or whitespace-only name falls back to `rules.default_name`.
    pub fn new(name: &str, rules: &PlayerRules) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            rules.default_name.clone()
        } else {
            trimmed.to_string()
        };

        Self {
            name,
            health: rules.starting_health.min(GameConfig::MAX_HEALTH),
            gold: rules.starting_gold,
            location: Location::Village,
            inventory: Inventory::empty(),
        }
    }

    /// Returns a copy with the given health (clamped).
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(GameConfig::MAX_HEALTH);
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies a signed health change, clamping the result to `0..=MAX_HEALTH`.
    ///
    /// Returns the new health.
    pub fn change_health(&mut self, delta: i64) -> u32 {
        let next = (i64::from(self.health) + delta).clamp(0, i64::from(GameConfig::MAX_HEALTH));
        self.health = next as u32;
        self.health
    }

    /// Restores health, returning how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.change_health(i64::from(amount));
        self.health - before
    }

    /// Removes health, returning how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.change_health(-i64::from(amount));
        before - self.health
    }

    /// Deducts `cost` if affordable and returns the remaining gold.
    ///
    /// Gold is left untouched when the player cannot pay.
    pub fn spend(&mut self, cost: u32) -> Option<u32> {
        let remaining = self.gold.checked_sub(cost)?;
        self.gold = remaining;
        Some(remaining)
    }

    pub fn earn(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("", &PlayerRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_starts_in_village_with_defaults() {
        let player = Player::new("  ", &PlayerRules::default());

        assert_eq!(player.name, "Adventurer");
        assert_eq!(player.health(), 100);
        assert_eq!(player.gold, 20);
        assert_eq!(player.location, Location::Village);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn name_is_trimmed() {
        let player = Player::new("  Aria ", &PlayerRules::default());
        assert_eq!(player.name, "Aria");
    }

    #[test]
    fn health_is_clamped_on_every_change() {
        let mut player = Player::default();

        for delta in [-250, 40, 500, -99, -1, -1, 7] {
            let health = player.change_health(delta);
            assert!(health <= GameConfig::MAX_HEALTH);
        }
        assert_eq!(player.health(), 7);
        assert_eq!(Player::default().with_health(180).health(), 100);
    }

    #[test]
    fn heal_reports_actual_gain() {
        let mut player = Player::default().with_health(80);

        assert_eq!(player.heal(30), 20);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn damage_stops_at_zero() {
        let mut player = Player::default().with_health(5);

        assert_eq!(player.take_damage(15), 5);
        assert_eq!(player.health(), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn spending_is_all_or_nothing() {
        let mut player = Player::default();

        assert_eq!(player.spend(10), Some(10));
        assert_eq!(player.spend(11), None);
        assert_eq!(player.gold, 10);
    }
}
