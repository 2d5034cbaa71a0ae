//! Damage calculation.

use crate::config::GameConfig;

/// Damage an enemy hit deals after armor.
///
/// # Formula
///
/// ```text
/// damage = max(MIN_DAMAGE, damage_per_turn - armor)
/// ```
///
/// Armor never reduces a hit below [`GameConfig::MIN_DAMAGE`].
pub fn incoming_damage(damage_per_turn: u32, armor: u32) -> u32 {
    damage_per_turn
        .saturating_sub(armor)
        .max(GameConfig::MIN_DAMAGE)
}

/// Apply damage to current health.
///
/// Returns the new health value (clamped to 0).
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_reduces_damage() {
        assert_eq!(incoming_damage(15, 0), 15);
        assert_eq!(incoming_damage(15, 5), 10);
        assert_eq!(incoming_damage(20, 12), 8);
    }

    #[test]
    fn damage_is_never_below_one() {
        for armor in [9, 10, 11, 50, u32::MAX] {
            assert!(incoming_damage(10, armor) >= 1);
        }
        assert_eq!(incoming_damage(0, 0), 1);
    }

    #[test]
    fn health_bottoms_out_at_zero() {
        assert_eq!(apply_damage(100, 15), 85);
        assert_eq!(apply_damage(5, 30), 0);
    }
}
