//! Game configuration constants and tunable parameters.
//!
//! [`GameConfig::default`] is the canonical rule set. Content files may
//! override individual fields; anything left out keeps its default.

use crate::state::ItemHandle;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Starting values for a fresh adventurer.
    pub player: PlayerRules,

    /// Regular forest monster.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "encounter_overrides::monster")
    )]
    pub monster: EncounterRules,

    /// Boss waiting on the mountain.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "encounter_overrides::dragon")
    )]
    pub dragon: EncounterRules,

    /// Extra strength granted to the dragon when the player fights it under-equipped.
    pub handicap: Handicap,

    /// Potion drop after a monster victory.
    pub loot: LootRules,

    /// Equipment gate in front of the mountain.
    pub gear: GearRules,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Health is always clamped to `0..=MAX_HEALTH`.
    pub const MAX_HEALTH: u32 = 100;
    /// Lowest damage an enemy hit can deal, whatever the armor.
    pub const MIN_DAMAGE: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;
    pub const DEFAULT_STARTING_GOLD: u32 = 20;
    pub const DEFAULT_PLAYER_NAME: &'static str = "Adventurer";
    pub const DEFAULT_DROP_CHANCE_PERCENT: u32 = 50;
    /// Health potion in the built-in catalog.
    pub const DEFAULT_LOOT_ITEM: ItemHandle = ItemHandle(1);
    /// Steel sword in the built-in catalog.
    pub const DEFAULT_TOP_TIER_WEAPON: ItemHandle = ItemHandle(3);

    pub fn new() -> Self {
        Self {
            player: PlayerRules::default(),
            monster: EncounterRules::monster(),
            dragon: EncounterRules::dragon(),
            handicap: Handicap::default(),
            loot: LootRules::default(),
            gear: GearRules::default(),
        }
    }

    /// Returns a copy of this configuration with the mountain gate switched on or off.
    pub fn with_mountain_gate(mut self, required: bool) -> Self {
        self.gear.require_gear_for_mountain = required;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Starting values for the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerRules {
    pub starting_health: u32,
    pub starting_gold: u32,
    /// Name used when the player leaves the name prompt empty.
    pub default_name: String,
}

impl Default for PlayerRules {
    fn default() -> Self {
        Self {
            starting_health: GameConfig::DEFAULT_STARTING_HEALTH,
            starting_gold: GameConfig::DEFAULT_STARTING_GOLD,
            default_name: GameConfig::DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

/// Stats and payouts for one kind of encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterRules {
    pub name: String,
    pub health: u32,
    pub damage_per_turn: u32,
    pub gold_reward: u32,
    /// Health lost when the player shows up without a weapon.
    pub retreat_penalty: u32,
}

impl EncounterRules {
    pub fn monster() -> Self {
        Self {
            name: "Forest Monster".to_string(),
            health: 20,
            damage_per_turn: 10,
            gold_reward: 10,
            retreat_penalty: 20,
        }
    }

    pub fn dragon() -> Self {
        Self {
            name: "Dragon".to_string(),
            health: 50,
            damage_per_turn: 20,
            gold_reward: 100,
            retreat_penalty: 40,
        }
    }
}

/// `[monster]` and `[dragon]` tables only list the fields they change; the
/// rest comes from the matching built-in encounter.
#[cfg(feature = "serde")]
mod encounter_overrides {
    use serde::{Deserialize, Deserializer};

    use super::EncounterRules;

    #[derive(Deserialize)]
    struct Overrides {
        name: Option<String>,
        health: Option<u32>,
        damage_per_turn: Option<u32>,
        gold_reward: Option<u32>,
        retreat_penalty: Option<u32>,
    }

    impl Overrides {
        fn over(self, base: EncounterRules) -> EncounterRules {
            EncounterRules {
                name: self.name.unwrap_or(base.name),
                health: self.health.unwrap_or(base.health),
                damage_per_turn: self.damage_per_turn.unwrap_or(base.damage_per_turn),
                gold_reward: self.gold_reward.unwrap_or(base.gold_reward),
                retreat_penalty: self.retreat_penalty.unwrap_or(base.retreat_penalty),
            }
        }
    }

    pub(super) fn monster<'de, D>(deserializer: D) -> Result<EncounterRules, D::Error>
    where
        D: Deserializer<'de>,
    {
        Overrides::deserialize(deserializer).map(|o| o.over(EncounterRules::monster()))
    }

    pub(super) fn dragon<'de, D>(deserializer: D) -> Result<EncounterRules, D::Error>
    where
        D: Deserializer<'de>,
    {
        Overrides::deserialize(deserializer).map(|o| o.over(EncounterRules::dragon()))
    }
}

/// Bonus applied to the dragon when the player accepts an under-equipped fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Handicap {
    pub health: u32,
    pub damage_per_turn: u32,
}

impl Default for Handicap {
    fn default() -> Self {
        Self {
            health: 20,
            damage_per_turn: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LootRules {
    pub item: ItemHandle,
    /// Chance in percent (0..=100) that a defeated monster drops `item`.
    pub drop_chance_percent: u32,
}

impl Default for LootRules {
    fn default() -> Self {
        Self {
            item: GameConfig::DEFAULT_LOOT_ITEM,
            drop_chance_percent: GameConfig::DEFAULT_DROP_CHANCE_PERCENT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GearRules {
    /// Weapon that, together with any armor, counts as "good equipment".
    pub top_tier_weapon: ItemHandle,
    /// Refuse the village → mountain trip unless the player has good equipment.
    pub require_gear_for_mountain: bool,
}

impl Default for GearRules {
    fn default() -> Self {
        Self {
            top_tier_weapon: GameConfig::DEFAULT_TOP_TIER_WEAPON,
            require_gear_for_mountain: true,
        }
    }
}
