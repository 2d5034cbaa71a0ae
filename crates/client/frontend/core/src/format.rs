//! Turns engine output into player-facing messages.
//!
//! Everything here is plain text with a [`MessageLevel`]; frontends decide
//! how to style and where to print it.
use game_core::{
    CombatOutcome, CombatReport, EncounterKind, ErrorSeverity, ExecuteError, GameError,
    GameEvent, ItemKind, ItemUse, Location, MenuError, RetreatReason, StatusReport,
};

use crate::config::MessageConfig;
use crate::message::{MessageEntry, MessageLevel};

/// Help screen, grouped by heading.
pub const HELP_SECTIONS: &[(&str, &[&str])] = &[
    (
        "Movement",
        &[
            "In the village, pick a destination from the numbered menu",
            "Everywhere else, choose the return option to go back to the village",
        ],
    ),
    (
        "Battle",
        &[
            "Your best weapon and armor are picked automatically",
            "Weapons increase your damage; armor reduces incoming damage",
            "Monsters roam the forest. The dragon waits in the mountains",
            "Without a weapon you are forced to retreat and get hurt doing it",
        ],
    ),
    (
        "Items",
        &[
            "Health potions restore health by their effect value",
            "Buy potions at the market and weapons or armor at the blacksmith",
        ],
    ),
    (
        "Tips",
        &[
            "Save potions for tough fights like the dragon",
            "A Steel Sword and a shield open the road to the mountain",
            "Monsters pay gold and sometimes drop a potion",
            "Health never goes above 100",
        ],
    ),
];

/// Messages for one event, in display order.
pub fn describe_event(event: &GameEvent, config: &MessageConfig) -> Vec<MessageEntry> {
    match event {
        GameEvent::Travelled { to, .. } => vec![MessageEntry::info(arrival(*to))],
        GameEvent::Purchased(purchase) => vec![
            MessageEntry::success(format!(
                "You bought a {} for {} gold!",
                purchase.item.name, purchase.item.cost
            )),
            MessageEntry::info(format!("Gold remaining: {}", purchase.gold_left)),
        ],
        GameEvent::ItemUsed(ItemUse::Consumed { item, health, .. }) => vec![
            MessageEntry::info(format!("You drink the {}.", item.name)),
            MessageEntry::success(format!("Health restored to: {health}")),
        ],
        GameEvent::ItemUsed(ItemUse::Equipped { item }) => {
            let text = match item.kind() {
                ItemKind::Weapon => format!(
                    "You ready your {} for battle. Weapons are picked automatically in combat.",
                    item.name
                ),
                _ => format!(
                    "You strap on the {}. Armor is picked automatically in combat.",
                    item.name
                ),
            };
            vec![MessageEntry::info(text)]
        }
        GameEvent::CombatResolved(report) => describe_combat(report, config.show_combat_rounds),
        GameEvent::ConfirmationRequired { opponent } => vec![
            MessageEntry::warning(format!("Warning: The {opponent} is a deadly foe.")),
            MessageEntry::warning(
                "Without a Steel Sword and decent armor, this fight will be nearly impossible.",
            ),
        ],
        GameEvent::StatusReported(report) => {
            status_lines(report).into_iter().map(MessageEntry::info).collect()
        }
        GameEvent::HelpRequested => help_lines().into_iter().map(MessageEntry::info).collect(),
        GameEvent::Victory => vec![
            MessageEntry::success("*** VICTORY! You have slain the dragon! ***"),
            MessageEntry::success("You have completed your quest and saved the land!"),
        ],
        GameEvent::Defeat => vec![MessageEntry::error("Game Over! You have fallen.")],
        // The farewell is printed by the frontend on every exit.
        GameEvent::Quit => Vec::new(),
    }
}

fn arrival(to: Location) -> &'static str {
    match to {
        Location::Village => "You return to the village center.",
        Location::Blacksmith => "You enter the blacksmith's shop.",
        Location::Market => "You enter the market.",
        Location::Forest => "You venture into the forest...",
        Location::Mountain => "You travel to the mountains. The dragon's lair is nearby.",
    }
}

/// Full log of one fight.
///
/// With `show_rounds` off, the strikes are replaced by a one-line summary.
pub fn describe_combat(report: &CombatReport, show_rounds: bool) -> Vec<MessageEntry> {
    let name = &report.encounter.name;
    let mut lines = vec![MessageEntry::info(format!("--- Combat: {name} ---"))];

    match report.outcome {
        CombatOutcome::Retreated(RetreatReason::NoWeaponEquipped) => {
            lines.push(MessageEntry::warning("You have no weapon to fight with!"));
            let taunt = match report.encounter.kind {
                EncounterKind::Dragon => format!(
                    "The {name} laughs at your empty hands and breathes fire! You lose {} health.",
                    report.retreat_penalty
                ),
                EncounterKind::Monster => format!(
                    "The {name} catches you unarmed. You lose {} health.",
                    report.retreat_penalty
                ),
            };
            lines.push(MessageEntry::warning(taunt));
            lines.push(MessageEntry::info("Without a weapon, you must retreat!"));
            return lines;
        }
        CombatOutcome::Retreated(RetreatReason::Declined) => {
            lines.push(MessageEntry::info(
                "You wisely decide to return to the village to prepare.",
            ));
            return lines;
        }
        CombatOutcome::Won | CombatOutcome::Lost => {}
    }

    if let Some(weapon) = &report.loadout.weapon {
        lines.push(MessageEntry::info(format!(
            "You equip: {} (damage: {}).",
            weapon.name, weapon.effect
        )));
    }
    match &report.loadout.armor {
        Some(armor) => lines.push(MessageEntry::info(format!(
            "You shield yourself with: {} (protection: {}).",
            armor.name, armor.effect
        ))),
        None => lines.push(MessageEntry::info("You have no armor equipped.")),
    }
    if report.encounter.handicapped {
        lines.push(MessageEntry::warning(
            "You brave the lair despite being underprepared...",
        ));
    }

    if show_rounds {
        for round in &report.rounds {
            lines.push(MessageEntry::info(format!(
                "You strike the {name} for {} damage! ({} health left)",
                round.player_hit, round.encounter_health_left
            )));
            if let Some(hit) = round.enemy_hit {
                let text = if hit.absorbed() > 0 {
                    format!(
                        "The {name} attacks you for {} damage. Your armor reduces it by {}. You take {} damage.",
                        hit.raw,
                        hit.absorbed(),
                        hit.damage
                    )
                } else {
                    format!(
                        "The {name} attacks you for {} damage. Nothing protects you. You take {} damage.",
                        hit.raw, hit.damage
                    )
                };
                lines.push(MessageEntry::warning(text));
            }
        }
    } else {
        lines.push(MessageEntry::info(format!(
            "The fight lasts {} rounds.",
            report.rounds.len()
        )));
    }

    match report.outcome {
        CombatOutcome::Won => {
            lines.push(MessageEntry::success(format!("You defeated the {name}!")));
            lines.push(MessageEntry::success(format!(
                "You found {} gold!",
                report.gold_reward
            )));
            if let Some(loot) = &report.loot {
                lines.push(MessageEntry::success(format!(
                    "The {name} dropped a {}!",
                    loot.name
                )));
            }
        }
        CombatOutcome::Lost => {
            lines.push(MessageEntry::error("You were slain in battle..."));
        }
        CombatOutcome::Retreated(_) => {}
    }

    lines.push(MessageEntry::info(format!(
        "Health is now: {}",
        report.health_after
    )));
    lines
}

/// Status screen lines.
pub fn status_lines(report: &StatusReport) -> Vec<String> {
    let mut lines = vec![
        format!("=== {}'s Status ===", report.name),
        format!("Health: {}/{}", report.health, report.max_health),
        format!("Gold: {}", report.gold),
        format!("Location: {}", report.location.menu().title),
        "Inventory:".to_string(),
    ];

    if report.inventory.is_empty() {
        lines.push("   Nothing in inventory".to_string());
    } else {
        lines.extend(
            report
                .inventory
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    format!("   {}. {} - {}", index + 1, item.name, item.description)
                }),
        );
    }

    lines
}

fn help_lines() -> Vec<String> {
    let mut lines = vec!["=== AVAILABLE COMMANDS ===".to_string()];
    for (heading, entries) in HELP_SECTIONS {
        lines.push(format!("{heading}:"));
        lines.extend(entries.iter().map(|entry| format!("- {entry}")));
    }
    lines
}

/// An engine rejection as shown to the player.
pub fn describe_error(error: &ExecuteError) -> MessageEntry {
    let level = match error.severity() {
        ErrorSeverity::Recoverable | ErrorSeverity::Validation => MessageLevel::Warning,
        ErrorSeverity::Internal | ErrorSeverity::Fatal => MessageLevel::Error,
    };
    MessageEntry::new(format!("Error: {}", error.reason()), None, level)
}

pub fn describe_menu_error(error: &MenuError) -> MessageEntry {
    MessageEntry::warning(format!("Error: {error}"))
}
