//! Locations and their menus.
//!
//! Every location owns one static [`LocationMenu`]. The presentation layer
//! renders the table and resolves the player's numeric choice through
//! [`LocationMenu::choose`]; the engine never sees raw input.

use crate::error::{ErrorSeverity, GameError};

/// The five places the adventurer can stand.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Location {
    #[default]
    Village,
    Blacksmith,
    Market,
    Forest,
    /// The dragon's lair.
    Mountain,
}

impl Location {
    /// Returns the menu table for this location.
    pub fn menu(self) -> &'static LocationMenu {
        match self {
            Location::Village => &VILLAGE_MENU,
            Location::Blacksmith => &BLACKSMITH_MENU,
            Location::Market => &MARKET_MENU,
            Location::Forest => &FOREST_MENU,
            Location::Mountain => &MOUNTAIN_MENU,
        }
    }

    /// Returns the shop at this location, if any.
    pub fn shop(self) -> Option<Shop> {
        match self {
            Location::Blacksmith => Some(Shop::Blacksmith),
            Location::Market => Some(Shop::Market),
            _ => None,
        }
    }

    /// Only the village connects to other locations; everything else leads back.
    pub fn can_reach(self, destination: Location) -> bool {
        match (self, destination) {
            (Location::Village, Location::Village) => false,
            (Location::Village, _) => true,
            (_, Location::Village) => true,
            _ => false,
        }
    }
}

/// Places that sell items.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Shop {
    Blacksmith,
    Market,
}

impl Shop {
    pub fn location(self) -> Location {
        match self {
            Shop::Blacksmith => Location::Blacksmith,
            Shop::Market => Location::Market,
        }
    }
}

/// What a menu entry does once chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Travel(Location),
    ReturnToVillage,
    /// Opens the shop sub-menu; purchases are separate actions.
    Browse(Shop),
    SearchForMonsters,
    FightDragon,
    CheckStatus,
    /// Opens the inventory prompt; consuming an item is a separate action.
    UseItem,
    Help,
    Quit,
}

/// A single numbered line in a location menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

const fn entry(label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { label, action }
}

/// Header, flavour text and numbered entries for one location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationMenu {
    pub location: Location,
    pub title: &'static str,
    pub description: &'static str,
    pub entries: &'static [MenuEntry],
}

impl LocationMenu {
    /// Number of selectable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a 1-based menu choice as typed by the player.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer in
    /// `1..=len` is rejected.
    pub fn choose(&self, input: &str) -> Result<MenuAction, MenuError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MenuError::Empty);
        }

        let choice: usize = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        choice
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.action)
            .ok_or(MenuError::OutOfRange {
                choice,
                max: self.len(),
            })
    }
}

/// Rejected menu input. The state is never touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Please enter a choice")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Choice {choice} is not on the menu (1-{max})")]
    OutOfRange { choice: usize, max: usize },
}

impl GameError for MenuError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "MENU_EMPTY_INPUT",
            Self::NotANumber(_) => "MENU_NOT_A_NUMBER",
            Self::OutOfRange { .. } => "MENU_OUT_OF_RANGE",
        }
    }
}

// ===== state table =====

static VILLAGE_MENU: LocationMenu = LocationMenu {
    location: Location::Village,
    title: "Village",
    description: "You are in a peaceful village. Merchants call out their wares and the \
                  mountain looms in the distance.",
    entries: &[
        entry("Go to blacksmith", MenuAction::Travel(Location::Blacksmith)),
        entry("Go to market", MenuAction::Travel(Location::Market)),
        entry("Enter forest", MenuAction::Travel(Location::Forest)),
        entry("Travel to the mountain", MenuAction::Travel(Location::Mountain)),
        entry("Check status", MenuAction::CheckStatus),
        entry("Use item", MenuAction::UseItem),
        entry("Help", MenuAction::Help),
        entry("Quit game", MenuAction::Quit),
    ],
};

static BLACKSMITH_MENU: LocationMenu = LocationMenu {
    location: Location::Blacksmith,
    title: "Blacksmith",
    description: "The forge roars. Swords and shields hang along the walls.",
    entries: &[
        entry("Browse items for sale", MenuAction::Browse(Shop::Blacksmith)),
        entry("Return to village", MenuAction::ReturnToVillage),
        entry("Check status", MenuAction::CheckStatus),
        entry("Use item", MenuAction::UseItem),
        entry("Help", MenuAction::Help),
        entry("Quit game", MenuAction::Quit),
    ],
};

static MARKET_MENU: LocationMenu = LocationMenu {
    location: Location::Market,
    title: "Market",
    description: "Stalls crowd the square. A herbalist sells potions in small glass vials.",
    entries: &[
        entry("Browse items for sale", MenuAction::Browse(Shop::Market)),
        entry("Return to village", MenuAction::ReturnToVillage),
        entry("Check status", MenuAction::CheckStatus),
        entry("Use item", MenuAction::UseItem),
        entry("Help", MenuAction::Help),
        entry("Quit game", MenuAction::Quit),
    ],
};

static FOREST_MENU: LocationMenu = LocationMenu {
    location: Location::Forest,
    title: "Forest",
    description: "Tall trees block out the sun. Something moves in the undergrowth.",
    entries: &[
        entry("Search for monsters", MenuAction::SearchForMonsters),
        entry("Return to village", MenuAction::ReturnToVillage),
        entry("Check status", MenuAction::CheckStatus),
        entry("Use item", MenuAction::UseItem),
        entry("Help", MenuAction::Help),
        entry("Quit game", MenuAction::Quit),
    ],
};

static MOUNTAIN_MENU: LocationMenu = LocationMenu {
    location: Location::Mountain,
    title: "Dragon's Lair",
    description: "Smoke curls from a cave high on the mountain. The dragon is waiting.",
    entries: &[
        entry("Fight the dragon", MenuAction::FightDragon),
        entry("Return to village", MenuAction::ReturnToVillage),
        entry("Check status", MenuAction::CheckStatus),
        entry("Use item", MenuAction::UseItem),
        entry("Help", MenuAction::Help),
        entry("Quit game", MenuAction::Quit),
    ],
};
