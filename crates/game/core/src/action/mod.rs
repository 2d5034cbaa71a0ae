//! Action domain.
//!
//! Every player decision becomes one [`Action`] variant backed by a struct
//! that implements [`ActionTransition`]. The engine drives each one through
//! `pre_validate → apply → post_validate`.
//!
//! # Module Structure
//!
//! - `travel`: Moving between locations (forest entry triggers a fight)
//! - `shop`: Buying from the blacksmith or the market
//! - `use_item`: Drinking potions, inspecting gear
//! - `combat`: Forest searches, the dragon fight and its confirmation
//! - `session`: Status, help and quit
//! - `types`: Events and results returned to the presentation layer

pub mod combat;
pub mod session;
pub mod shop;
pub mod travel;
pub mod types;
pub mod use_item;

mod transition;

pub use combat::{ConfirmAction, EngageAction, EngageError};
pub use session::{HelpAction, QuitAction, StatusAction};
pub use shop::{BuyAction, ShopError};
pub use transition::ActionTransition;
pub use travel::{TravelAction, TravelError};
pub use types::{GameEvent, ItemUse, Purchase, StatusReport};
pub use use_item::{UseItemAction, UseItemError};

use crate::combat::EncounterKind;
use crate::state::{Location, MenuAction};

/// Top-level action enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Travel(TravelAction),
    Buy(BuyAction),
    UseItem(UseItemAction),
    Engage(EngageAction),
    Confirm(ConfirmAction),
    Status(StatusAction),
    Help(HelpAction),
    Quit(QuitAction),
}

impl Action {
    /// Maps a menu entry to the action it triggers.
    ///
    /// Returns `None` for entries that open a sub-prompt first (browsing a
    /// shop, picking an inventory item); the presentation layer builds the
    /// [`BuyAction`] or [`UseItemAction`] from the follow-up input.
    pub fn from_menu(entry: MenuAction) -> Option<Self> {
        let action = match entry {
            MenuAction::Travel(location) => Action::Travel(TravelAction::new(location)),
            MenuAction::ReturnToVillage => Action::Travel(TravelAction::new(Location::Village)),
            MenuAction::SearchForMonsters => {
                Action::Engage(EngageAction::new(EncounterKind::Monster))
            }
            MenuAction::FightDragon => Action::Engage(EngageAction::new(EncounterKind::Dragon)),
            MenuAction::CheckStatus => Action::Status(StatusAction),
            MenuAction::Help => Action::Help(HelpAction),
            MenuAction::Quit => Action::Quit(QuitAction),
            MenuAction::Browse(_) | MenuAction::UseItem => return None,
        };
        Some(action)
    }

    /// Returns the snake_case name of the action.
    ///
    /// Used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Travel(_) => "travel",
            Action::Buy(_) => "buy",
            Action::UseItem(_) => "use_item",
            Action::Engage(_) => "engage",
            Action::Confirm(_) => "confirm",
            Action::Status(_) => "status",
            Action::Help(_) => "help",
            Action::Quit(_) => "quit",
        }
    }
}

impl From<TravelAction> for Action {
    fn from(action: TravelAction) -> Self {
        Self::Travel(action)
    }
}

impl From<BuyAction> for Action {
    fn from(action: BuyAction) -> Self {
        Self::Buy(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<EngageAction> for Action {
    fn from(action: EngageAction) -> Self {
        Self::Engage(action)
    }
}

impl From<ConfirmAction> for Action {
    fn from(action: ConfirmAction) -> Self {
        Self::Confirm(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Shop;

    #[test]
    fn sub_prompt_entries_have_no_direct_action() {
        assert_eq!(Action::from_menu(MenuAction::UseItem), None);
        assert_eq!(Action::from_menu(MenuAction::Browse(Shop::Market)), None);
    }

    #[test]
    fn menu_entries_map_to_actions() {
        assert_eq!(
            Action::from_menu(MenuAction::ReturnToVillage),
            Some(Action::Travel(TravelAction::to_village()))
        );
        assert_eq!(
            Action::from_menu(MenuAction::FightDragon),
            Some(Action::Engage(EngageAction::new(EncounterKind::Dragon)))
        );
        assert_eq!(
            Action::from_menu(MenuAction::Quit).map(|a| a.as_snake_case()),
            Some("quit")
        );
    }
}
