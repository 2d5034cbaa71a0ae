use crate::action::{ActionTransition, ItemUse};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemKind};

/// Uses the inventory item at `index` (0-based).
///
/// Potions heal and disappear. Weapons and armor stay put; they are selected
/// automatically when a fight starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub index: usize,
}

impl UseItemAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Parses a 1-based inventory number as typed by the player, checked
    /// against an inventory of `len` items.
    pub fn from_choice(input: &str, len: usize) -> Result<Self, UseItemError> {
        let input = input.trim();
        let choice = input
            .parse::<usize>()
            .map_err(|_| UseItemError::UnreadableChoice(input.to_string()))?;
        if !(1..=len).contains(&choice) {
            return Err(UseItemError::InvalidItemIndex { choice, len });
        }
        Ok(Self::new(choice - 1))
    }

    fn out_of_range(&self, len: usize) -> UseItemError {
        UseItemError::InvalidItemIndex {
            choice: self.index.saturating_add(1),
            len,
        }
    }
}

impl ActionTransition for UseItemAction {
    type Error = UseItemError;
    type Result = ItemUse;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let len = state.player.inventory.len();
        if self.index >= len {
            return Err(self.out_of_range(len));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let player = &mut state.player;
        let len = player.inventory.len();
        let item = player
            .inventory
            .get(self.index)
            .cloned()
            .ok_or_else(|| self.out_of_range(len))?;

        if !item.is(ItemKind::Potion) {
            return Ok(ItemUse::Equipped { item });
        }

        let healed = player.heal(item.effect);
        player.inventory.remove(self.index);

        Ok(ItemUse::Consumed {
            item,
            healed,
            health: player.health(),
        })
    }
}

/// Errors raised when using an item. The inventory is never touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UseItemError {
    /// `choice` is the 1-based number shown to the player.
    #[error("Invalid item number {choice} (you have {len} items)")]
    InvalidItemIndex { choice: usize, len: usize },

    #[error("'{0}' is not an item number")]
    UnreadableChoice(String),
}

impl GameError for UseItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidItemIndex { .. } => "USE_ITEM_INVALID_INDEX",
            Self::UnreadableChoice(_) => "USE_ITEM_UNREADABLE_CHOICE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Player;
    use crate::test_support::{player_with, potion, sword};

    #[test]
    fn potion_heals_to_the_cap_and_is_removed() {
        let env = GameEnv::empty();
        let mut state = GameState::new(0, player_with(vec![sword(), potion()]).with_health(80));

        let outcome = UseItemAction::new(1).apply(&mut state, &env).unwrap();

        assert_eq!(
            outcome,
            ItemUse::Consumed {
                item: potion(),
                healed: 20,
                health: 100
            }
        );
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.player.health(), 100);
    }

    #[test]
    fn gear_is_only_reported() {
        let env = GameEnv::empty();
        let mut state = GameState::new(0, player_with(vec![sword()]));

        let outcome = UseItemAction::new(0).apply(&mut state, &env).unwrap();

        assert_eq!(outcome, ItemUse::Equipped { item: sword() });
        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn out_of_range_and_empty_inventory_are_invalid() {
        let env = GameEnv::empty();
        let empty = GameState::new(0, Player::default());
        assert_eq!(
            UseItemAction::new(0).pre_validate(&empty, &env),
            Err(UseItemError::InvalidItemIndex { choice: 1, len: 0 })
        );

        let state = GameState::new(0, player_with(vec![potion()]));
        let error = UseItemAction::new(3).pre_validate(&state, &env).unwrap_err();
        assert_eq!(error.to_string(), "Invalid item number 4 (you have 1 items)");
    }

    #[test]
    fn choices_are_one_based() {
        assert_eq!(UseItemAction::from_choice(" 2 ", 2), Ok(UseItemAction::new(1)));
        assert_eq!(
            UseItemAction::from_choice("0", 2),
            Err(UseItemError::InvalidItemIndex { choice: 0, len: 2 })
        );
        assert_eq!(
            UseItemAction::from_choice("3", 2),
            Err(UseItemError::InvalidItemIndex { choice: 3, len: 2 })
        );
        assert!(matches!(
            UseItemAction::from_choice("potion", 2),
            Err(UseItemError::UnreadableChoice(_))
        ));
    }
}
