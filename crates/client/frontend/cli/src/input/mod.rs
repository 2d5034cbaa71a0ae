//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application can remain agnostic about how choices are typed.

use game_core::{
    Action, BuyAction, LocationMenu, MenuAction, MenuError, Shop, UseItemAction, UseItemError,
};

pub mod provider;
pub use provider::LineReader;

/// What a line typed at a location menu asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuInput {
    /// Submit the decoded game action to the session.
    Submit(Action),
    /// Open a shop catalog.
    Browse(Shop),
    /// Open the inventory to pick an item.
    ChooseItem,
    /// Nothing on the menu matched.
    Invalid(MenuError),
}

pub fn handle_menu_line(menu: &LocationMenu, line: &str) -> MenuInput {
    let entry = match menu.choose(line) {
        Ok(entry) => entry,
        Err(error) => return MenuInput::Invalid(error),
    };

    match entry {
        MenuAction::Browse(shop) => MenuInput::Browse(shop),
        MenuAction::UseItem => MenuInput::ChooseItem,
        entry => match Action::from_menu(entry) {
            Some(action) => MenuInput::Submit(action),
            None => unreachable!("menu entry {entry:?} opens a sub-prompt the CLI does not know"),
        },
    }
}

/// A line typed in a shop catalog of `stock_len` items.
///
/// The entry after the last item is "Cancel / Back".
#[derive(Debug, PartialEq, Eq)]
pub enum ShopInput {
    Buy(BuyAction),
    Cancel,
    Invalid,
}

pub fn handle_shop_line(shop: Shop, stock_len: usize, line: &str) -> ShopInput {
    match line.trim().parse::<usize>() {
        Ok(entry) if (1..=stock_len).contains(&entry) => ShopInput::Buy(BuyAction::new(shop, entry)),
        Ok(entry) if entry == stock_len + 1 => ShopInput::Cancel,
        _ => ShopInput::Invalid,
    }
}

/// A line typed at the item prompt for an inventory of `len` items.
#[derive(Debug, PartialEq, Eq)]
pub enum ItemInput {
    Use(UseItemAction),
    Cancel,
    Invalid(UseItemError),
}

pub fn handle_item_line(len: usize, line: &str) -> ItemInput {
    if line.trim().eq_ignore_ascii_case("cancel") {
        return ItemInput::Cancel;
    }
    match UseItemAction::from_choice(line, len) {
        Ok(action) => ItemInput::Use(action),
        Err(error) => ItemInput::Invalid(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Location, QuitAction, TravelAction};

    const LOCATIONS: [Location; 5] = [
        Location::Village,
        Location::Blacksmith,
        Location::Market,
        Location::Forest,
        Location::Mountain,
    ];

    #[test]
    fn village_choices() {
        let menu = Location::Village.menu();

        assert_eq!(
            handle_menu_line(menu, "3"),
            MenuInput::Submit(Action::Travel(TravelAction::new(Location::Forest)))
        );
        assert_eq!(handle_menu_line(menu, " 6 "), MenuInput::ChooseItem);
        assert_eq!(
            handle_menu_line(menu, "8"),
            MenuInput::Submit(Action::Quit(QuitAction))
        );
        assert!(matches!(
            handle_menu_line(menu, "9"),
            MenuInput::Invalid(MenuError::OutOfRange { choice: 9, max: 8 })
        ));
    }

    #[test]
    fn every_menu_entry_has_a_handler() {
        for location in LOCATIONS {
            let menu = location.menu();
            for choice in 1..=menu.len() {
                let input = handle_menu_line(menu, &choice.to_string());
                assert!(
                    !matches!(input, MenuInput::Invalid(_)),
                    "{location} entry {choice} was rejected"
                );
            }
        }
    }

    #[test]
    fn only_use_item_opens_the_inventory() {
        for location in LOCATIONS {
            let menu = location.menu();
            for (number, entry) in menu.entries.iter().enumerate() {
                let input = handle_menu_line(menu, &(number + 1).to_string());
                assert_eq!(
                    input == MenuInput::ChooseItem,
                    entry.action == MenuAction::UseItem,
                    "{location} entry {}",
                    entry.label
                );
            }
        }
    }

    #[test]
    fn shop_browse_is_a_sub_menu() {
        let menu = Location::Market.menu();
        assert_eq!(handle_menu_line(menu, "1"), MenuInput::Browse(Shop::Market));
    }

    #[test]
    fn shop_lines() {
        assert_eq!(
            handle_shop_line(Shop::Blacksmith, 4, "2"),
            ShopInput::Buy(BuyAction::new(Shop::Blacksmith, 2))
        );
        assert_eq!(handle_shop_line(Shop::Blacksmith, 4, "5"), ShopInput::Cancel);
        assert_eq!(handle_shop_line(Shop::Blacksmith, 4, "0"), ShopInput::Invalid);
        assert_eq!(handle_shop_line(Shop::Blacksmith, 4, "sword"), ShopInput::Invalid);
    }

    #[test]
    fn item_lines() {
        assert_eq!(handle_item_line(2, "CANCEL"), ItemInput::Cancel);
        assert_eq!(handle_item_line(2, "1"), ItemInput::Use(UseItemAction::new(0)));
        assert_eq!(
            handle_item_line(2, "0"),
            ItemInput::Invalid(UseItemError::InvalidItemIndex { choice: 0, len: 2 })
        );
        assert_eq!(
            handle_item_line(2, "x"),
            ItemInput::Invalid(UseItemError::UnreadableChoice("x".to_string()))
        );
    }
}
