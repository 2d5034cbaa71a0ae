pub mod inventory;
pub mod item;
pub mod location;
pub mod player;

// Re-export item types
pub use item::{Item, ItemHandle, ItemKind};

// Re-export inventory
pub use inventory::Inventory;

// Re-export location state table
pub use location::{Location, LocationMenu, MenuAction, MenuEntry, MenuError, Shop};

// Re-export player
pub use player::Player;
