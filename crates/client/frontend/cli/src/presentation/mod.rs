//! Text rendering for the terminal.
pub mod theme;
pub mod ui;

pub use theme::Theme;
