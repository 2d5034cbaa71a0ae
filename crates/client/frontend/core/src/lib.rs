//! Cross-frontend primitives for presenting the game.
//!
//! Houses the session handle, message logging and event formatting that both
//! the CLI and future graphical clients can reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;
pub mod session;

pub use config::{FrontendConfig, MessageConfig};
pub use format::{
    HELP_SECTIONS, describe_combat, describe_error, describe_event, describe_menu_error,
    status_lines,
};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::{GameSession, SessionSetup};
