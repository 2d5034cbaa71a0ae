//! Crossterm color scheme for the terminal UI.
//!
//! Every styling decision goes through [`Theme`] so colors can be switched
//! off in one place (`DRAGON_QUEST_COLOR=false`, or tests capturing output).

use client_frontend_core::MessageLevel;
use crossterm::style::Stylize;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Location headers and screen titles.
    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Prompts waiting for input.
    pub fn prompt(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Menu numbers and prices.
    pub fn accent(&self, text: &str) -> String {
        if self.color {
            text.dark_yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn message(&self, text: &str, level: MessageLevel) -> String {
        if !self.color {
            return text.to_string();
        }
        match level {
            MessageLevel::Info => text.to_string(),
            MessageLevel::Success => text.green().to_string(),
            MessageLevel::Warning => text.yellow().to_string(),
            MessageLevel::Error => text.red().bold().to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_adds_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.header("Village"), "Village");
        assert_eq!(theme.message("Ouch", MessageLevel::Error), "Ouch");
    }

    #[test]
    fn colored_theme_wraps_text() {
        // Bold survives NO_COLOR, so the escape code is always there.
        let styled = Theme::default().header("Village");
        assert!(styled.contains("Village"));
        assert!(styled.contains('\u{1b}'));
    }
}
