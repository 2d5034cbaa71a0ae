//! Screen rendering.
//!
//! Each function writes one screen fragment to any [`Write`] so the whole UI
//! can be captured in tests.
use std::io::{self, Write};

use client_frontend_core::MessageEntry;
use game_core::{Item, LocationMenu};

use crate::presentation::Theme;

/// Location header, description and numbered menu.
pub fn render_location(out: &mut impl Write, theme: &Theme, menu: &LocationMenu) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.header(&format!("=== {} ===", menu.title.to_uppercase())))?;
    writeln!(out, "{}", menu.description)?;
    writeln!(out)?;
    writeln!(out, "What would you like to do?")?;
    for (index, entry) in menu.entries.iter().enumerate() {
        writeln!(out, "{} {}", theme.accent(&format!("{}:", index + 1)), entry.label)?;
    }
    Ok(())
}

pub fn render_messages<'a>(
    out: &mut impl Write,
    theme: &Theme,
    entries: impl IntoIterator<Item = &'a MessageEntry>,
) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", theme.message(&entry.text, entry.level))?;
    }
    Ok(())
}

/// Numbered shop catalog followed by the "Cancel / Back" entry.
pub fn render_shop(out: &mut impl Write, theme: &Theme, stock: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.header("--- Items for sale ---"))?;
    for (index, item) in stock.iter().enumerate() {
        writeln!(
            out,
            "{} {} - {} {}",
            theme.accent(&format!("{}:", index + 1)),
            item.name,
            item.description,
            theme.accent(&format!("({} gold)", item.cost))
        )?;
    }
    writeln!(out, "{} Cancel / Back", theme.accent(&format!("{}:", stock.len() + 1)))
}

/// Numbered inventory for the item prompt.
pub fn render_inventory<'a>(
    out: &mut impl Write,
    theme: &Theme,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.header("=== Inventory ==="))?;
    for (index, item) in items.into_iter().enumerate() {
        writeln!(out, "{}. {} ({})", index + 1, item.name, item.kind())?;
    }
    Ok(())
}

/// Writes a prompt without a line break and flushes it.
pub fn prompt(out: &mut impl Write, theme: &Theme, text: &str) -> io::Result<()> {
    write!(out, "{}", theme.prompt(text))?;
    out.flush()
}
