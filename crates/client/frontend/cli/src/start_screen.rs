//! Title banner and name prompt.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::input::LineReader;
use crate::presentation::{Theme, ui};

const BANNER: [&str; 3] = [
    "=================================",
    "       The Dragon's Quest        ",
    "=================================",
];

/// Show the banner and ask for the hero's name.
///
/// Returns the raw answer (an empty name is replaced by the rule set's
/// default later), or `None` when input ended before an answer.
pub fn show_start_screen<R: BufRead>(
    reader: &mut LineReader<R>,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<Option<String>> {
    for line in BANNER {
        writeln!(out, "{}", theme.header(line))?;
    }
    writeln!(out)?;
    writeln!(out, "Your quest: Defeat the dragon in the mountains!")?;
    writeln!(out)?;

    ui::prompt(out, theme, "What is your name, brave adventurer? ")?;
    Ok(reader.next_line()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn banner_then_name() {
        let mut reader = LineReader::new(Cursor::new("Aria\n"));
        let mut out = Vec::new();

        let name = show_start_screen(&mut reader, &mut out, &Theme::plain()).unwrap();

        assert_eq!(name.as_deref(), Some("Aria"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The Dragon's Quest"));
        assert!(text.ends_with("What is your name, brave adventurer? "));
    }

    #[test]
    fn eof_means_no_name() {
        let mut reader = LineReader::new(Cursor::new(""));
        let name = show_start_screen(&mut reader, &mut Vec::new(), &Theme::plain()).unwrap();
        assert_eq!(name, None);
    }
}
