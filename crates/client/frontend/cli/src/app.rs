//! Session loop for the terminal frontend.
//!
//! Each turn renders the location menu, reads one line and either submits an
//! action or opens a sub-prompt (shop catalog, inventory, dragon warning).
//! Invalid input is reported and the same menu is shown again.
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::Result;
use client_frontend_core::{
    Frontend, FrontendConfig, GameSession, MessageEntry, MessageLog, SessionSetup,
    describe_error, describe_event, describe_menu_error, status_lines,
};
use game_core::{
    Action, ConfirmAction, GameError, GameStatus, QuitAction, Shop, StatusReport, UseItemError,
};

use crate::config::CliConfig;
use crate::input::{self, ItemInput, LineReader, MenuInput, ShopInput};
use crate::presentation::{Theme, ui};
use crate::start_screen::show_start_screen;

const FAREWELL: &str = "Thanks for playing The Dragon's Quest!";

/// Line-based terminal frontend.
pub struct CliFrontend<R, W> {
    config: FrontendConfig,
    theme: Theme,
    reader: LineReader<R>,
    out: W,
    messages: MessageLog,
}

impl CliFrontend<StdinLock<'static>, Stdout> {
    /// Frontend on the process's stdin and stdout.
    pub fn new(config: FrontendConfig, cli_config: &CliConfig) -> Self {
        Self::with_io(config, cli_config, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliFrontend<R, W> {
    pub fn with_io(config: FrontendConfig, cli_config: &CliConfig, input: R, output: W) -> Self {
        let messages = MessageLog::new(config.messages.capacity);
        Self {
            config,
            theme: Theme::new(cli_config.ui.color),
            reader: LineReader::new(input),
            out: output,
            messages,
        }
    }

    /// Recent messages, oldest first.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn play(&mut self, session: &mut GameSession) -> Result<()> {
        while !session.is_over() {
            if session.state().pending.is_some() {
                self.confirm(session)?;
                continue;
            }

            ui::render_location(&mut self.out, &self.theme, session.menu())?;
            let Some(line) = self.ask("\nEnter choice (number): ")? else {
                return self.leave(session);
            };

            match input::handle_menu_line(session.menu(), &line) {
                MenuInput::Submit(action) => self.submit(session, action)?,
                MenuInput::Browse(shop) => self.browse(session, shop)?,
                MenuInput::ChooseItem => self.choose_item(session)?,
                MenuInput::Invalid(error) => {
                    tracing::warn!(input = %line, "Invalid menu choice: {}", error);
                    self.show([describe_menu_error(&error), try_again()])?;
                }
            }
        }
        Ok(())
    }

    fn submit(&mut self, session: &mut GameSession, action: Action) -> Result<()> {
        let nonce = session.state().nonce;
        match session.execute(action) {
            Ok(events) => {
                let entries: Vec<_> = events
                    .iter()
                    .flat_map(|event| describe_event(event, &self.config.messages))
                    .map(|entry| entry.at(nonce))
                    .collect();
                self.show(entries)
            }
            Err(error) if error.severity().is_recoverable() => {
                self.show([describe_error(&error), try_again()])
            }
            Err(error) => Err(error.into()),
        }
    }

    fn browse(&mut self, session: &mut GameSession, shop: Shop) -> Result<()> {
        let stock = session.stock(shop);
        ui::render_shop(&mut self.out, &self.theme, &stock)?;

        let Some(line) = self.ask("Choose item number to buy: ")? else {
            return self.leave(session);
        };
        match input::handle_shop_line(shop, stock.len(), &line) {
            ShopInput::Buy(buy) => self.submit(session, Action::Buy(buy)),
            ShopInput::Cancel => self.show([MessageEntry::info("Leaving the shop.")]),
            ShopInput::Invalid => {
                tracing::warn!(input = %line, %shop, "Invalid shop choice");
                self.show([MessageEntry::warning("Error: Invalid choice."), try_again()])
            }
        }
    }

    fn choose_item(&mut self, session: &mut GameSession) -> Result<()> {
        let inventory = &session.state().player.inventory;
        if inventory.is_empty() {
            return self.show([MessageEntry::info("You have no items!")]);
        }
        ui::render_inventory(&mut self.out, &self.theme, inventory.iter())?;

        let Some(line) = self.ask("Use which item? (number or 'cancel'): ")? else {
            return self.leave(session);
        };
        let len = session.state().player.inventory.len();
        match input::handle_item_line(len, &line) {
            ItemInput::Use(choice) => self.submit(session, Action::UseItem(choice)),
            ItemInput::Cancel => Ok(()),
            ItemInput::Invalid(UseItemError::UnreadableChoice(_)) => {
                tracing::warn!(input = %line, "Unreadable item choice");
                self.show([MessageEntry::warning("Error: Invalid item number!"), try_again()])
            }
            ItemInput::Invalid(error) => {
                tracing::warn!(input = %line, code = error.error_code(), "Item choice out of range");
                self.show([MessageEntry::warning(format!("Error: {error}")), try_again()])
            }
        }
    }

    fn confirm(&mut self, session: &mut GameSession) -> Result<()> {
        let Some(answer) = self.ask("Do you still want to fight? (yes/no): ")? else {
            return self.leave(session);
        };
        self.submit(session, Action::Confirm(ConfirmAction::from_answer(&answer)))
    }

    /// Input ended: answer any open question with "no", then quit.
    fn leave(&mut self, session: &mut GameSession) -> Result<()> {
        tracing::info!("Input closed, leaving the game");
        writeln!(self.out)?;
        if session.state().pending.is_some() {
            self.submit(session, Action::Confirm(ConfirmAction::decline()))?;
        }
        if !session.is_over() {
            self.submit(session, Action::Quit(QuitAction))?;
        }
        Ok(())
    }

    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        ui::prompt(&mut self.out, &self.theme, text)?;
        Ok(self.reader.next_line()?)
    }

    fn show(&mut self, entries: impl IntoIterator<Item = MessageEntry>) -> Result<()> {
        let entries: Vec<_> = entries.into_iter().collect();
        ui::render_messages(&mut self.out, &self.theme, &entries)?;
        self.messages.extend(entries);
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.theme.header(FAREWELL))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for CliFrontend<R, W> {
    fn run(&mut self, setup: SessionSetup) -> Result<GameStatus> {
        let Some(name) = show_start_screen(&mut self.reader, &mut self.out, &self.theme)? else {
            tracing::info!("Input closed before the game started");
            self.farewell()?;
            return Ok(GameStatus::Quit);
        };

        let mut session = setup.start(&name);
        let player = &session.state().player;
        let welcome = [
            MessageEntry::info(format!("Welcome, {}!", player.name)),
            MessageEntry::info(format!("You start with {} gold.", player.gold)),
        ];
        self.show(welcome)?;

        self.play(&mut session)?;

        let status = session.status();
        tracing::info!(%status, nonce = session.state().nonce, "Game over");
        if status == GameStatus::Victory {
            let report = StatusReport::from_state(session.state());
            self.show(status_lines(&report).into_iter().map(MessageEntry::success))?;
        }
        self.farewell()?;

        Ok(status)
    }
}

fn try_again() -> MessageEntry {
    MessageEntry::warning("Please try again!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use game_content::ContentBundle;
    use std::io::Cursor;

    fn play_with(content: ContentBundle, input: &str) -> (GameStatus, String) {
        let cli_config = CliConfig {
            ui: UiConfig { color: false },
            ..CliConfig::default()
        };
        let mut frontend = CliFrontend::with_io(
            FrontendConfig::default(),
            &cli_config,
            Cursor::new(input.to_string()),
            Vec::new(),
        );

        let status = frontend.run(SessionSetup::new(content, 1)).unwrap();
        let output = String::from_utf8(frontend.into_output()).unwrap();
        (status, output)
    }

    fn play(input: &str) -> (GameStatus, String) {
        play_with(ContentBundle::builtin(), input)
    }

    #[test]
    fn quitting_from_the_village() {
        let (status, output) = play("Aria\n8\n");

        assert_eq!(status, GameStatus::Quit);
        assert!(output.contains("Welcome, Aria!"));
        assert!(output.contains("You start with 20 gold."));
        assert!(output.contains("=== VILLAGE ==="));
        assert!(output.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn empty_name_becomes_the_default() {
        let (_, output) = play("\n8\n");
        assert!(output.contains("Welcome, Adventurer!"));
    }

    #[test]
    fn end_of_input_counts_as_quit() {
        let (status, output) = play("");
        assert_eq!(status, GameStatus::Quit);
        assert!(!output.contains("Welcome"));
        assert!(output.contains(FAREWELL));

        let (status, output) = play("Aria\n5\n");
        assert_eq!(status, GameStatus::Quit);
        assert!(output.contains("Nothing in inventory"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn invalid_choices_reprompt() {
        let (status, output) = play("Aria\n\nabc\n9\n8\n");

        assert_eq!(status, GameStatus::Quit);
        assert_eq!(output.matches("Please try again!").count(), 3);
        assert!(output.contains("Error: 'abc' is not a number"));
        assert!(output.contains("Error: Choice 9 is not on the menu (1-8)"));
        assert_eq!(output.matches("=== VILLAGE ===").count(), 4);
    }

    #[test]
    fn buying_and_drinking_a_potion() {
        // Market: browse, buy the potion, use it, quit.
        let (_, output) = play("Aria\n2\n1\n1\n4\n1\n6\n");

        assert!(output.contains("1: Health Potion - Restores 30 health points (5 gold)"));
        assert!(output.contains("2: Cancel / Back"));
        assert!(output.contains("You bought a Health Potion for 5 gold!"));
        assert!(output.contains("Gold remaining: 15"));
        assert!(output.contains("1. Health Potion (potion)"));
        assert!(output.contains("You drink the Health Potion."));
        assert!(output.contains("Health restored to: 100"));
    }

    #[test]
    fn shop_cancel_and_unaffordable_items() {
        // Blacksmith: cancel, then try the Iron Shield twice (15 + 15 > 20).
        let (_, output) = play("Aria\n1\n1\n5\n1\n4\n1\n4\n6\n");

        assert!(output.contains("Leaving the shop."));
        assert_eq!(output.matches("You bought a Iron Shield").count(), 1);
        assert!(output.contains("Error: You cannot afford the Iron Shield (15 gold, you have 5)"));
    }

    #[test]
    fn bad_item_numbers_are_reported() {
        // Market: buy a potion, then pick item 0 and a word.
        let (_, output) = play("Aria\n2\n1\n1\n4\n0\n4\nx\n6\n");

        assert!(output.contains("Error: Invalid item number 0 (you have 1 items)"));
        assert!(output.contains("Error: Invalid item number!"));
        assert_eq!(output.matches("Please try again!").count(), 2);
        assert!(!output.contains("You drink the Health Potion."));
    }

    #[test]
    fn using_an_item_needs_something_to_use() {
        let (_, output) = play("Aria\n6\n8\n");
        assert!(output.contains("You have no items!"));
    }

    #[test]
    fn full_quest_ends_in_victory() {
        let input = [
            "Aria", // name
            "1", "1", "1", "2", // blacksmith: buy Sword, back
            "3", "1", "2", // forest fight, search again, back
            "1", "1", "2", "1", "3", "2", // Steel Sword and Wooden Shield
            "4", "1", // mountain, dragon
        ]
        .join("\n");

        let (status, output) = play(&input);

        assert_eq!(status, GameStatus::Victory);
        assert!(output.contains("You equip: Steel Sword (damage: 18)."));
        assert!(output.contains("Your armor reduces it by 5. You take 15 damage."));
        assert!(output.contains("*** VICTORY! You have slain the dragon! ***"));
        assert!(output.contains("=== Aria's Status ==="));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn declining_the_dragon_warning_returns_home() {
        let mut content = ContentBundle::builtin();
        content.config = content.config.with_mountain_gate(false);

        let (status, output) = play_with(content, "Aria\n1\n1\n1\n2\n4\n1\nNo\n8\n");

        assert_eq!(status, GameStatus::Quit);
        assert!(output.contains("Warning: The Dragon is a deadly foe."));
        assert!(output.contains("Do you still want to fight? (yes/no): "));
        assert!(output.contains("You wisely decide to return to the village to prepare."));
        assert_eq!(output.matches("=== VILLAGE ===").count(), 3);
    }

    #[test]
    fn losing_a_fight_ends_the_game() {
        let mut content = ContentBundle::builtin();
        content.config.monster.damage_per_turn = 200;

        let (status, output) = play_with(content, "Aria\n1\n1\n1\n2\n3\n");

        assert_eq!(status, GameStatus::Defeat);
        assert!(output.contains("You were slain in battle..."));
        assert!(output.contains("Game Over! You have fallen."));
        assert!(output.contains(FAREWELL));
    }
}
