//! TUI application state and logic

use crate::core::{AbsurdleError, CandidateSet};
use crate::game::Game;
use crate::output::{GlyphStyle, render_pattern};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub glyphs: GlyphStyle,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Statistics from before the current game was counted
    stats_before_finish: Option<Statistics>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_finished: usize,
    pub total_guesses: usize,
    pub fewest_guesses: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.games_finished > 0).then(|| self.total_guesses as f64 / self.games_finished as f64)
    }
}

impl App {
    #[must_use]
    pub fn new(candidates: CandidateSet, glyphs: GlyphStyle) -> Self {
        let word_length = candidates.word_length();
        let words = candidates.len();

        let mut app = Self {
            game: Game::new(candidates),
            glyphs,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            stats_before_finish: None,
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!("{words} words of length {word_length} are in play."),
            MessageStyle::Info,
        );
        app.add_message(
            "Type a guess and press Enter. Ctrl-U undoes, Esc quits.",
            MessageStyle::Info,
        );
        app
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::Guessing, KeyCode::Char('u')) if ctrl => self.undo_last(),
            (InputMode::Guessing, KeyCode::Char(c)) if !ctrl => {
                if self.input_buffer.chars().count() < self.game.word_length() {
                    self.input_buffer.push(c);
                }
            }
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            (InputMode::Finished, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Finished, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Finished, KeyCode::Char('u')) => self.undo_last(),
            _ => {}
        }
    }

    /// Play the word in the input buffer
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.game.guess(&guess) {
            Ok(turn) => {
                let text = format!(
                    "{} → {} ({} → {} candidates)",
                    turn.guess,
                    render_pattern(&turn.pattern, self.glyphs),
                    turn.candidates_before,
                    turn.candidates_after
                );
                self.add_message(&text, MessageStyle::Info);

                if self.game.is_finished() {
                    self.finish_game();
                }
            }
            Err(e @ AbsurdleError::GuessLengthMismatch { .. }) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let guesses = self.game.turns().len();
        self.stats_before_finish = Some(self.stats.clone());
        self.stats.games_finished += 1;
        self.stats.total_guesses += guesses;
        self.stats.fewest_guesses = Some(self.stats.fewest_guesses.map_or(guesses, |f| f.min(guesses)));
        self.input_mode = InputMode::Finished;

        self.add_message(
            &format!("🎉 Cornered it in {guesses} {}!", if guesses == 1 { "guess" } else { "guesses" }),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.restart();
        self.stats_before_finish = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New game started with {} words.", self.game.candidates().len()),
            MessageStyle::Info,
        );
    }

    pub fn undo_last(&mut self) {
        match self.game.undo() {
            Ok(turn) => {
                // The finished game no longer counts
                if let Some(stats) = self.stats_before_finish.take() {
                    self.stats = stats;
                    self.input_mode = InputMode::Guessing;
                }
                self.add_message(&format!("Took back {}", turn.guess), MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prune_to_fixed_length;

    fn new_app() -> App {
        let candidates = prune_to_fixed_length(["board", "beard", "bzard"], 5).unwrap();
        App::new(candidates, GlyphStyle::Codes)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_guess(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let mut app = new_app();
        for ch in "boardxyz".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.input_buffer, "board");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "boar");
    }

    #[test]
    fn short_guess_keeps_buffer() {
        let mut app = new_app();
        type_guess(&mut app, "bor");
        assert_eq!(app.input_buffer, "bor");
        assert!(app.game.turns().is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn full_game_switches_to_finished() {
        let mut app = new_app();
        type_guess(&mut app, "beard");
        type_guess(&mut app, "board");
        assert_eq!(app.input_mode, InputMode::Guessing);
        type_guess(&mut app, "bzard");

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_finished, 1);
        assert_eq!(app.stats.total_guesses, 3);
        assert_eq!(app.stats.fewest_guesses, Some(3));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.turns().is_empty());
        assert_eq!(app.game.candidates().len(), 3);
    }

    #[test]
    fn undo_after_finish_reopens_game() {
        let mut app = new_app();
        type_guess(&mut app, "beard");
        type_guess(&mut app, "board");
        type_guess(&mut app, "bzard");
        press(&mut app, KeyCode::Char('u'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_finished, 0);
        assert_eq!(app.stats.total_guesses, 0);
        assert_eq!(app.stats.fewest_guesses, None);
        assert_eq!(app.game.turns().len(), 2);
    }

    #[test]
    fn undo_restores_earlier_best() {
        let candidates = prune_to_fixed_length(["ab", "ba", "cd"], 2).unwrap();
        let mut app = App::new(candidates, GlyphStyle::Codes);

        // xy rules nothing out, so this game takes three guesses
        type_guess(&mut app, "xy");
        type_guess(&mut app, "cd");
        type_guess(&mut app, "ab");
        assert_eq!(app.stats.fewest_guesses, Some(3));
        press(&mut app, KeyCode::Char('n'));

        // A shorter game, taken back after it finished
        type_guess(&mut app, "cd");
        type_guess(&mut app, "ab");
        assert_eq!(app.stats.fewest_guesses, Some(2));
        press(&mut app, KeyCode::Char('u'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_finished, 1);
        assert_eq!(app.stats.total_guesses, 3);
        assert_eq!(app.stats.fewest_guesses, Some(3));

        // Replaying the last guess counts the game once more
        type_guess(&mut app, "ab");
        assert_eq!(app.stats.games_finished, 2);
        assert_eq!(app.stats.total_guesses, 5);
        assert_eq!(app.stats.fewest_guesses, Some(2));
    }

    #[test]
    fn ctrl_u_undoes_while_guessing() {
        let mut app = new_app();
        type_guess(&mut app, "beard");
        ctrl(&mut app, 'u');
        assert!(app.game.turns().is_empty());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn quitting() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = new_app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("message 19"));
    }
}
