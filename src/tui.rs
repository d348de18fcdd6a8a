//! Interactive terminal interface for the word-building game.
//!
//! One screen, mirroring the layout the game is designed around: the root
//! word up top, a text input row, the list of accepted words with their
//! letter counts, the score, and an error area for the latest rejection.

use crate::engine::{Game, Rejection};
use crate::game_loop::{GameInterface, UserAction, rejection_text};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const INPUT_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const SCORE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);

/// Ratatui implementation of the game interface.
///
/// Holds a display copy of the game state; the engine remains the owner of
/// the real thing.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    current_input: String,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    error_title: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            current_input: String::new(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            error_title: String::new(),
            error_message: String::new(),
            status: "Type a word and press ENTER".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn sync_from(&mut self, game: &Game) {
        self.root_word = game.root_word().to_string();
        self.used_words = game.used_words().to_vec();
        self.score = game.score();
    }

    fn clear_error(&mut self) {
        self.error_title.clear();
        self.error_message.clear();
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        // Split the borrows: the terminal is taken mutably, everything else
        // is read by the render closure
        let Self {
            terminal,
            current_input,
            root_word,
            used_words,
            score,
            error_title,
            error_message,
            status,
        } = self;
        let score = *score;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Root word
                    Constraint::Length(3), // Input field
                    Constraint::Min(8),    // Used words + messages
                    Constraint::Length(3), // Score / status
                    Constraint::Length(3), // Instructions
                ])
                .split(f.area());

            Self::render_root_word(f, chunks[0], root_word);
            Self::render_input(f, chunks[1], current_input);
            Self::render_words(f, chunks[2], used_words, error_title, error_message);
            Self::render_score(f, chunks[3], score, status);
            Self::render_instructions(f, chunks[4]);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug!("Draw error: {e}");
        }
    }

    fn render_root_word(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(TITLE_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Root word"));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
        let input = Paragraph::new(format!("{current_input}_"))
            .style(INPUT_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Your word"));
        f.render_widget(input, area);
    }

    fn render_words(
        f: &mut Frame,
        area: Rect,
        used_words: &[String],
        error_title: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        for word in used_words {
            lines.push(Line::from(format!("  ({}) {}", word.chars().count(), word)));
        }

        if !error_title.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("{error_title}: {error_message}"),
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Words found"))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_score(f: &mut Frame, area: Rect, score: u32, status: &str) {
        let line = Line::from(vec![
            Span::styled(format!("Score: {score}"), SCORE_STYLE),
            Span::raw(format!("  |  {status}")),
        ]);
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let text = "Type your word | ENTER: Submit | CTRL-N: New word | ESC: Quit";
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(self.handle_key(key))
            }
            // Mouse, focus, paste, resize, key releases: nothing to do
            other => {
                debug!("Ignoring event: {other:?}");
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
                KeyCode::Char('c' | 'C') => Some(UserAction::Exit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.current_input);
                Some(UserAction::Submit(word))
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.clear_error();
                self.current_input.push(c.to_ascii_lowercase());
                None
            }
            _ => {
                debug!("Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, game: &Game) {
        self.sync_from(game);
        self.current_input.clear();
        self.clear_error();
        self.status = "New word! Type a word and press ENTER".to_string();
        self.draw_or_log();
    }

    fn read_submission(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    debug!("Input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, game: &Game) {
        self.sync_from(game);
        self.clear_error();
        self.status = "Nice!".to_string();
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection, game: &Game) {
        self.sync_from(game);
        if let Some((title, message)) = rejection_text(rejection, game.root_word()) {
            self.error_title = title;
            self.error_message = message;
        }
        self.status = "Try again".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
