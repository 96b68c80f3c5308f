//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! - Title bar showing the root word
//! - Input field holding the pending word
//! - List of accepted words, most recent first, each with a length badge
//! - Status and instruction lines
//!
//! # State Machine
//! - `Editing` → (rejection) → `Alert` → (ENTER/ESC) → `Editing`
//! - Restart and accepted words keep the interface in `Editing`

use crate::error::Rejection;
use crate::game_state::{GameInterface, GameState, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const INPUT_STYLE: Style = Style::new().fg(Color::White);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    Editing,
    /// Modal shown after a rejected word, dismissed with ENTER or ESC
    Alert { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    used_words: &'a [String],
    current_input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo the raw-mode switch after a failed setup, since `Drop` never runs there.
fn restore_terminal() -> Result<(), io::Error> {
    let restored = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    restored
}

/// Run `undo` when `result` is an error, keeping the original error.
fn undo_on_error<T>(
    result: Result<T, io::Error>,
    undo: impl FnOnce() -> Result<(), io::Error>,
) -> Result<T, io::Error> {
    if result.is_err()
        && let Err(e) = undo()
    {
        log::error!("Failed to restore terminal: {e}");
    }
    result
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    used_words: Vec<String>,
    current_input: String,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = undo_on_error(enter_screen(), restore_terminal)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            root_word: String::new(),
            used_words: Vec::new(),
            current_input: String::new(),
            state: TuiState::Editing,
            status: "Ready".to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn sync(&mut self, state: &GameState) {
        self.root_word = state.root_word().to_string();
        self.used_words = state.used_words().to_vec();
        self.current_input = state.pending_input().to_string();
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            used_words: &self.used_words,
            current_input: &self.current_input,
            state: &self.state,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(5),    // Used words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input);
        Self::render_used_words(f, chunks[2], ctx.used_words);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::Alert { title, message } = ctx.state {
            Self::render_alert(f, title, message);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_string())
            .style(HEADER_STYLE)
            .block(Block::default().title("Word Scramble").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
        let line = Line::from(vec![
            Span::styled(current_input.to_string(), INPUT_STYLE),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Your Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(format!("Words ({})", used_words.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Editing => "Type a word | ENTER: Submit | CTRL+R: Restart | ESC: Quit",
            TuiState::Alert { .. } => "ENTER: OK",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, title: &str, message: &str) {
        let area = Self::centered(f.area(), ALERT_WIDTH, ALERT_HEIGHT);
        let lines = vec![
            Line::from(""),
            Line::from(message.to_string()),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(title.to_string(), ERROR_STYLE))
                    .borders(Borders::ALL),
            );
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event: {:?}", event);
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        match self.state {
            TuiState::Editing => Ok(self.handle_editing_input(key)),
            TuiState::Alert { .. } => {
                self.handle_alert_input(key);
                Ok(None)
            }
        }
    }

    fn handle_editing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r' | 'R') if has_ctrl => {
                info_log!("handle_editing_input() - Restart requested");
                Some(UserAction::Restart)
            }
            KeyCode::Char('c') if has_ctrl => Some(UserAction::Exit),
            KeyCode::Char(c) if !has_ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_editing_input() - Submitting '{}'",
                    self.current_input
                );
                Some(UserAction::Submit(self.current_input.clone()))
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => {
                debug_log!("handle_editing_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_alert_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.state = TuiState::Editing;
            self.status = "Ready".to_string();
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, state: &GameState) {
        self.sync(state);
        self.state = TuiState::Editing;
        self.status = format!("New root word: {}", state.root_word());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("read_action() - Input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, state: &GameState) {
        self.sync(state);
        self.status = format!("Accepted: {word}");
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: &Rejection, state: &GameState) {
        self.sync(state);
        self.state = TuiState::Alert {
            title: rejection.title(),
            message: rejection.message(),
        };
        self.status = format!("Rejected: {}", state.pending_input().trim());
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
