//! Main application state and TUI event loop for the allocation
//! categorizer.
//!
//! [`App`] owns the theme, the input buffer, and the last aggregated
//! summary. It drives both the interactive editor loop and the static
//! summary view.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use allocsum_core::aggregator::SummaryAggregator;
use allocsum_core::models::Summary;
use allocsum_core::parser;

use crate::chart_view;
use crate::editor::{self, InputBuffer};
use crate::summary_view::{self, rows_from_summary};
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Interactive editor with live processing.
    Interactive,
    /// Static summary of a preloaded input file.
    Summary,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the allocation categorizer TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Editable input buffer (session-scoped; never persisted).
    pub buffer: InputBuffer,
    /// Most recent aggregation result, `None` until the first trigger.
    /// Replaced wholesale on every trigger, never merged.
    pub summary: Option<Summary>,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, view_mode: ViewMode) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            buffer: InputBuffer::new(),
            summary: None,
            should_quit: false,
        }
    }

    /// Preload the input buffer (builder style, for `--input`).
    pub fn with_input(mut self, text: &str) -> Self {
        self.buffer = InputBuffer::from_text(text);
        self
    }

    // ── Public event loops ────────────────────────────────────────────────────

    /// Run the interactive editor TUI.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout);
    /// all parsing happens inline on the trigger key, there is no
    /// background work. Bracketed paste is enabled so pasted blocks
    /// arrive as a single [`Event::Paste`].
    ///
    /// Keys: `Ctrl+R` processes the buffer (inert while it is blank),
    /// `Esc` or `Ctrl+C` exits, everything else edits the buffer.
    pub async fn run_interactive(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Paste(text) => self.buffer.insert_str(&text),
                    _ => {}
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        terminal.show_cursor()?;

        result
    }

    /// Run a static summary view for a preloaded input, then wait for
    /// `q` / `Ctrl+C`.
    pub async fn run_summary(self, summary: Summary) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let rows = rows_from_summary(&summary);
        let total = summary.total_entries();

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if rows.is_empty() {
                    summary_view::render_no_data(frame, area, &self.theme);
                    return;
                }
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);
                summary_view::render_summary_table(frame, halves[0], &rows, total, &self.theme);
                chart_view::render_bar_chart(frame, halves[1], &rows, &self.theme);
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Event handling ────────────────────────────────────────────────────────

    /// Apply one key event to the application state.
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.process();
            }
            KeyCode::Char(c) => self.buffer.insert_char(c),
            KeyCode::Enter => self.buffer.insert_newline(),
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Up => self.buffer.move_up(),
            KeyCode::Down => self.buffer.move_down(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            _ => {}
        }
    }

    /// Run one parse + aggregate pass over the current buffer contents.
    ///
    /// Inert while the buffer is blank. The previous summary is replaced
    /// wholesale; results are never merged across triggers.
    pub fn process(&mut self) {
        if self.buffer.is_blank() {
            return;
        }
        let labels = parser::parse(&self.buffer.text());
        self.summary = Some(SummaryAggregator::aggregate(&labels));
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the interactive view into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        let text = self.buffer.text();
        editor::render_input(
            frame,
            sections[0],
            &self.buffer,
            parser::count_records(&text),
            &self.theme,
        );

        match &self.summary {
            Some(summary) if !summary.is_empty() => {
                let rows = rows_from_summary(summary);
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(sections[1]);
                summary_view::render_summary_table(
                    frame,
                    halves[0],
                    &rows,
                    summary.total_entries(),
                    &self.theme,
                );
                chart_view::render_bar_chart(frame, halves[1], &rows, &self.theme);
            }
            _ => summary_view::render_no_data(frame, sections[1], &self.theme),
        }

        let hints = Line::from(vec![
            Span::styled(" Ctrl+R ", self.theme.bold),
            Span::styled("process  ", self.theme.dim),
            Span::styled(" Esc ", self.theme.bold),
            Span::styled("quit  ", self.theme.dim),
            Span::styled(" Ctrl+C ", self.theme.bold),
            Span::styled("quit", self.theme.dim),
        ]);
        frame.render_widget(Paragraph::new(hints), sections[2]);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
