//! Multi-line input editor for pasted allocation records.
//!
//! [`InputBuffer`] is a small gap-free line editor: a `Vec<String>` of
//! lines plus a `(row, col)` cursor, where `col` is a character index
//! into the current line. It backs the free-text input pane and feeds
//! its full contents to the parser on each processing trigger.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

// ── InputBuffer ───────────────────────────────────────────────────────────────

/// Editable multi-line text buffer with a cursor.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    /// Buffer contents, one entry per line; always at least one line.
    lines: Vec<String>,
    /// Cursor line index.
    row: usize,
    /// Cursor column as a character index into `lines[row]`.
    col: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Empty buffer with the cursor on a single blank line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Buffer preloaded with `text`, cursor at the very end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.insert_str(text);
        buffer
    }

    /// The full buffer contents joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// `true` when every line is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Cursor position as `(row, col)` with `col` in characters.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Display width of the text left of the cursor on the current line.
    ///
    /// Character index and terminal column diverge for wide characters,
    /// so cursor rendering must go through this.
    pub fn cursor_display_col(&self) -> u16 {
        let line = &self.lines[self.row];
        let byte_idx = char_to_byte(line, self.col);
        line[..byte_idx].width() as u16
    }

    // ── Editing operations ────────────────────────────────────────────────────

    /// Insert a single character at the cursor.  `'\n'` splits the line.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let byte_idx = char_to_byte(&self.lines[self.row], self.col);
        self.lines[self.row].insert(byte_idx, c);
        self.col += 1;
    }

    /// Split the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let byte_idx = char_to_byte(&self.lines[self.row], self.col);
        let tail = self.lines[self.row].split_off(byte_idx);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
    }

    /// Insert a block of text at the cursor (paste path).
    ///
    /// CR/LF and lone CR line endings are normalised to `\n` first so a
    /// paste from any platform produces the same buffer contents.
    pub fn insert_str(&mut self, text: &str) {
        let normalised = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalised.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor, merging lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let byte_idx = char_to_byte(&self.lines[self.row], self.col);
            self.lines[self.row].remove(byte_idx);
        } else if self.row > 0 {
            let tail = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
            self.lines[self.row].push_str(&tail);
        }
    }

    /// Delete the character under the cursor, merging lines at line end.
    pub fn delete(&mut self) {
        let len = char_count(&self.lines[self.row]);
        if self.col < len {
            let byte_idx = char_to_byte(&self.lines[self.row], self.col);
            self.lines[self.row].remove(byte_idx);
        } else if self.row + 1 < self.lines.len() {
            let tail = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&tail);
        }
    }

    // ── Cursor movement ───────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_count(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_count(&self.lines[self.row]);
    }

    /// Read-only view of the buffer lines, for rendering.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the input pane into `area` and place the terminal cursor.
///
/// The block title carries the live record count, which tracks every
/// edit independently of whether processing has been triggered.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    buffer: &InputBuffer,
    record_count: usize,
    theme: &Theme,
) {
    let title = format!(" Data Input ({} records detected) ", record_count);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border)
        .title(title)
        .title_style(theme.input_count);

    let inner = block.inner(area);

    // Scroll vertically so the cursor line stays visible.
    let (row, _) = buffer.cursor();
    let visible = inner.height.max(1) as usize;
    let scroll = row.saturating_sub(visible - 1) as u16;

    let lines: Vec<Line> = buffer
        .lines()
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(theme.input_text)
        .block(block)
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);

    // Place the cursor; clamp to the pane so long lines don't push it
    // outside the border.
    let cursor_x = inner.x + buffer.cursor_display_col().min(inner.width.saturating_sub(1));
    let cursor_y = inner.y + (row as u16).saturating_sub(scroll).min(inner.height.saturating_sub(1));
    frame.set_cursor_position((cursor_x, cursor_y));
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Byte index of the `col`-th character of `line` (line length if past end).
fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

/// Number of characters in `line`.
fn char_count(line: &str) -> usize {
    line.chars().count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
