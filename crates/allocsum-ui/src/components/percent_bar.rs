use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Configuration controlling visual appearance of a percentage bar.
pub struct PercentBarConfig {
    /// Total width in terminal columns of the bar portion (excluding label).
    pub width: u16,
    /// Character used to fill the completed portion of the bar.
    pub filled_char: char,
    /// Character used to fill the empty portion of the bar.
    pub empty_char: char,
    /// Whether to append the percentage figure after the bar.
    pub show_percentage: bool,
}

impl Default for PercentBarConfig {
    fn default() -> Self {
        Self {
            width: 20,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
            show_percentage: true,
        }
    }
}

// ── PercentBar ────────────────────────────────────────────────────────────────

/// Horizontal bar that visualises one bucket's share of the total.
///
/// Renders as a coloured fill + empty portion followed by the share
/// formatted to one decimal place, e.g. `████████░░░░ 50.0%`.
pub struct PercentBar<'a> {
    /// Share of the total, clamped to `[0.0, 100.0]`.
    pub percentage: f64,
    /// Theme from which colour styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: PercentBarConfig,
}

impl<'a> PercentBar<'a> {
    /// Construct a new bar for the given share.
    pub fn new(percentage: f64, theme: &'a Theme) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            theme,
            config: PercentBarConfig::default(),
        }
    }

    /// Render the bar as a [`Line`] suitable for embedding in any
    /// ratatui widget that accepts `Line` values (table cells included).
    pub fn to_line(&self) -> Line<'a> {
        let filled = ((self.percentage / 100.0) * self.config.width as f64) as u16;
        let empty = self.config.width.saturating_sub(filled);

        let bar_style = self.theme.progress_style(self.percentage);

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        let mut spans = vec![
            Span::styled(filled_str, bar_style),
            Span::styled(empty_str, self.theme.progress_empty),
        ];

        if self.config.show_percentage {
            spans.push(Span::styled(
                format!(" {:.1}%", self.percentage),
                self.theme.progress_label,
            ));
        }

        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
