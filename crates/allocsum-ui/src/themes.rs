use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by allocsum-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Input editor ─────────────────────────────────────────────────────────
    pub input_text: Style,
    pub input_border: Style,
    /// Style of the live "records detected" figure in the input title.
    pub input_count: Style,

    // ── Percentage bars ──────────────────────────────────────────────────────
    /// Filled portion when the share is below 50 %.
    pub progress_low: Style,
    /// Filled portion when the share is between 50 % and 80 %.
    pub progress_medium: Style,
    /// Filled portion when the share is at or above 80 %.
    pub progress_high: Style,
    /// Unfilled (empty) portion of a percentage bar.
    pub progress_empty: Style,
    pub progress_label: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,

    // ── Chart ────────────────────────────────────────────────────────────────
    pub chart_bar: Style,
    pub chart_value: Style,
    pub chart_label: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            input_text: Style::default().fg(Color::White),
            input_border: Style::default().fg(Color::Blue),
            input_count: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            progress_low: Style::default().fg(Color::Green),
            progress_medium: Style::default().fg(Color::Yellow),
            progress_high: Style::default().fg(Color::Red),
            progress_empty: Style::default().fg(Color::DarkGray),
            progress_label: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            chart_bar: Style::default().fg(Color::Blue),
            chart_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            chart_label: Style::default().fg(Color::Gray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            input_text: Style::default().fg(Color::Black),
            input_border: Style::default().fg(Color::Blue),
            input_count: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            progress_low: Style::default().fg(Color::Green),
            progress_medium: Style::default().fg(Color::Yellow),
            progress_high: Style::default().fg(Color::Red),
            progress_empty: Style::default().fg(Color::Gray),
            progress_label: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            chart_bar: Style::default().fg(Color::Blue),
            chart_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            chart_label: Style::default().fg(Color::DarkGray),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            input_text: Style::default().fg(Color::White),
            input_border: Style::default().fg(Color::Cyan),
            input_count: Style::default().fg(Color::Yellow),

            progress_low: Style::default().fg(Color::Green),
            progress_medium: Style::default().fg(Color::Yellow),
            progress_high: Style::default().fg(Color::Red),
            progress_empty: Style::default().fg(Color::DarkGray),
            progress_label: Style::default().fg(Color::White),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),

            chart_bar: Style::default().fg(Color::Cyan),
            chart_value: Style::default().fg(Color::White),
            chart_label: Style::default().fg(Color::Gray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Return the appropriate percentage-bar fill style for a given share.
    ///
    /// * `< 50 %`  → `progress_low`
    /// * `50–80 %` → `progress_medium`
    /// * `≥ 80 %`  → `progress_high`
    pub fn progress_style(&self, percentage: f64) -> Style {
        if percentage >= 80.0 {
            self.progress_high
        } else if percentage >= 50.0 {
            self.progress_medium
        } else {
            self.progress_low
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
