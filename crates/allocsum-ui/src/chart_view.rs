//! Bar-chart view for the allocation categorizer TUI.
//!
//! Renders one bar per allocation bucket using
//! [`ratatui::widgets::BarChart`], keyed by label (category axis) and
//! count (value axis). Bars appear in exactly the same order as the
//! summary table rows; the chart never resorts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::summary_view::SummaryRowData;
use crate::themes::Theme;

/// Minimum and maximum bar width in terminal columns.
const MIN_BAR_WIDTH: u16 = 5;
const MAX_BAR_WIDTH: u16 = 12;

/// Render the bucket bar chart into `area`.
pub fn render_bar_chart(frame: &mut Frame, area: Rect, rows: &[SummaryRowData], theme: &Theme) {
    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .label(Line::from(row.allocation.clone()))
                .value(row.count)
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Visualization "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(rows))
        .bar_gap(1)
        .bar_style(theme.chart_bar)
        .value_style(theme.chart_value)
        .label_style(theme.chart_label);

    frame.render_widget(chart, area);
}

/// Bar width sized to the longest label so category names stay readable.
fn bar_width(rows: &[SummaryRowData]) -> u16 {
    rows.iter()
        .map(|row| row.allocation.chars().count() as u16)
        .max()
        .unwrap_or(MIN_BAR_WIDTH)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
