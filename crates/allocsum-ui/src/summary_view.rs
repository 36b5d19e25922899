//! Summary table view for the allocation categorizer TUI.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per
//! allocation bucket plus a highlighted totals row at the bottom. The
//! percentage column embeds a [`PercentBar`] per row.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use allocsum_core::formatting;
use allocsum_core::models::Summary;

use crate::components::percent_bar::PercentBar;
use crate::themes::Theme;

/// Data for a single row in the summary table, ready for display.
#[derive(Debug, Clone)]
pub struct SummaryRowData {
    /// Rendered allocation label, e.g. `"20 GB"` or `"Unknown"`.
    pub allocation: String,
    /// Number of records in this bucket.
    pub count: u64,
    /// Raw share of the total in percent (unrounded; used for the bar).
    pub percentage: f64,
}

/// Convert an aggregated [`Summary`] into display rows, order preserved.
///
/// The same rows feed both the table and the chart so the two surfaces
/// can never disagree on content or ordering.
pub fn rows_from_summary(summary: &Summary) -> Vec<SummaryRowData> {
    summary
        .entries
        .iter()
        .map(|entry| SummaryRowData {
            allocation: entry.label.to_string(),
            count: entry.count,
            percentage: summary.percentage_of(entry.count),
        })
        .collect()
}

/// Render the summary table into `area`.
///
/// The table has one data row per [`SummaryRowData`] entry, followed by
/// a highlighted totals row, all within a bordered block.
pub fn render_summary_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[SummaryRowData],
    total_entries: u64,
    theme: &Theme,
) {
    let header_cells = ["Allocation", "Count", "Percentage"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(row.allocation.clone()),
                Cell::from(formatting::format_number(row.count as f64, 0)),
                Cell::from(PercentBar::new(row.percentage, theme).to_line()),
            ])
            .style(style)
        })
        .collect();

    // Totals row – styled separately to stand out.
    let total_row = Row::new(vec![
        Cell::from("TOTAL").style(theme.table_total),
        Cell::from(formatting::format_number(total_entries as f64, 0)),
        Cell::from(format!("{} total entries", total_entries)),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Min(28),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Summary "))
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a placeholder when nothing has been processed yet.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Ready to process data", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Paste allocation records into the input pane,",
            theme.dim,
        )),
        Line::from(Span::styled(
            "then press Ctrl+R to see the summary and chart.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text))
            .block(Block::default().borders(Borders::ALL).title(" Summary ")),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
